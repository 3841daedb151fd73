// src/aliases.rs
//! Secret buffer types backed by zeroize
//!
//! Everything holding key material goes through these so it is wiped on drop.

use zeroize::Zeroizing;

pub type KeyBytes = Zeroizing<Vec<u8>>; // DER-encoded RSA key, either half
pub type KeyText = Zeroizing<String>; // base64 key text staged for decoding
