// src/lib.rs
//! lm-rsa — RSA-OAEP primitives for the license client
//!
//! Features:
//! - RSA-OAEP (SHA-1 or SHA-256) over the RustCrypto `rsa` crate
//! - Keys as base64 text or DER (SPKI / PKCS#8, PKCS#1 accepted)
//! - Key material zeroized on drop via zeroize
//! - Contained failures: typed errors, logged through `tracing`

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod encoding;
pub mod enums;
pub mod error;
pub mod key_ops;
pub mod key_pair;

// Re-export everything users need at the crate root
pub use config::load as load_config;
pub use crypto::{
    decrypt, decrypt_or_empty, decrypt_to_string, decrypt_to_string_with, decrypt_with, encrypt,
    encrypt_or_empty, encrypt_with,
};
pub use enums::OaepHash;
pub use error::{ConfigError, Result, RsaError};
pub use key_ops::{KeyRole, KeySource};
pub use key_pair::KeyPair;
