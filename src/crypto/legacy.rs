// src/crypto/legacy.rs
//! Empty-result contract for callers written against the old client API
//!
//! An empty return is the only failure signal, so a failure cannot be told
//! apart from empty input. Prefer [`encrypt`](super::encrypt) and
//! [`decrypt`](super::decrypt) in new code. The error has already been
//! logged by the time it is discarded here.

use crate::key_ops::KeySource;

use super::{decrypt, encrypt};

/// [`encrypt`](super::encrypt), or `""` on any failure
pub fn encrypt_or_empty<'a>(plaintext: impl AsRef<[u8]>, key: impl Into<KeySource<'a>>) -> String {
    encrypt(plaintext, key).unwrap_or_default()
}

/// [`decrypt`](super::decrypt), or an empty buffer on any failure
pub fn decrypt_or_empty<'a>(ciphertext: &str, key: impl Into<KeySource<'a>>) -> Vec<u8> {
    decrypt(ciphertext, key).unwrap_or_default()
}
