// src/error.rs
//! Public error types for the entire crate

use thiserror::Error;

use crate::key_ops::KeyRole;

#[derive(Error, Debug)]
pub enum RsaError {
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    #[error("invalid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("malformed {role} key: {reason}")]
    MalformedKey { role: KeyRole, reason: String },

    #[error("plaintext is {len} bytes, OAEP limit for this key is {max}")]
    MessageTooLong { len: usize, max: usize },

    #[error("key size {bits} is outside {min}..={max} bits")]
    KeySize { bits: usize, min: usize, max: usize },

    #[error("key generation failed: {0}")]
    KeyGen(#[source] rsa::Error),

    #[error("key encoding failed: {0}")]
    Encode(String),

    #[error("RSA-OAEP encryption failed: {0}")]
    Encrypt(#[source] rsa::Error),

    #[error("RSA-OAEP decryption failed: {0}")]
    Decrypt(#[source] rsa::Error),

    #[error("plaintext is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unknown OAEP hash `{0}` (expected sha1 or sha256)")]
    InvalidHash(String),
}

pub type Result<T> = std::result::Result<T, RsaError>;
