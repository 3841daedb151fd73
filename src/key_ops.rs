// src/key_ops.rs
//! Key sources and DER parsing
//!
//! Keys arrive as a loaded [`KeyPair`], as base64 text, or as raw DER.
//! Parsing is deferred until an operation actually needs the key.

use std::fmt;

use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::aliases::KeyBytes;
use crate::encoding::decode;
use crate::enums::OaepHash;
use crate::error::{Result, RsaError};
use crate::key_pair::KeyPair;

/// Which half of a key pair an operation needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    Public,
    Private,
}

impl KeyRole {
    pub(crate) fn label(self) -> &'static str {
        match self {
            KeyRole::Public => "public key",
            KeyRole::Private => "private key",
        }
    }
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyRole::Public => f.write_str("public"),
            KeyRole::Private => f.write_str("private"),
        }
    }
}

/// Where the key for an encrypt/decrypt call comes from
#[derive(Debug, Clone, Copy)]
pub enum KeySource<'a> {
    /// The matching half of a loaded key pair
    Pair(&'a KeyPair),
    /// Base64 text of a DER key
    Base64(&'a str),
    /// Raw DER bytes
    Der(&'a [u8]),
}

impl<'a> From<&'a KeyPair> for KeySource<'a> {
    fn from(pair: &'a KeyPair) -> Self {
        KeySource::Pair(pair)
    }
}

impl<'a> From<&'a str> for KeySource<'a> {
    fn from(text: &'a str) -> Self {
        KeySource::Base64(text)
    }
}

impl<'a> From<&'a [u8]> for KeySource<'a> {
    fn from(der: &'a [u8]) -> Self {
        KeySource::Der(der)
    }
}

/// DER bytes resolved from a [`KeySource`]; decoded text is held as a secret
pub(crate) enum DerBytes<'a> {
    Borrowed(&'a [u8]),
    Decoded(KeyBytes),
}

impl DerBytes<'_> {
    pub(crate) fn as_slice(&self) -> &[u8] {
        match self {
            DerBytes::Borrowed(bytes) => bytes,
            DerBytes::Decoded(key) => &key[..],
        }
    }
}

impl<'a> KeySource<'a> {
    /// Resolve to DER bytes for `role`; fails on empty or undecodable input
    pub(crate) fn der(self, role: KeyRole) -> Result<DerBytes<'a>> {
        let der = match self {
            KeySource::Pair(pair) => DerBytes::Borrowed(pair.der(role)),
            KeySource::Base64(text) if text.is_empty() => DerBytes::Borrowed(&[]),
            KeySource::Base64(text) => DerBytes::Decoded(KeyBytes::new(decode(text)?)),
            KeySource::Der(bytes) => DerBytes::Borrowed(bytes),
        };
        if der.as_slice().is_empty() {
            return Err(RsaError::EmptyInput(role.label()));
        }
        Ok(der)
    }
}

/// Parse an X.509 SubjectPublicKeyInfo (or PKCS#1) RSA public key
///
/// Moduli above [`MAX_KEY_BITS`](crate::consts::MAX_KEY_BITS) are rejected.
pub fn parse_public_key(der: &[u8]) -> Result<RsaPublicKey> {
    RsaPublicKey::from_public_key_der(der).or_else(|spki_err| {
        RsaPublicKey::from_pkcs1_der(der).map_err(|pkcs1_err| RsaError::MalformedKey {
            role: KeyRole::Public,
            reason: format!("not SPKI ({spki_err}) nor PKCS#1 ({pkcs1_err})"),
        })
    })
}

/// Parse a PKCS#8 (or PKCS#1) RSA private key
///
/// Moduli above [`MAX_KEY_BITS`](crate::consts::MAX_KEY_BITS) are rejected.
pub fn parse_private_key(der: &[u8]) -> Result<RsaPrivateKey> {
    RsaPrivateKey::from_pkcs8_der(der).or_else(|pkcs8_err| {
        RsaPrivateKey::from_pkcs1_der(der).map_err(|pkcs1_err| RsaError::MalformedKey {
            role: KeyRole::Private,
            reason: format!("not PKCS#8 ({pkcs8_err}) nor PKCS#1 ({pkcs1_err})"),
        })
    })
}

/// Largest plaintext OAEP can carry: `k - 2*hLen - 2`
pub fn max_plaintext_len(key: &RsaPublicKey, hash: OaepHash) -> usize {
    key.size().saturating_sub(2 * hash.output_len() + 2)
}
