// src/key_pair.rs
//! In-memory RSA key pair store
//!
//! Holds DER bytes only. Nothing is parsed at load time; a bad key surfaces
//! on first use. Both halves are zeroized when dropped or replaced.

use std::fmt;

use rand::rngs::OsRng;
use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};
use tracing::debug;

use crate::aliases::KeyBytes;
use crate::consts::{MAX_KEY_BITS, MIN_KEY_BITS};
use crate::encoding::{decode, encode};
use crate::error::{Result, RsaError};
use crate::key_ops::KeyRole;

#[derive(Default)]
pub struct KeyPair {
    private: Option<KeyBytes>,
    public: Option<KeyBytes>,
}

impl KeyPair {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a fresh pair: SPKI public half, PKCS#8 private half
    pub fn generate(bits: usize) -> Result<Self> {
        if !(MIN_KEY_BITS..=MAX_KEY_BITS).contains(&bits) {
            return Err(RsaError::KeySize {
                bits,
                min: MIN_KEY_BITS,
                max: MAX_KEY_BITS,
            });
        }
        let private_key = RsaPrivateKey::new(&mut OsRng, bits).map_err(RsaError::KeyGen)?;
        let public_key = RsaPublicKey::from(&private_key);

        let private_der = private_key
            .to_pkcs8_der()
            .map_err(|e| RsaError::Encode(e.to_string()))?;
        let public_der = public_key
            .to_public_key_der()
            .map_err(|e| RsaError::Encode(e.to_string()))?;

        debug!(bits, "generated RSA key pair");
        Ok(Self {
            private: Some(KeyBytes::new(private_der.as_bytes().to_vec())),
            public: Some(KeyBytes::new(public_der.as_bytes().to_vec())),
        })
    }

    /// Replace the private half from base64 text
    pub fn load_private(&mut self, text: &str) -> Result<()> {
        self.load(KeyRole::Private, text)
    }

    /// Replace the public half from base64 text
    pub fn load_public(&mut self, text: &str) -> Result<()> {
        self.load(KeyRole::Public, text)
    }

    pub fn load_private_der(&mut self, der: &[u8]) -> Result<()> {
        self.store(KeyRole::Private, der.to_vec())
    }

    pub fn load_public_der(&mut self, der: &[u8]) -> Result<()> {
        self.store(KeyRole::Public, der.to_vec())
    }

    /// Private half as base64, or `""` when unset
    pub fn get_private(&self) -> String {
        Self::encoded(&self.private)
    }

    /// Public half as base64, or `""` when unset
    pub fn get_public(&self) -> String {
        Self::encoded(&self.public)
    }

    pub fn has_private(&self) -> bool {
        self.private.is_some()
    }

    pub fn has_public(&self) -> bool {
        self.public.is_some()
    }

    /// Raw DER for one half; empty when unset
    pub(crate) fn der(&self, role: KeyRole) -> &[u8] {
        let slot = match role {
            KeyRole::Private => &self.private,
            KeyRole::Public => &self.public,
        };
        slot.as_ref()
            .map(|key| &key[..])
            .unwrap_or(&[])
    }

    fn load(&mut self, role: KeyRole, text: &str) -> Result<()> {
        if text.is_empty() {
            return Err(RsaError::EmptyInput(role.label()));
        }
        self.store(role, decode(text)?)
    }

    fn store(&mut self, role: KeyRole, der: Vec<u8>) -> Result<()> {
        if der.is_empty() {
            return Err(RsaError::EmptyInput(role.label()));
        }
        debug!(%role, len = der.len(), "loaded key bytes");
        let key = Some(KeyBytes::new(der));
        // Assigning drops (and wipes) the previous buffer
        match role {
            KeyRole::Private => self.private = key,
            KeyRole::Public => self.public = key,
        }
        Ok(())
    }

    fn encoded(slot: &Option<KeyBytes>) -> String {
        slot.as_ref()
            .map(|key| encode(&key[..]))
            .unwrap_or_default()
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("private", &self.private.as_ref().map(|_| "[REDACTED]"))
            .field("public", &self.public.as_ref().map(|k| k.len()))
            .finish()
    }
}
