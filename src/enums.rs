// src/enums.rs
//! Public enum types used throughout the crate

use std::fmt;
use std::str::FromStr;

use rsa::Oaep;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::Sha256;

use crate::error::ConfigError;

/// Digest used for both the OAEP label hash and MGF1
///
/// `Sha1` matches the license server's RSAES-OAEP-SHA keys and is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OaepHash {
    #[default]
    Sha1,
    Sha256,
}

impl OaepHash {
    /// Fresh padding scheme for one operation
    pub fn padding(self) -> Oaep {
        match self {
            OaepHash::Sha1 => Oaep::new::<Sha1>(),
            OaepHash::Sha256 => Oaep::new::<Sha256>(),
        }
    }

    /// Digest output size in bytes
    pub fn output_len(self) -> usize {
        match self {
            OaepHash::Sha1 => 20,
            OaepHash::Sha256 => 32,
        }
    }
}

impl fmt::Display for OaepHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OaepHash::Sha1 => f.write_str("sha1"),
            OaepHash::Sha256 => f.write_str("sha256"),
        }
    }
}

impl FromStr for OaepHash {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha1" | "sha-1" => Ok(OaepHash::Sha1),
            "sha256" | "sha-256" => Ok(OaepHash::Sha256),
            _ => Err(ConfigError::InvalidHash(s.to_owned())),
        }
    }
}
