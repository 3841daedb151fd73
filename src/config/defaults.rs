// src/config/defaults.rs
use crate::config::app::{KeygenSettings, OaepSettings};
use crate::consts::DEFAULT_KEY_BITS;
use crate::enums::OaepHash;

impl Default for OaepSettings {
    fn default() -> Self {
        Self {
            hash: OaepHash::default(),
        }
    }
}

impl Default for KeygenSettings {
    fn default() -> Self {
        Self {
            bits: DEFAULT_KEY_BITS,
        }
    }
}
