// src/config/app.rs
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::consts::{CONFIG_ENV, DEFAULT_CONFIG_PATH, OAEP_HASH_ENV};
use crate::enums::OaepHash;
use crate::error::ConfigError;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub oaep: OaepSettings,
    pub keygen: KeygenSettings,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct OaepSettings {
    pub hash: OaepHash,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct KeygenSettings {
    pub bits: usize,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Global config, read once from `LM_RSA_CONFIG` (or `lm-rsa.toml`)
///
/// Only the command-line tool reads this; library calls never touch disk.
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let env_hash = std::env::var(OAEP_HASH_ENV).ok();
        resolve(Path::new(&config_path), env_hash.as_deref())
    })
}

/// Build the effective config from a file path and an optional hash override
///
/// Never fails: a missing or broken file falls back to the defaults, and an
/// unknown hash override is ignored.
pub fn resolve(path: &Path, env_hash: Option<&str>) -> Config {
    let mut conf = if path.exists() {
        from_path(path).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "unusable config, using defaults");
            Config::default()
        })
    } else {
        debug!(path = %path.display(), "no config file, using defaults");
        Config::default()
    };

    if let Some(value) = env_hash {
        match value.parse::<OaepHash>() {
            Ok(hash) => conf.oaep.hash = hash,
            Err(err) => warn!(error = %err, "ignoring {OAEP_HASH_ENV}"),
        }
    }
    conf
}

/// Read and parse one config file
pub fn from_path(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    from_toml(&content)
}

pub fn from_toml(content: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(content)?)
}
