// src/consts.rs
//! Shared constants — key sizes and config locations

/// Modulus size for newly generated key pairs
pub const DEFAULT_KEY_BITS: usize = 2048;

/// Smallest modulus `KeyPair::generate` will produce
pub const MIN_KEY_BITS: usize = 1024;

/// Largest modulus the `rsa` crate will parse or generate
///
/// Larger keys are reported as `MalformedKey` when loaded.
pub const MAX_KEY_BITS: usize = 4096;

/// Environment variable naming the TOML config file
pub const CONFIG_ENV: &str = "LM_RSA_CONFIG";

/// Environment variable overriding `[oaep] hash`
pub const OAEP_HASH_ENV: &str = "LM_RSA_OAEP_HASH";

/// Config file used when `LM_RSA_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "lm-rsa.toml";
