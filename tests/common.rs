// tests/common.rs
//! Shared test utilities — logging setup and a once-generated key pair
#![allow(dead_code)]

use std::sync::OnceLock;

use lm_rsa::KeyPair;

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Smallest size keygen allows — keeps debug-mode tests fast
pub const TEST_KEY_BITS: usize = 1024;

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();

    #[cfg(not(feature = "logging"))]
    { /* no-op */ }
}

/// One key pair shared by every test in a binary; RSA keygen is slow
pub fn test_pair() -> &'static KeyPair {
    static PAIR: OnceLock<KeyPair> = OnceLock::new();
    PAIR.get_or_init(|| KeyPair::generate(TEST_KEY_BITS).unwrap())
}

/// A second, unrelated key pair
pub fn other_pair() -> &'static KeyPair {
    static PAIR: OnceLock<KeyPair> = OnceLock::new();
    PAIR.get_or_init(|| KeyPair::generate(TEST_KEY_BITS).unwrap())
}
