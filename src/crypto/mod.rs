// src/crypto/mod.rs
//! RSA-OAEP encryption and decryption — the adapter boundary
//!
//! Every failure below this module is contained: it is logged through
//! `tracing` and returned as an [`RsaError`], never as a panic.

mod decrypt;
mod encrypt;
mod legacy;

pub use decrypt::{decrypt, decrypt_to_string, decrypt_to_string_with, decrypt_with};
pub use encrypt::{encrypt, encrypt_with};
pub use legacy::{decrypt_or_empty, encrypt_or_empty};

use tracing::{debug, warn};

use crate::error::RsaError;

/// Send a contained failure to the log sink
pub(crate) fn report(operation: &'static str, err: &RsaError) {
    match err {
        RsaError::EmptyInput(what) => debug!(operation, what = *what, "rejected empty input"),
        _ => warn!(operation, error = %err, "RSA operation failed"),
    }
}
