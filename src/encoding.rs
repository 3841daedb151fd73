// src/encoding.rs
//! Base64 codec used at every text boundary (keys and ciphertext)
//!
//! Encoding is standard alphabet, padded, single line. Decoding is lenient
//! the way the license tooling needs: line breaks are ignored and padding
//! is optional.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::aliases::KeyText;
use crate::error::Result;

const CODEC: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode bytes as padded standard base64
pub fn encode(bytes: &[u8]) -> String {
    CODEC.encode(bytes)
}

/// Decode base64 text, skipping ASCII whitespace
///
/// The whitespace-free copy is wiped once decoded; it may be a private key.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    if text.bytes().any(|b| b.is_ascii_whitespace()) {
        // Sized up front so the buffer never reallocates and leaves an unwiped copy
        let mut compact = KeyText::new(String::with_capacity(text.len()));
        compact.extend(text.chars().filter(|c| !c.is_ascii_whitespace()));
        return Ok(CODEC.decode(compact.as_bytes())?);
    }
    Ok(CODEC.decode(text)?)
}
