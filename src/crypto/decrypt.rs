// src/crypto/decrypt.rs
use crate::encoding::decode;
use crate::enums::OaepHash;
use crate::error::{Result, RsaError};
use crate::key_ops::{parse_private_key, KeyRole, KeySource};

use super::report;

/// Decrypt base64 ciphertext with OAEP-SHA1, the license server's scheme
pub fn decrypt<'a>(ciphertext: &str, key: impl Into<KeySource<'a>>) -> Result<Vec<u8>> {
    decrypt_with(ciphertext, key, OaepHash::default())
}

/// Decrypt base64 ciphertext with an explicit OAEP hash
///
/// A tampered block fails the OAEP padding check and returns
/// [`RsaError::Decrypt`]; garbage plaintext is never returned.
pub fn decrypt_with<'a>(
    ciphertext: &str,
    key: impl Into<KeySource<'a>>,
    hash: OaepHash,
) -> Result<Vec<u8>> {
    oaep_decrypt(ciphertext, key.into(), hash).inspect_err(|err| report("decrypt", err))
}

/// Decrypt and require the plaintext to be UTF-8
pub fn decrypt_to_string<'a>(ciphertext: &str, key: impl Into<KeySource<'a>>) -> Result<String> {
    decrypt_to_string_with(ciphertext, key, OaepHash::default())
}

pub fn decrypt_to_string_with<'a>(
    ciphertext: &str,
    key: impl Into<KeySource<'a>>,
    hash: OaepHash,
) -> Result<String> {
    let plaintext = decrypt_with(ciphertext, key, hash)?;
    String::from_utf8(plaintext)
        .map_err(RsaError::from)
        .inspect_err(|err| report("decrypt", err))
}

fn oaep_decrypt(ciphertext: &str, key: KeySource<'_>, hash: OaepHash) -> Result<Vec<u8>> {
    if ciphertext.is_empty() {
        return Err(RsaError::EmptyInput("ciphertext"));
    }
    let der = key.der(KeyRole::Private)?;
    let private_key = parse_private_key(der.as_slice())?;

    let block = decode(ciphertext)?;
    private_key
        .decrypt(hash.padding(), &block)
        .map_err(RsaError::Decrypt)
}
