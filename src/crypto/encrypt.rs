// src/crypto/encrypt.rs
use rand::rngs::OsRng;

use crate::encoding::encode;
use crate::enums::OaepHash;
use crate::error::{Result, RsaError};
use crate::key_ops::{max_plaintext_len, parse_public_key, KeyRole, KeySource};

use super::report;

/// Encrypt with OAEP-SHA1, the license server's scheme → base64 ciphertext
pub fn encrypt<'a>(plaintext: impl AsRef<[u8]>, key: impl Into<KeySource<'a>>) -> Result<String> {
    encrypt_with(plaintext, key, OaepHash::default())
}

/// Encrypt with an explicit OAEP hash → base64 ciphertext
///
/// Each call seeds OAEP from the OS entropy source, so equal inputs never
/// produce equal ciphertext.
pub fn encrypt_with<'a>(
    plaintext: impl AsRef<[u8]>,
    key: impl Into<KeySource<'a>>,
    hash: OaepHash,
) -> Result<String> {
    oaep_encrypt(plaintext.as_ref(), key.into(), hash).inspect_err(|err| report("encrypt", err))
}

fn oaep_encrypt(plaintext: &[u8], key: KeySource<'_>, hash: OaepHash) -> Result<String> {
    if plaintext.is_empty() {
        return Err(RsaError::EmptyInput("plaintext"));
    }
    let der = key.der(KeyRole::Public)?;
    let public_key = parse_public_key(der.as_slice())?;

    let max = max_plaintext_len(&public_key, hash);
    if plaintext.len() > max {
        return Err(RsaError::MessageTooLong {
            len: plaintext.len(),
            max,
        });
    }

    let ciphertext = public_key
        .encrypt(&mut OsRng, hash.padding(), plaintext)
        .map_err(RsaError::Encrypt)?;
    Ok(encode(&ciphertext))
}
