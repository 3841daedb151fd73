// tests/crypto_tests.rs
mod common;

use common::{other_pair, setup, test_pair};
use lm_rsa::encoding::{decode, encode};
use lm_rsa::key_ops::{max_plaintext_len, parse_private_key, parse_public_key};
use lm_rsa::{
    decrypt, decrypt_or_empty, decrypt_to_string, decrypt_with, encrypt, encrypt_or_empty,
    encrypt_with, KeyPair, KeySource, OaepHash, RsaError,
};
use rsa::pkcs1::{EncodeRsaPrivateKey, EncodeRsaPublicKey};

#[test]
fn test_roundtrip_with_key_pair() {
    setup();
    let pair = test_pair();
    let ciphertext = encrypt(b"license-token-42", pair).unwrap();
    let plaintext = decrypt(&ciphertext, pair).unwrap();
    assert_eq!(plaintext, b"license-token-42");
}

#[test]
fn test_roundtrip_with_base64_and_der_sources() {
    let pair = test_pair();
    let public_b64 = pair.get_public();
    let private_der = decode(&pair.get_private()).unwrap();

    let ciphertext = encrypt("hello", KeySource::Base64(&public_b64)).unwrap();
    let plaintext = decrypt(&ciphertext, KeySource::Der(&private_der)).unwrap();
    assert_eq!(plaintext, b"hello");

    let public_der = decode(&public_b64).unwrap();
    let ciphertext = encrypt("hello", public_der.as_slice()).unwrap();
    let plaintext = decrypt_to_string(&ciphertext, pair.get_private().as_str()).unwrap();
    assert_eq!(plaintext, "hello");
}

#[test]
fn test_ciphertext_is_base64_of_one_block() {
    let pair = test_pair();
    let ciphertext = encrypt("x", pair).unwrap();
    assert_eq!(decode(&ciphertext).unwrap().len(), 1024 / 8);
}

#[test]
fn test_encrypt_is_randomized_per_call() {
    let pair = test_pair();
    let first = encrypt("same input", pair).unwrap();
    let second = encrypt("same input", pair).unwrap();

    assert_ne!(first, second);
    assert_eq!(decrypt(&first, pair).unwrap(), b"same input");
    assert_eq!(decrypt(&second, pair).unwrap(), b"same input");
}

#[test]
fn test_tampered_ciphertext_fails_padding_check() {
    let pair = test_pair();
    let mut block = decode(&encrypt("do not touch", pair).unwrap()).unwrap();
    let mid = block.len() / 2;
    block[mid] ^= 0x01;
    let tampered = encode(&block);

    assert!(matches!(decrypt(&tampered, pair), Err(RsaError::Decrypt(_))));
    assert!(decrypt_or_empty(&tampered, pair).is_empty());
}

#[test]
fn test_wrong_private_key_fails() {
    let ciphertext = encrypt("for pair one", test_pair()).unwrap();
    assert!(matches!(
        decrypt(&ciphertext, other_pair()),
        Err(RsaError::Decrypt(_))
    ));
}

#[test]
fn test_empty_inputs_are_rejected() {
    let pair = test_pair();
    let ciphertext = encrypt("data", pair).unwrap();

    assert!(matches!(encrypt("", pair), Err(RsaError::EmptyInput("plaintext"))));
    assert!(matches!(
        encrypt("data", ""),
        Err(RsaError::EmptyInput("public key"))
    ));
    assert!(matches!(
        encrypt("data", KeySource::Der(&[])),
        Err(RsaError::EmptyInput("public key"))
    ));
    assert!(matches!(
        encrypt("data", &KeyPair::new()),
        Err(RsaError::EmptyInput("public key"))
    ));
    assert!(matches!(decrypt("", pair), Err(RsaError::EmptyInput("ciphertext"))));
    assert!(matches!(
        decrypt(&ciphertext, ""),
        Err(RsaError::EmptyInput("private key"))
    ));
}

#[test]
fn test_empty_result_contract() {
    let pair = test_pair();
    let ciphertext = encrypt("data", pair).unwrap();

    assert_eq!(encrypt_or_empty("", pair), "");
    assert_eq!(encrypt_or_empty("data", ""), "");
    assert!(decrypt_or_empty("", pair).is_empty());
    assert!(decrypt_or_empty(&ciphertext, "").is_empty());
    assert_eq!(decrypt_or_empty(&encrypt_or_empty("data", pair), pair), b"data");
}

#[test]
fn test_malformed_key_is_contained() {
    setup();
    assert_eq!(encrypt_or_empty("data", "not-a-valid-base64-key"), "");
    assert!(matches!(
        encrypt("data", "not-a-valid-base64-key"),
        Err(RsaError::InvalidBase64(_))
    ));
    // Valid base64, not a key
    assert!(matches!(
        encrypt("data", "AAAAAAAA"),
        Err(RsaError::MalformedKey { .. })
    ));
}

#[test]
fn test_keys_used_for_the_wrong_role_are_malformed() {
    let pair = test_pair();
    let ciphertext = encrypt("data", pair).unwrap();
    let public_b64 = pair.get_public();
    let private_b64 = pair.get_private();

    assert!(matches!(
        decrypt(&ciphertext, public_b64.as_str()),
        Err(RsaError::MalformedKey { .. })
    ));
    assert!(matches!(
        encrypt("data", private_b64.as_str()),
        Err(RsaError::MalformedKey { .. })
    ));
}

#[test]
fn test_pkcs1_keys_are_accepted() {
    let pair = test_pair();
    let public_key = parse_public_key(&decode(&pair.get_public()).unwrap()).unwrap();
    let private_key = parse_private_key(&decode(&pair.get_private()).unwrap()).unwrap();
    let public_pkcs1 = public_key.to_pkcs1_der().unwrap();
    let private_pkcs1 = private_key.to_pkcs1_der().unwrap();

    let ciphertext = encrypt("pkcs1", KeySource::Der(public_pkcs1.as_bytes())).unwrap();
    let plaintext = decrypt(&ciphertext, KeySource::Der(private_pkcs1.as_bytes())).unwrap();
    assert_eq!(plaintext, b"pkcs1");
}

/// PKCS#1 RSAPublicKey DER with a 4104-bit modulus and e = 65537
fn oversized_public_key_der() -> Vec<u8> {
    let mut der = vec![0x30, 0x82, 0x02, 0x0b];
    der.extend_from_slice(&[0x02, 0x82, 0x02, 0x02, 0x00]);
    der.extend_from_slice(&[0xc3; 513]);
    der.extend_from_slice(&[0x02, 0x03, 0x01, 0x00, 0x01]);
    der
}

#[test]
fn test_keys_above_size_ceiling_are_malformed() {
    let der = oversized_public_key_der();
    assert_eq!(der.len(), 4 + 0x020b);
    assert!(matches!(
        encrypt("data", der.as_slice()),
        Err(RsaError::MalformedKey { .. })
    ));
}

#[test]
fn test_oaep_payload_limit() {
    let pair = test_pair();
    let public_key = parse_public_key(&decode(&pair.get_public()).unwrap()).unwrap();
    assert_eq!(max_plaintext_len(&public_key, OaepHash::Sha1), 86);
    assert_eq!(max_plaintext_len(&public_key, OaepHash::Sha256), 62);

    let fits = vec![b'a'; 86];
    let too_long = vec![b'a'; 87];
    let ciphertext = encrypt_with(&fits, pair, OaepHash::Sha1).unwrap();
    assert_eq!(decrypt_with(&ciphertext, pair, OaepHash::Sha1).unwrap(), fits);
    assert!(matches!(
        encrypt_with(&too_long, pair, OaepHash::Sha1),
        Err(RsaError::MessageTooLong { len: 87, max: 86 })
    ));
}

#[test]
fn test_default_scheme_is_oaep_sha1() {
    let pair = test_pair();
    let ciphertext = encrypt("default scheme", pair).unwrap();

    assert_eq!(
        decrypt_with(&ciphertext, pair, OaepHash::Sha1).unwrap(),
        b"default scheme"
    );
    assert!(matches!(
        decrypt_with(&ciphertext, pair, OaepHash::Sha256),
        Err(RsaError::Decrypt(_))
    ));
}

#[test]
fn test_oaep_hash_must_match() {
    let pair = test_pair();
    let ciphertext = encrypt_with("sha256 payload", pair, OaepHash::Sha256).unwrap();

    assert!(matches!(
        decrypt_with(&ciphertext, pair, OaepHash::Sha1),
        Err(RsaError::Decrypt(_))
    ));
    assert_eq!(
        decrypt_with(&ciphertext, pair, OaepHash::Sha256).unwrap(),
        b"sha256 payload"
    );
}

#[test]
fn test_decrypt_to_string_rejects_non_utf8() {
    let pair = test_pair();
    let ciphertext = encrypt([0xffu8, 0xfe, 0xfd], pair).unwrap();
    assert!(matches!(
        decrypt_to_string(&ciphertext, pair),
        Err(RsaError::InvalidUtf8(_))
    ));
}

#[test]
fn test_shared_pair_across_threads() {
    let pair = test_pair();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                scope.spawn(move || {
                    let message = format!("thread-{i}");
                    let ciphertext = encrypt(&message, pair).unwrap();
                    decrypt_to_string(&ciphertext, pair).unwrap() == message
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    });
}
