// src/bin/lm_rsa.rs
//! lm-rsa — generate keys, encrypt and decrypt from the command line
//!
//! Key files hold base64 text, exactly what `keygen` prints.

use anyhow::{bail, Context, Result};
use lm_rsa::{decrypt_to_string_with, encrypt_with, load_config, KeyPair, KeySource};
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage:
  lm-rsa keygen [bits]
  lm-rsa encrypt <public-key-file> <plaintext>
  lm-rsa decrypt <private-key-file> <ciphertext>";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["keygen"] => keygen(load_config().keygen.bits),
        ["keygen", bits] => keygen(bits.parse().context("bits must be a number")?),
        ["encrypt", key_file, plaintext] => {
            let key = read_key(key_file)?;
            let hash = load_config().oaep.hash;
            println!("{}", encrypt_with(*plaintext, KeySource::Base64(&key), hash)?);
            Ok(())
        }
        ["decrypt", key_file, ciphertext] => {
            let key = read_key(key_file)?;
            let hash = load_config().oaep.hash;
            let plaintext = decrypt_to_string_with(ciphertext, KeySource::Base64(&key), hash)?;
            println!("{plaintext}");
            Ok(())
        }
        _ => bail!("{USAGE}"),
    }
}

fn keygen(bits: usize) -> Result<()> {
    info!(bits, "generating RSA key pair");
    let pair = KeyPair::generate(bits)?;
    println!("public:  {}", pair.get_public());
    println!("private: {}", pair.get_private());
    Ok(())
}

fn read_key(path: &str) -> Result<String> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading key file {path}"))?;
    Ok(text.trim().to_owned())
}
