//! Key material generation.
//!
//! Prints `KEYSTONE_CRYPTO_KEY=` and `KEYSTONE_CRYPTO_NONCE=` lines so the
//! output can be appended to a `.env` file directly.

use anyhow::{Context, Result};
use keystone_config::constants::DEFAULT_ENV_PREFIX;
use keystone_crypto::{KeySize, generate_key, generate_nonce};
use zeroize::Zeroizing;

/// Parses a key size given in bytes.
pub fn parse_key_size(s: &str) -> std::result::Result<KeySize, String> {
    s.trim()
        .parse::<usize>()
        .ok()
        .and_then(KeySize::from_len)
        .ok_or_else(|| "key size must be 16, 24 or 32 bytes".to_string())
}

pub fn run(key_size: KeySize) -> Result<()> {
    let key = Zeroizing::new(generate_key(key_size).context("Failed to generate key")?);
    let nonce = generate_nonce().context("Failed to generate nonce")?;

    println!("{}_CRYPTO_KEY={}", DEFAULT_ENV_PREFIX, key.as_str());
    println!("{}_CRYPTO_NONCE={}", DEFAULT_ENV_PREFIX, nonce);

    tracing::info!(key_size = ?key_size, "Generated key material");
    Ok(())
}
