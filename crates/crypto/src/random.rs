//! Random value helpers backed by the operating system entropy source.
//!
//! Responsibilities:
//! - Draw raw random bytes from the OS (`getrandom`).
//! - Derive fixed-width hex identifiers, nonces and keys from those bytes.
//!
//! Does NOT handle:
//! - Token digesting or validation (see token.rs).
//!
//! Invariants:
//! - A failing entropy source is reported as `EntropySourceFailure`; there is
//!   no fallback to a weaker generator.
//! - Intermediate random buffers are zeroized before they are dropped.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::cipher::KeySize;
use crate::constants::NONCE_SIZE;
use crate::error::{CryptoError, Result};

/// Returns `n` bytes from the OS random source.
pub fn random_bytes(n: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; n];
    getrandom::fill(&mut buf).map_err(|e| CryptoError::EntropySourceFailure(e.to_string()))?;
    Ok(buf)
}

/// Returns the hex-encoded SHA-256 of `n` random bytes.
///
/// The output is always 64 characters wide regardless of `n`; `n` only
/// controls how much entropy goes in.
pub fn random_string(n: usize) -> Result<String> {
    let bytes = Zeroizing::new(random_bytes(n)?);
    Ok(hex::encode(Sha256::digest(bytes.as_slice())))
}

/// Generates a standard-base64 nonce sized for [`AuthenticatedCipher`](crate::AuthenticatedCipher).
pub fn generate_nonce() -> Result<String> {
    let nonce = random_bytes(NONCE_SIZE)?;
    Ok(STANDARD.encode(nonce))
}

/// Generates a standard-base64 AES key of the requested size.
pub fn generate_key(size: KeySize) -> Result<String> {
    let key = Zeroizing::new(random_bytes(size.byte_len())?);
    Ok(STANDARD.encode(key.as_slice()))
}
