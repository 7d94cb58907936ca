//! Error types for the crypto primitives.
//!
//! Responsibilities:
//! - Define one closed set of failures for ciphers, randomness and tokens.
//! - Let callers tell a wrong credential apart from infrastructure failures.
//!
//! Invariants:
//! - No variant carries key bytes, nonces, plaintext or raw token values.
//! - `ValidationFailed` is the only variant expected in normal operation.

use std::fmt;

use thiserror::Error;

/// Which piece of key material was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMaterial {
    Key,
    Nonce,
}

impl fmt::Display for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key => f.write_str("key"),
            Self::Nonce => f.write_str("nonce"),
        }
    }
}

/// Errors that can occur in cipher, randomness and token operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Invalid {material}: {reason}")]
    InvalidKeyMaterial {
        material: KeyMaterial,
        reason: String,
    },

    #[error("Failed to create cipher: {0}")]
    CipherConstructionFailed(String),

    /// The integrity tag did not verify. The ciphertext was tampered with,
    /// truncated, or sealed under different key material.
    #[error("Authentication failed: ciphertext is corrupt or sealed with different key material")]
    AuthenticationFailed,

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// The OS random source could not supply bytes. Callers should abort
    /// rather than continue without strong randomness.
    #[error("Entropy source failure: {0}")]
    EntropySourceFailure(String),

    #[error("Requested {requested} random bytes, at least {minimum} are required")]
    InsufficientEntropy { requested: usize, minimum: usize },

    #[error("Requested {requested} random bytes, at most {maximum} are allowed")]
    ExcessiveLength { requested: usize, maximum: usize },

    #[error("Failed to digest token: {0}")]
    DigestFailure(String),

    #[error("Malformed digest: {0}")]
    MalformedDigest(String),

    #[error("Token validation failed")]
    ValidationFailed,
}

impl CryptoError {
    /// Returns true when the error means "wrong credential" rather than a fault.
    ///
    /// Callers answering untrusted requests should map this to a generic
    /// unauthorized response and treat every other variant as an internal error.
    pub fn is_validation_failure(&self) -> bool {
        matches!(self, Self::ValidationFailed)
    }
}

pub type Result<T> = std::result::Result<T, CryptoError>;
