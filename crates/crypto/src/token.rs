//! Opaque credential tokens.
//!
//! Responsibilities:
//! - Generate high-entropy raw tokens (API keys, invite tokens).
//! - Produce salted, slow, one-way digests suitable for storage.
//! - Validate a presented raw token against a stored digest.
//!
//! Does NOT handle:
//! - Storing digests or looking them up (callers own persistence).
//! - Token expiry or rotation.
//!
//! Invariants:
//! - The raw value lives in a `SecretString`; it is zeroized on drop and
//!   never shows up in `Debug` output.
//! - A digest is a base64url-encoded Argon2id PHC string that embeds its own
//!   salt and cost, so every digest of the same token is different.
//! - The final hash comparison is constant-time (delegated to `password-hash`).
//! - Costs above `MAX_MEMORY_KIB`, `MAX_ITERATIONS` or `MAX_PARALLELISM` are
//!   refused, both when hashing and when read back from a digest.

use argon2::password_hash::{self, SaltString};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use secrecy::{ExposeSecret, SecretString};
use zeroize::Zeroizing;

use crate::constants::{
    DEFAULT_TOKEN_LENGTH, MAX_ITERATIONS, MAX_MEMORY_KIB, MAX_PARALLELISM, MAX_SECRET_LEN,
    MAX_TOKEN_LENGTH, MIN_TOKEN_LENGTH, SALT_SIZE,
};
use crate::error::{CryptoError, Result};
use crate::random::{random_bytes, random_string};

/// A raw credential held only in memory.
#[derive(Debug)]
pub struct Token {
    raw: SecretString,
}

impl Token {
    /// Wraps a raw value presented by a caller, e.g. from an incoming request.
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: SecretString::new(raw.into().into()),
        }
    }

    /// Generates a token from the default number of random bytes.
    pub fn random() -> Result<Self> {
        Self::random_with_length(DEFAULT_TOKEN_LENGTH)
    }

    /// Generates a token from `length` random bytes.
    ///
    /// The raw value is the 64-character hex SHA-256 of those bytes.
    /// `length` must lie within `MIN_TOKEN_LENGTH..=MAX_TOKEN_LENGTH`.
    pub fn random_with_length(length: usize) -> Result<Self> {
        if length < MIN_TOKEN_LENGTH {
            return Err(CryptoError::InsufficientEntropy {
                requested: length,
                minimum: MIN_TOKEN_LENGTH,
            });
        }
        if length > MAX_TOKEN_LENGTH {
            return Err(CryptoError::ExcessiveLength {
                requested: length,
                maximum: MAX_TOKEN_LENGTH,
            });
        }

        Ok(Self::new(random_string(length)?))
    }

    /// Returns the raw value. Hand it to the token holder once; never log it.
    pub fn expose_secret(&self) -> &str {
        self.raw.expose_secret()
    }

    /// Computes a storable digest with the default cost.
    pub fn digest(&self) -> Result<String> {
        TokenHasher::default().digest(self)
    }

    /// Checks this token against a digest produced by [`digest`](Self::digest).
    pub fn validate(&self, digest: &str) -> Result<()> {
        TokenHasher::default().validate(self, digest)
    }
}

impl From<SecretString> for Token {
    fn from(raw: SecretString) -> Self {
        Self { raw }
    }
}

/// Argon2id digesting with an explicit cost.
///
/// `TokenHasher::default()` uses the Argon2 defaults (19 MiB, 2 passes, 1 lane).
/// Validation always uses the cost recorded in the digest, so digests made
/// with one cost still validate after the default changes.
#[derive(Debug, Clone, Default)]
pub struct TokenHasher {
    params: Params,
}

impl TokenHasher {
    /// Creates a hasher with the given memory (KiB), pass count and lanes.
    pub fn with_cost(memory_kib: u32, iterations: u32, parallelism: u32) -> Result<Self> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| CryptoError::DigestFailure(e.to_string()))?;
        check_cost(&params).map_err(CryptoError::DigestFailure)?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    pub fn digest(&self, token: &Token) -> Result<String> {
        let secret = token.expose_secret().as_bytes();
        if secret.len() > MAX_SECRET_LEN {
            return Err(CryptoError::DigestFailure(format!(
                "token is longer than {} bytes",
                MAX_SECRET_LEN
            )));
        }

        let salt_bytes = Zeroizing::new(random_bytes(SALT_SIZE)?);
        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|e| CryptoError::DigestFailure(e.to_string()))?;

        let hash = self
            .argon2()
            .hash_password(secret, &salt)
            .map_err(|e| CryptoError::DigestFailure(e.to_string()))?;

        Ok(URL_SAFE.encode(hash.to_string()))
    }

    pub fn validate(&self, token: &Token, digest: &str) -> Result<()> {
        let decoded = URL_SAFE
            .decode(digest.trim())
            .map_err(|e| CryptoError::MalformedDigest(format!("failed to decode: {}", e)))?;
        let phc = String::from_utf8(decoded)
            .map_err(|_| CryptoError::MalformedDigest("digest is not valid UTF-8".to_string()))?;
        let hash =
            PasswordHash::new(&phc).map_err(|e| CryptoError::MalformedDigest(e.to_string()))?;

        if hash.salt.is_none() || hash.hash.is_none() {
            return Err(CryptoError::MalformedDigest(
                "digest is missing its salt or hash".to_string(),
            ));
        }

        // Checked before any hashing so a hostile digest cannot pick the cost.
        let params =
            Params::try_from(&hash).map_err(|e| CryptoError::MalformedDigest(e.to_string()))?;
        check_cost(&params).map_err(CryptoError::MalformedDigest)?;

        match self
            .argon2()
            .verify_password(token.expose_secret().as_bytes(), &hash)
        {
            Ok(()) => Ok(()),
            Err(password_hash::Error::Password) => Err(CryptoError::ValidationFailed),
            Err(e) => Err(CryptoError::MalformedDigest(e.to_string())),
        }
    }
}

fn check_cost(params: &Params) -> std::result::Result<(), String> {
    let limits = [
        ("memory", params.m_cost(), MAX_MEMORY_KIB),
        ("iterations", params.t_cost(), MAX_ITERATIONS),
        ("parallelism", params.p_cost(), MAX_PARALLELISM),
    ];

    for (name, value, max) in limits {
        if value > max {
            return Err(format!("{} cost {} exceeds the limit of {}", name, value, max));
        }
    }
    Ok(())
}
