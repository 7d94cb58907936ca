//! Authenticated encryption for configuration at rest.
//!
//! Responsibilities:
//! - Provide AES-GCM encryption and decryption over a fixed key and nonce.
//! - Decode key material from its base64 transport encoding.
//! - Expose both directions through the [`Crypto`] trait consumed by readers.
//!
//! Does NOT handle:
//! - Key generation or storage (see random.rs and the CLI `keygen` command).
//! - Nonce rotation. One cipher instance seals exactly one logical value.
//!
//! Invariants:
//! - Key length must be 16, 24 or 32 bytes and the nonce exactly 12 bytes;
//!   anything else fails at construction.
//! - Decryption fails closed: no plaintext is returned unless the tag verifies.
//! - Decoded key bytes are zeroized once the AEAD instance is built, and the
//!   stored nonce is zeroized on drop.

use std::fmt;

use aes_gcm::aead::consts::U12;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::aes::Aes192;
use aes_gcm::{Aes128Gcm, Aes256Gcm, AesGcm, Nonce};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use zeroize::{Zeroize, Zeroizing};

use crate::constants::NONCE_SIZE;
use crate::error::{CryptoError, KeyMaterial, Result};

type Aes192Gcm = AesGcm<Aes192, U12>;

/// Whole-value symmetric encryption, the seam between ciphers and config readers.
pub trait Crypto: Send + Sync {
    fn encrypt(&self, raw: &[u8]) -> Result<Vec<u8>>;
    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// Supported AES key sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySize {
    Aes128,
    Aes192,
    Aes256,
}

impl KeySize {
    /// Key length in bytes.
    pub const fn byte_len(self) -> usize {
        match self {
            Self::Aes128 => 16,
            Self::Aes192 => 24,
            Self::Aes256 => 32,
        }
    }

    /// Maps a key length in bytes to its AES variant.
    pub const fn from_len(len: usize) -> Option<Self> {
        match len {
            16 => Some(Self::Aes128),
            24 => Some(Self::Aes192),
            32 => Some(Self::Aes256),
            _ => None,
        }
    }
}

enum Sealer {
    Aes128(Aes128Gcm),
    Aes192(Aes192Gcm),
    Aes256(Aes256Gcm),
}

impl Sealer {
    fn new(size: KeySize, key: &[u8]) -> Result<Self> {
        Ok(match size {
            KeySize::Aes128 => Self::Aes128(Aes128Gcm::new_from_slice(key).map_err(failed)?),
            KeySize::Aes192 => Self::Aes192(Aes192Gcm::new_from_slice(key).map_err(failed)?),
            KeySize::Aes256 => Self::Aes256(Aes256Gcm::new_from_slice(key).map_err(failed)?),
        })
    }

    fn seal(&self, nonce: &Nonce<U12>, raw: &[u8]) -> std::result::Result<Vec<u8>, aes_gcm::Error> {
        match self {
            Self::Aes128(c) => c.encrypt(nonce, raw),
            Self::Aes192(c) => c.encrypt(nonce, raw),
            Self::Aes256(c) => c.encrypt(nonce, raw),
        }
    }

    fn open(&self, nonce: &Nonce<U12>, data: &[u8]) -> std::result::Result<Vec<u8>, aes_gcm::Error> {
        match self {
            Self::Aes128(c) => c.decrypt(nonce, data),
            Self::Aes192(c) => c.decrypt(nonce, data),
            Self::Aes256(c) => c.decrypt(nonce, data),
        }
    }
}

/// AES-GCM cipher bound to one key and one nonce for its whole lifetime.
pub struct AuthenticatedCipher {
    sealer: Sealer,
    nonce: [u8; NONCE_SIZE],
    key_size: KeySize,
}

impl AuthenticatedCipher {
    /// Builds a cipher from standard-base64 key and nonce strings.
    ///
    /// Surrounding whitespace is ignored, so values pasted from files or
    /// environment variables with a trailing newline still decode.
    pub fn new(key: &str, nonce: &str) -> Result<Self> {
        let key = Zeroizing::new(decode_material(key, KeyMaterial::Key)?);
        let nonce = Zeroizing::new(decode_material(nonce, KeyMaterial::Nonce)?);
        Self::from_bytes(&key, &nonce)
    }

    /// Builds a cipher from already-decoded key and nonce bytes.
    pub fn from_bytes(key: &[u8], nonce: &[u8]) -> Result<Self> {
        let key_size = KeySize::from_len(key.len()).ok_or_else(|| CryptoError::InvalidKeyMaterial {
            material: KeyMaterial::Key,
            reason: format!("expected 16, 24 or 32 bytes, got {}", key.len()),
        })?;

        let nonce: [u8; NONCE_SIZE] =
            nonce
                .try_into()
                .map_err(|_| CryptoError::InvalidKeyMaterial {
                    material: KeyMaterial::Nonce,
                    reason: format!("expected {} bytes, got {}", NONCE_SIZE, nonce.len()),
                })?;

        let sealer = Sealer::new(key_size, key)?;
        tracing::debug!(key_size = ?key_size, "Authenticated cipher ready");

        Ok(Self {
            sealer,
            nonce,
            key_size,
        })
    }

    pub fn key_size(&self) -> KeySize {
        self.key_size
    }

    /// Seals `raw`, returning ciphertext with the tag appended.
    ///
    /// The output is deterministic for a given key, nonce and plaintext.
    pub fn encrypt(&self, raw: &[u8]) -> Result<Vec<u8>> {
        self.sealer
            .seal(Nonce::from_slice(&self.nonce), raw)
            .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))
    }

    /// Opens ciphertext produced by [`encrypt`](Self::encrypt) with the same key material.
    pub fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.sealer
            .open(Nonce::from_slice(&self.nonce), data)
            .map_err(|_| CryptoError::AuthenticationFailed)
    }
}

impl Crypto for AuthenticatedCipher {
    fn encrypt(&self, raw: &[u8]) -> Result<Vec<u8>> {
        AuthenticatedCipher::encrypt(self, raw)
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        AuthenticatedCipher::decrypt(self, data)
    }
}

impl fmt::Debug for AuthenticatedCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticatedCipher")
            .field("key_size", &self.key_size)
            .finish_non_exhaustive()
    }
}

impl Drop for AuthenticatedCipher {
    fn drop(&mut self) {
        self.nonce.zeroize();
    }
}

fn failed(e: impl fmt::Display) -> CryptoError {
    CryptoError::CipherConstructionFailed(e.to_string())
}

fn decode_material(encoded: &str, material: KeyMaterial) -> Result<Vec<u8>> {
    STANDARD
        .decode(encoded.trim())
        .map_err(|e| CryptoError::InvalidKeyMaterial {
            material,
            reason: format!("failed to decode base64: {}", e),
        })
}
