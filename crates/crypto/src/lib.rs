//! Cryptographic primitives for keystone.
//!
//! This crate provides the authenticated cipher used to decrypt configuration
//! at rest, and the credential tokens (random secrets whose salted digests are
//! stored instead of the secrets themselves).

mod cipher;
pub mod constants;
mod error;
mod random;
mod token;

pub use cipher::{AuthenticatedCipher, Crypto, KeySize};
pub use error::{CryptoError, KeyMaterial, Result};
pub use random::{generate_key, generate_nonce, random_bytes, random_string};
pub use token::{Token, TokenHasher};
