//! Centralized constants for the keystone crypto primitives.

// =============================================================================
// Authenticated Encryption
// =============================================================================

/// Required nonce length for AES-GCM (96 bits).
pub const NONCE_SIZE: usize = 12;

/// Length of the authentication tag appended to every ciphertext.
pub const TAG_SIZE: usize = 16;

// =============================================================================
// Credential Tokens
// =============================================================================

/// Number of random bytes behind a token when no length is requested.
pub const DEFAULT_TOKEN_LENGTH: usize = 32;

/// Smallest number of random bytes accepted for a token.
pub const MIN_TOKEN_LENGTH: usize = 16;

/// Largest number of random bytes accepted for a token.
pub const MAX_TOKEN_LENGTH: usize = 1024;

/// Length of the random salt embedded in every digest.
pub const SALT_SIZE: usize = 16;

/// Largest raw token accepted for digesting, in bytes.
pub const MAX_SECRET_LEN: usize = 1024;

/// Default Argon2id memory cost in KiB.
pub const DEFAULT_MEMORY_KIB: u32 = 19_456;

/// Default Argon2id pass count.
pub const DEFAULT_ITERATIONS: u32 = 2;

/// Default Argon2id lane count.
pub const DEFAULT_PARALLELISM: u32 = 1;

/// Largest Argon2id memory cost accepted from a digest, in KiB (256 MiB).
pub const MAX_MEMORY_KIB: u32 = 262_144;

/// Largest Argon2id pass count accepted from a digest.
pub const MAX_ITERATIONS: u32 = 16;

/// Largest Argon2id lane count accepted from a digest.
pub const MAX_PARALLELISM: u32 = 16;
