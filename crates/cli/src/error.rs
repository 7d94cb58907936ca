//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map crypto and configuration errors to those exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - A token that does not match its digest, or ciphertext that fails
//!   authentication, always exits with `AuthenticationFailed` (2).

use keystone_config::ConfigError;
use keystone_crypto::CryptoError;

/// Structured exit codes for keystone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - token mismatch or ciphertext that fails its tag check.
    ///
    /// Scripts should treat the credential or key material as wrong, not retry.
    AuthenticationFailed = 2,

    /// Input or configuration file not found.
    NotFound = 4,

    /// Validation error - malformed key material, digest, document or variable.
    ///
    /// Scripts should fix the input and not retry.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&CryptoError> for ExitCode {
    fn from(err: &CryptoError) -> Self {
        match err {
            CryptoError::ValidationFailed | CryptoError::AuthenticationFailed => {
                ExitCode::AuthenticationFailed
            }
            CryptoError::InvalidKeyMaterial { .. }
            | CryptoError::MalformedDigest(_)
            | CryptoError::InsufficientEntropy { .. }
            | CryptoError::ExcessiveLength { .. } => ExitCode::ValidationError,
            CryptoError::CipherConstructionFailed(_)
            | CryptoError::EncryptionFailed(_)
            | CryptoError::EntropySourceFailure(_)
            | CryptoError::DigestFailure(_) => ExitCode::GeneralError,
        }
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::FileMissing { .. } => ExitCode::NotFound,
            ConfigError::Decryption { source, .. } => ExitCode::from(source),
            ConfigError::Parse { .. }
            | ConfigError::EnvBinding { .. }
            | ConfigError::InvalidBinding { .. }
            | ConfigError::FileIsDirectory { .. }
            | ConfigError::DotenvParse { .. } => ExitCode::ValidationError,
            ConfigError::FileRead { .. } | ConfigError::DotenvIo { .. } | ConfigError::DotenvUnknown => {
                ExitCode::GeneralError
            }
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<CryptoError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<std::io::Error>()
                && err.kind() == std::io::ErrorKind::NotFound
            {
                return ExitCode::NotFound;
            }
        }

        ExitCode::GeneralError
    }
}
