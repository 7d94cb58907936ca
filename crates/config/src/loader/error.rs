//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all reader and dotenv failures.
//!
//! Invariants:
//! - All variants carry their context (file path, variable name, binding tag).
//! - Display output never includes file contents, decrypted plaintext or
//!   variable values; lower-level causes are kept as `source` only.
//! - Dotenv errors NEVER include raw .env line contents.

use std::io::ErrorKind;
use std::path::PathBuf;

use keystone_crypto::CryptoError;
use thiserror::Error;

use super::file::FormatError;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file {path} does not exist")]
    FileMissing { path: PathBuf },

    #[error("Configuration file {path} can not be a directory")]
    FileIsDirectory { path: PathBuf },

    #[error("Failed to read configuration file {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    #[error("Failed to decrypt configuration file {path}")]
    Decryption {
        path: PathBuf,
        #[source]
        source: CryptoError,
    },

    #[error("Invalid value for {var}: {message}")]
    EnvBinding { var: String, message: String },

    #[error("Invalid environment binding '{tag}': {reason}")]
    InvalidBinding { tag: String, reason: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// The configuration file involved in this error, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::FileMissing { path }
            | Self::FileIsDirectory { path }
            | Self::FileRead { path, .. }
            | Self::Parse { path, .. }
            | Self::Decryption { path, .. } => Some(path),
            _ => None,
        }
    }
}
