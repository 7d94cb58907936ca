//! `.env` file loading.
//!
//! Responsibilities:
//! - Load `.env` from the working directory, or from an explicit path, into
//!   the process environment before readers run.
//!
//! Does NOT handle:
//! - Reading variables into a destination (see env.rs).
//!
//! Invariants:
//! - `DOTENV_DISABLED=1` or `true` skips loading entirely.
//! - A missing `.env` file is not an error.
//! - Variables already set in the process environment are not overridden.
//! - Errors never include raw `.env` line contents.

use std::path::Path;

use crate::constants::DOTENV_DISABLED_VAR;

use super::error::ConfigError;

fn dotenv_disabled() -> bool {
    matches!(
        std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Load environment variables from `.env` in the working directory, if present.
///
/// # Errors
///
/// Returns `DotenvParse` for a malformed file and `DotenvIo` when the file
/// exists but cannot be read.
pub fn load_dotenv() -> Result<(), ConfigError> {
    if dotenv_disabled() {
        tracing::debug!("Skipping .env loading, {} is set", DOTENV_DISABLED_VAR);
        return Ok(());
    }

    map_result(dotenvy::dotenv().map(|_| ()))
}

/// Load environment variables from the `.env`-formatted file at `path`, if present.
pub fn load_dotenv_from(path: &Path) -> Result<(), ConfigError> {
    if dotenv_disabled() {
        tracing::debug!("Skipping .env loading, {} is set", DOTENV_DISABLED_VAR);
        return Ok(());
    }

    map_result(dotenvy::from_path(path))
}

fn map_result(result: Result<(), dotenvy::Error>) -> Result<(), ConfigError> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if is_not_found(&e) => Ok(()),
        Err(dotenvy::Error::LineParse(_, idx)) => Err(ConfigError::DotenvParse { error_index: idx }),
        Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
            kind: io_err.kind(),
        }),
        Err(_) => Err(ConfigError::DotenvUnknown),
    }
}

fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}
