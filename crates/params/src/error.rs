//! Error types for request parameter binding.
//!
//! Invariants:
//! - `InvalidValue` names the key and where it was read from; the message
//!   comes from the conversion and never echoes the raw value.

use thiserror::Error;

use crate::source::{AVAILABLE_SOURCES, ParamSource};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamsError {
    #[error("source '{name}' should be one of {}", AVAILABLE_SOURCES)]
    InvalidSource { name: String },

    #[error("parameter tag '{tag}' has an empty key")]
    EmptyKey { tag: String },

    #[error("invalid value for {location} parameter '{key}': {message}")]
    InvalidValue {
        key: String,
        location: ParamSource,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, ParamsError>;
