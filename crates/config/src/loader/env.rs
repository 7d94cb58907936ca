//! Environment variable reader.
//!
//! Responsibilities:
//! - Build variable names as `{PREFIX}_{TAG}`, upper-cased.
//! - Apply every bound variable that is present to the destination.
//!
//! Does NOT handle:
//! - Loading `.env` files (see dotenv.rs).
//! - Deciding which fields are bound (see bindings.rs).
//!
//! Invariants:
//! - Missing, empty and whitespace-only variables leave their field untouched.
//! - A conversion failure names the full variable, never its value.
//! - The binding table is validated when the reader is built, not per read.

use super::bindings::EnvBindings;
use super::error::ConfigError;
use super::lookup::{Lookup, OsLookup};
use super::reader::Reader;
use crate::constants::ENV_SEPARATOR;

/// Reads bound fields from environment-style variables under a prefix.
pub struct EnvReader<T, L = OsLookup> {
    prefix: String,
    bindings: EnvBindings<T>,
    lookup: L,
}

/// Reader over the process environment.
pub fn from_env<T>(prefix: &str, bindings: EnvBindings<T>) -> Result<EnvReader<T>, ConfigError> {
    EnvReader::new(prefix, bindings)
}

impl<T> EnvReader<T> {
    pub fn new(prefix: &str, bindings: EnvBindings<T>) -> Result<Self, ConfigError> {
        Self::with_lookup(prefix, bindings, OsLookup)
    }
}

impl<T, L: Lookup> EnvReader<T, L> {
    /// Builds a reader resolving names through `lookup` instead of the process environment.
    pub fn with_lookup(prefix: &str, bindings: EnvBindings<T>, lookup: L) -> Result<Self, ConfigError> {
        bindings.validate()?;
        Ok(Self {
            prefix: prefix.to_string(),
            bindings,
            lookup,
        })
    }

    /// The variable a tag is read from, e.g. `crypto_key` → `APP_CRYPTO_KEY`.
    pub fn variable_name(&self, tag: &str) -> String {
        let name = if self.prefix.is_empty() || self.prefix.ends_with(ENV_SEPARATOR) {
            format!("{}{}", self.prefix, tag)
        } else {
            format!("{}{}{}", self.prefix, ENV_SEPARATOR, tag)
        };
        name.to_ascii_uppercase()
    }
}

impl<T, L: Lookup> Reader<T> for EnvReader<T, L> {
    fn read(&self, dest: &mut T) -> Result<(), ConfigError> {
        let mut applied = 0usize;

        for binding in self.bindings.iter() {
            let var = self.variable_name(&binding.tag);
            let Some(raw) = self.lookup.lookup(&var) else {
                continue;
            };

            (binding.setter)(dest, &raw).map_err(|message| ConfigError::EnvBinding {
                var: var.clone(),
                message,
            })?;
            applied += 1;
        }

        tracing::debug!(prefix = %self.prefix, applied, "Applied environment configuration");
        Ok(())
    }
}
