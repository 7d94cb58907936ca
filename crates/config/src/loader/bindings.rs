//! Explicit environment binding tables.
//!
//! Responsibilities:
//! - Register which destination fields are read from the environment, under
//!   which tag, and how the raw string is converted.
//! - Validate the table once, before any variable is read.
//!
//! Does NOT handle:
//! - Building variable names or reading values (see env.rs).
//!
//! Invariants:
//! - Tags are non-empty, ASCII alphanumeric or `_`, and unique ignoring case
//!   (two tags differing only in case would resolve to the same variable).
//! - Only registered fields are ever written by the environment reader.

use std::collections::HashSet;
use std::fmt::Display;
use std::str::FromStr;

use secrecy::SecretString;

use super::error::ConfigError;

type Setter<T> = Box<dyn Fn(&mut T, &str) -> Result<(), String> + Send + Sync>;

pub(crate) struct EnvBinding<T> {
    pub(crate) tag: String,
    pub(crate) setter: Setter<T>,
}

/// Table of (tag, field, conversion) rows for one destination type.
pub struct EnvBindings<T> {
    bindings: Vec<EnvBinding<T>>,
}

impl<T> Default for EnvBindings<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EnvBindings<T> {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Binds `tag` to a field parsed with `FromStr`.
    pub fn bind<V>(self, tag: &str, field: fn(&mut T) -> &mut V) -> Self
    where
        V: FromStr + 'static,
        V::Err: Display,
        T: 'static,
    {
        self.bind_with(tag, move |dest, raw| {
            *field(dest) = raw.parse::<V>().map_err(|e| e.to_string())?;
            Ok(())
        })
    }

    /// Binds `tag` to an optional field; a present variable sets `Some`.
    pub fn bind_optional<V>(self, tag: &str, field: fn(&mut T) -> &mut Option<V>) -> Self
    where
        V: FromStr + 'static,
        V::Err: Display,
        T: 'static,
    {
        self.bind_with(tag, move |dest, raw| {
            *field(dest) = Some(raw.parse::<V>().map_err(|e| e.to_string())?);
            Ok(())
        })
    }

    /// Binds `tag` to a secret field.
    pub fn bind_secret(self, tag: &str, field: fn(&mut T) -> &mut Option<SecretString>) -> Self
    where
        T: 'static,
    {
        self.bind_with(tag, move |dest, raw| {
            *field(dest) = Some(SecretString::new(raw.into()));
            Ok(())
        })
    }

    /// Binds `tag` with a custom conversion. The error string becomes the
    /// `EnvBinding` message and must not echo the raw value.
    pub fn bind_with<F>(mut self, tag: &str, setter: F) -> Self
    where
        F: Fn(&mut T, &str) -> Result<(), String> + Send + Sync + 'static,
    {
        self.bindings.push(EnvBinding {
            tag: tag.to_string(),
            setter: Box::new(setter),
        });
        self
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|b| b.tag.as_str())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &EnvBinding<T>> {
        self.bindings.iter()
    }

    /// Checks every tag once; the environment reader refuses unvalidated tables.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();

        for tag in self.tags() {
            if tag.is_empty() {
                return Err(invalid(tag, "tag must not be empty"));
            }
            if !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(invalid(
                    tag,
                    "tag may only contain ASCII letters, digits and '_'",
                ));
            }
            if !seen.insert(tag.to_ascii_uppercase()) {
                return Err(invalid(tag, "tag is bound more than once"));
            }
        }

        Ok(())
    }
}

fn invalid(tag: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidBinding {
        tag: tag.to_string(),
        reason: reason.to_string(),
    }
}
