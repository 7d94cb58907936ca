//! Sources of environment-style key/value lookups.
//!
//! Responsibilities:
//! - Define the `Lookup` trait the environment reader resolves names through.
//! - Read the process environment with empty/whitespace filtering.
//! - Provide an in-memory lookup for hermetic callers and tests.
//!
//! Invariants:
//! - Empty or whitespace-only values are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).

use std::collections::HashMap;

/// Resolves a fully-formed variable name to its value.
pub trait Lookup {
    fn lookup(&self, name: &str) -> Option<String>;
}

impl<F> Lookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(non_blank)
}

fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == s.len() {
        // No trimming needed, return original to avoid allocation
        Some(s)
    } else {
        Some(trimmed.to_string())
    }
}

/// Lookup backed by the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsLookup;

impl Lookup for OsLookup {
    fn lookup(&self, name: &str) -> Option<String> {
        env_var_or_none(name)
    }
}

/// Lookup backed by an in-memory map, with the same blank filtering as `OsLookup`.
#[derive(Debug, Clone, Default)]
pub struct MapLookup {
    values: HashMap<String, String>,
}

impl MapLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapLookup
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Lookup for MapLookup {
    fn lookup(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned().and_then(non_blank)
    }
}
