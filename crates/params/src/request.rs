//! Transport-agnostic view of an incoming request's parameters.
//!
//! Invariants:
//! - Header names are matched case-insensitively.
//! - For repeated query keys or headers the first value wins.

use std::collections::HashMap;

use url::{Url, form_urlencoded};

use crate::source::ParamSource;

#[derive(Debug, Clone, Default)]
pub struct RequestParams {
    path: HashMap<String, String>,
    query: Vec<(String, String)>,
    headers: HashMap<String, String>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the decoded query string of `url`.
    pub fn from_url(url: &Url) -> Self {
        Self {
            query: url.query_pairs().into_owned().collect(),
            ..Self::default()
        }
    }

    /// Adds a path parameter captured by the router.
    pub fn with_path(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path.insert(name.into(), value.into());
        self
    }

    /// Appends the pairs of a raw query string (a leading `?` is ignored).
    pub fn with_query(mut self, query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        self.query
            .extend(form_urlencoded::parse(query.as_bytes()).into_owned());
        self
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.to_ascii_lowercase())
            .or_insert_with(|| value.into());
        self
    }

    pub fn get(&self, source: ParamSource, key: &str) -> Option<&str> {
        match source {
            ParamSource::Path => self.path.get(key).map(String::as_str),
            ParamSource::Query => self
                .query
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            ParamSource::Header => self
                .headers
                .get(&key.to_ascii_lowercase())
                .map(String::as_str),
        }
    }
}
