//! Where a parameter is read from, and tag parsing.
//!
//! A tag is `"key"` or `"key,source"`; without a source the key is read from
//! the query string.

use std::fmt;
use std::str::FromStr;

use crate::error::{ParamsError, Result};

/// Every accepted source name, as listed in validation messages.
pub const AVAILABLE_SOURCES: &str = "path, query, header";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParamSource {
    Path,
    #[default]
    Query,
    Header,
}

impl ParamSource {
    pub const ALL: [ParamSource; 3] = [Self::Path, Self::Query, Self::Header];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Query => "query",
            Self::Header => "header",
        }
    }
}

impl fmt::Display for ParamSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamSource {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|source| source.as_str() == name)
            .ok_or_else(|| ParamsError::InvalidSource {
                name: name.to_string(),
            })
    }
}

/// Parsed form of a `"key[,source]"` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamOptions {
    pub key: String,
    pub source: ParamSource,
}

impl ParamOptions {
    pub fn new(key: impl Into<String>, source: ParamSource) -> Self {
        Self {
            key: key.into(),
            source,
        }
    }

    pub fn parse(tag: &str) -> Result<Self> {
        let (key, source) = match tag.split_once(',') {
            Some((key, source)) => (key.trim(), source.parse()?),
            None => (tag.trim(), ParamSource::default()),
        };

        if key.is_empty() {
            return Err(ParamsError::EmptyKey {
                tag: tag.to_string(),
            });
        }

        Ok(Self::new(key, source))
    }
}
