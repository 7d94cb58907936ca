//! Plain configuration file reader.
//!
//! Responsibilities:
//! - Check existence, optionality and file type before reading.
//! - Parse JSON or YAML documents into the destination's patch type.
//! - Share the checks and the parse step with the encrypted reader.
//!
//! Does NOT handle:
//! - Decryption (see encrypted.rs).
//! - Writing configuration files back to disk.
//!
//! Invariants:
//! - A missing optional file is a no-op; a missing required file is
//!   `FileMissing`; a directory is `FileIsDirectory`.
//! - On any error the destination is left unmodified.
//! - Unknown keys in a document are ignored.
//! - The top level of a document must be an object (JSON) or a mapping
//!   (YAML); arrays and scalars are `Parse` errors.

use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::error::ConfigError;
use super::overlay::Overlay;
use super::reader::Reader;

/// Structured document formats accepted by file readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileFormat {
    #[default]
    Json,
    Yaml,
}

/// Parse failure from the underlying format.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error("Top level of the document must be {expected}, found {found}")]
    NotAnObject {
        expected: &'static str,
        found: &'static str,
    },
}

impl FileFormat {
    /// Picks YAML for `.yaml`/`.yml` names (also before a trailing extension
    /// such as `config.yaml.enc`), JSON otherwise.
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        let is_yaml = name.split('.').skip(1).any(|ext| ext == "yaml" || ext == "yml");
        if is_yaml { Self::Yaml } else { Self::Json }
    }

    pub(crate) fn parse<P: serde::de::DeserializeOwned>(self, bytes: &[u8]) -> Result<P, FormatError> {
        match self {
            Self::Json => {
                let value: serde_json::Value = serde_json::from_slice(bytes)?;
                if !value.is_object() {
                    return Err(not_an_object("an object", json_kind(&value)));
                }
                Ok(serde_json::from_value(value)?)
            }
            Self::Yaml => {
                let value: serde_yaml::Value = serde_yaml::from_slice(bytes)?;
                if !value.is_mapping() {
                    return Err(not_an_object("a mapping", yaml_kind(&value)));
                }
                Ok(serde_yaml::from_value(value)?)
            }
        }
    }
}

fn not_an_object(expected: &'static str, found: &'static str) -> FormatError {
    FormatError::NotAnObject { expected, found }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}

/// Reads a file's bytes, or `None` when it is absent and optional.
pub(crate) fn read_source(path: &Path, optional: bool) -> Result<Option<Vec<u8>>, ConfigError> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            if optional {
                tracing::debug!(path = %path.display(), "Optional configuration file not found, skipping");
                return Ok(None);
            }
            return Err(ConfigError::FileMissing {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(ConfigError::FileRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if metadata.is_dir() {
        return Err(ConfigError::FileIsDirectory {
            path: path.to_path_buf(),
        });
    }

    std::fs::read(path)
        .map(Some)
        .map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })
}

/// Parses `bytes` and merges the document into `dest`.
pub(crate) fn apply_document<T: Overlay>(
    path: &Path,
    format: FileFormat,
    bytes: &[u8],
    dest: &mut T,
) -> Result<(), ConfigError> {
    let patch: T::Patch = format.parse(bytes).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    dest.overlay(patch);
    Ok(())
}

/// Reads a plain JSON or YAML configuration file.
pub struct FileReader<T> {
    path: PathBuf,
    optional: bool,
    format: FileFormat,
    _dest: PhantomData<fn(&mut T)>,
}

/// Reader for a plain configuration file.
pub fn from_file<T: Overlay>(path: impl Into<PathBuf>, optional: bool) -> FileReader<T> {
    FileReader::new(path, optional)
}

impl<T: Overlay> FileReader<T> {
    pub fn new(path: impl Into<PathBuf>, optional: bool) -> Self {
        let path = path.into();
        Self {
            format: FileFormat::from_path(&path),
            path,
            optional,
            _dest: PhantomData,
        }
    }

    pub fn with_format(mut self, format: FileFormat) -> Self {
        self.format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T: Overlay> Reader<T> for FileReader<T> {
    fn read(&self, dest: &mut T) -> Result<(), ConfigError> {
        let Some(bytes) = read_source(&self.path, self.optional)? else {
            return Ok(());
        };

        apply_document(&self.path, self.format, &bytes, dest)?;
        tracing::debug!(path = %self.path.display(), "Applied configuration file");
        Ok(())
    }
}
