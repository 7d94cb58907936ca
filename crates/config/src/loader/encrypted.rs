//! Encrypted configuration file reader.
//!
//! Responsibilities:
//! - Decrypt a whole file with a caller-supplied [`Crypto`] and merge the
//!   resulting JSON or YAML document into the destination.
//!
//! Does NOT handle:
//! - Choosing or loading key material (the caller builds the decryptor).
//! - Encrypting files (see the CLI `encrypt` command).
//!
//! Invariants:
//! - Existence, optionality and directory checks match the plain reader.
//! - A decryption failure is `Decryption` and never exposes partial plaintext.
//! - Decrypted bytes are zeroized once the document is parsed.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use keystone_crypto::Crypto;
use zeroize::Zeroizing;

use super::error::ConfigError;
use super::file::{FileFormat, apply_document, read_source};
use super::overlay::Overlay;
use super::reader::Reader;

/// Reads a configuration file that was sealed as a whole.
pub struct EncryptedFileReader<T> {
    path: PathBuf,
    optional: bool,
    format: FileFormat,
    decryptor: Arc<dyn Crypto>,
    _dest: PhantomData<fn(&mut T)>,
}

/// Reader for an encrypted configuration file.
pub fn from_encrypted_file<T: Overlay>(
    path: impl Into<PathBuf>,
    optional: bool,
    decryptor: Arc<dyn Crypto>,
) -> EncryptedFileReader<T> {
    EncryptedFileReader::new(path, optional, decryptor)
}

impl<T: Overlay> EncryptedFileReader<T> {
    pub fn new(path: impl Into<PathBuf>, optional: bool, decryptor: Arc<dyn Crypto>) -> Self {
        let path = path.into();
        Self {
            format: FileFormat::from_path(&path),
            path,
            optional,
            decryptor,
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

impl<T: Overlay> Reader<T> for EncryptedFileReader<T> {
    fn read(&self, dest: &mut T) -> Result<(), ConfigError> {
        let Some(sealed) = read_source(&self.path, self.optional)? else {
            return Ok(());
        };

        let plaintext = Zeroizing::new(self.decryptor.decrypt(&sealed).map_err(|source| {
            ConfigError::Decryption {
                path: self.path.clone(),
                source,
            }
        })?);

        apply_document(&self.path, self.format, &plaintext, dest)?;
        tracing::debug!(path = %self.path.display(), "Applied encrypted configuration file");
        Ok(())
    }
}
