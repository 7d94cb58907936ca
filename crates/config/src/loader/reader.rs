//! The reader seam and sequential composition.
//!
//! Responsibilities:
//! - Define `Reader`, implemented by every configuration source.
//! - Let plain closures act as readers.
//! - Provide `Chain`, which applies readers in insertion order.
//!
//! Invariants:
//! - `Chain` never reorders readers and stops at the first error, returning it
//!   unchanged.

use super::error::ConfigError;

/// A configuration source applied to a caller-owned destination.
pub trait Reader<T: ?Sized> {
    fn read(&self, dest: &mut T) -> Result<(), ConfigError>;
}

impl<T, F> Reader<T> for F
where
    T: ?Sized,
    F: Fn(&mut T) -> Result<(), ConfigError>,
{
    fn read(&self, dest: &mut T) -> Result<(), ConfigError> {
        self(dest)
    }
}

/// Readers applied one after another to the same destination.
pub struct Chain<'a, T: ?Sized> {
    readers: Vec<Box<dyn Reader<T> + 'a>>,
}

impl<T: ?Sized> Default for Chain<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: ?Sized> Chain<'a, T> {
    pub fn new() -> Self {
        Self {
            readers: Vec::new(),
        }
    }

    /// Appends a reader; it runs after every reader added before it.
    pub fn then(mut self, reader: impl Reader<T> + 'a) -> Self {
        self.readers.push(Box::new(reader));
        self
    }

    pub fn len(&self) -> usize {
        self.readers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readers.is_empty()
    }
}

impl<T: ?Sized> Reader<T> for Chain<'_, T> {
    fn read(&self, dest: &mut T) -> Result<(), ConfigError> {
        for reader in &self.readers {
            reader.read(dest)?;
        }
        Ok(())
    }
}
