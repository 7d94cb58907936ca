//! Field-by-field merging of file documents into a destination.
//!
//! Invariants:
//! - A patch holds only what its document contained; `None` means "absent"
//!   and `overlay` must leave the corresponding field untouched.

use serde::de::DeserializeOwned;

/// A destination that file readers can merge a parsed document into.
///
/// `Patch` mirrors the destination with every field optional (nested
/// sections as optional nested patches), so keys missing from a document
/// never reset values set by earlier readers.
pub trait Overlay {
    type Patch: DeserializeOwned;

    fn overlay(&mut self, patch: Self::Patch);
}
