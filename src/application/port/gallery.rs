// SPDX-License-Identifier: MPL-2.0
//! Gallery loading port definition.
//!
//! This module defines the [`GallerySource`] trait. Infrastructure adapters
//! implement it for the bundled asset and for JSON files on disk.

use crate::domain::gallery::ArtPiece;
use std::fmt;

/// Errors that can occur while loading the gallery asset.
///
/// All of them are fatal at startup: the application refuses to open a
/// window without a valid gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetLoadError {
    /// The asset does not exist.
    NotFound(String),

    /// The asset exists but could not be read.
    Io(String),

    /// The asset is not a JSON array of `{title, author, imageUrl}` objects.
    Malformed(String),
}

impl fmt::Display for AssetLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetLoadError::NotFound(what) => write!(f, "Gallery asset not found: {what}"),
            AssetLoadError::Io(msg) => write!(f, "I/O error: {msg}"),
            AssetLoadError::Malformed(msg) => write!(f, "Malformed gallery asset: {msg}"),
        }
    }
}

impl std::error::Error for AssetLoadError {}

/// Source of the ordered art piece collection.
pub trait GallerySource {
    /// Human-readable description of where the pieces come from (for logs).
    fn describe(&self) -> String;

    /// Loads every art piece in display order.
    ///
    /// An empty collection is returned as-is; rejecting it is the job of
    /// [`GalleryStore::new`](crate::domain::gallery::GalleryStore::new).
    ///
    /// # Errors
    ///
    /// Returns an [`AssetLoadError`] if the asset is missing, unreadable or
    /// malformed.
    fn load(&self) -> Result<Vec<ArtPiece>, AssetLoadError>;
}
