// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! This module provides pure domain error types that are independent
//! of external crates and infrastructure concerns.

use std::fmt;

/// Errors raised while building a gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryError {
    /// The gallery was constructed from an empty sequence of art pieces.
    Empty,
}

impl GalleryError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            GalleryError::Empty => "error-gallery-empty",
        }
    }
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::Empty => write!(f, "Gallery contains no art pieces"),
        }
    }
}

impl std::error::Error for GalleryError {}
