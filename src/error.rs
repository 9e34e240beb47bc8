// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Layer-specific errors ([`GalleryError`], [`AssetLoadError`]) convert into
//! [`Error`] through `From`, so startup code can use `?` across layers.

use crate::application::port::AssetLoadError;
use crate::domain::error::GalleryError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Asset Error: {0}")]
    AssetLoad(#[from] AssetLoadError),

    #[error("Gallery Error: {0}")]
    Gallery(#[from] GalleryError),

    /// Image bytes could not be fetched or decoded.
    #[error("Image Error: {0}")]
    Image(String),
}

impl Error {
    /// Returns the i18n message key used when this error is shown to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "notification-config-load-error",
            Error::AssetLoad(_) => "error-asset-load",
            Error::Gallery(err) => err.i18n_key(),
            Error::Image(_) => "image-unavailable",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn gallery_error_converts_and_keeps_its_key() {
        let err: Error = GalleryError::Empty.into();
        assert!(matches!(err, Error::Gallery(GalleryError::Empty)));
        assert_eq!(err.i18n_key(), "error-gallery-empty");
    }

    #[test]
    fn asset_error_converts_and_displays_cause() {
        let err: Error = AssetLoadError::Malformed("missing field `imageUrl`".into()).into();
        assert!(matches!(err, Error::AssetLoad(_)));
        assert!(err.to_string().contains("imageUrl"));
        assert_eq!(err.i18n_key(), "error-asset-load");
    }
}
