// SPDX-License-Identifier: MPL-2.0
//! Resolution and loading of art piece images.
//!
//! An `imageUrl` is either a remote `http(s)://` URL, fetched with `reqwest`,
//! or a local path (optionally `file://`-prefixed), read from disk. Relative
//! paths resolve against the directory of the gallery file they came from.
//! Bytes are decoded to RGBA before they reach the cache, so anything that is
//! not an image ends up as a failed slot instead of a blank card.

use crate::error::{Error, Result};
use iced::widget::image::Handle;
use std::path::{Path, PathBuf};
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Where an image's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageLocation {
    Remote(String),
    Local(PathBuf),
}

impl ImageLocation {
    /// Classifies `url`, joining relative local paths onto `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Image`] for an empty or whitespace-only URL.
    pub fn resolve(url: &str, base_dir: Option<&Path>) -> Result<Self> {
        let url = url.trim();
        if url.is_empty() {
            return Err(Error::Image("empty image URL".to_string()));
        }

        let lower = url.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(Self::Remote(url.to_string()));
        }

        let raw = url.strip_prefix("file://").unwrap_or(url);
        let path = PathBuf::from(raw);
        let path = match base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path,
        };
        Ok(Self::Local(path))
    }

    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

/// Builds the HTTP client shared by all remote image requests.
#[must_use]
pub fn build_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to default HTTP client");
            reqwest::Client::new()
        })
}

/// Fetches the bytes at `location` and decodes them into an image handle.
///
/// # Errors
///
/// Returns [`Error::Image`] when the request fails, the server answers with a
/// non-success status, or the body is empty or not a decodable image;
/// [`Error::Io`] when a local file cannot be read.
pub async fn load_image(client: reqwest::Client, location: ImageLocation) -> Result<Handle> {
    let bytes = match location {
        ImageLocation::Remote(url) => {
            let response = client.get(&url).send().await?.error_for_status()?;
            response.bytes().await?.to_vec()
        }
        ImageLocation::Local(path) => tokio::fs::read(&path).await?,
    };

    if bytes.is_empty() {
        return Err(Error::Image("image data is empty".to_string()));
    }

    tokio::task::spawn_blocking(move || decode_image(&bytes))
        .await
        .map_err(|err| Error::Image(err.to_string()))?
}

/// Decodes encoded image bytes (PNG, JPEG, ...) into an RGBA handle.
///
/// # Errors
///
/// Returns [`Error::Image`] if the format is unknown or the data is corrupt.
pub fn decode_image(bytes: &[u8]) -> Result<Handle> {
    let rgba = image_rs::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Handle::from_rgba(width, height, rgba.into_vec()))
}
