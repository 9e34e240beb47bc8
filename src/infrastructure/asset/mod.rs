// SPDX-License-Identifier: MPL-2.0
//! Gallery asset adapters.
//!
//! The default gallery ships inside the binary (`assets/gallery/art_pieces.json`,
//! embedded with `rust-embed`). A JSON file on disk can replace it through the
//! `--gallery` flag or the `[gallery] asset_path` setting.
//!
//! Both adapters parse the same format: a JSON array of objects with string
//! fields `title`, `author` and `imageUrl`.

use crate::application::port::{AssetLoadError, GallerySource};
use crate::domain::gallery::ArtPiece;
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name of the bundled gallery inside `assets/gallery/`.
pub const BUNDLED_GALLERY_FILE: &str = "art_pieces.json";

#[derive(RustEmbed)]
#[folder = "assets/gallery/"]
struct BundledAssets;

/// On-disk shape of one art piece.
#[derive(Debug, Deserialize)]
struct ArtPieceRecord {
    title: String,
    author: String,
    #[serde(rename = "imageUrl")]
    image_url: String,
}

impl From<ArtPieceRecord> for ArtPiece {
    fn from(record: ArtPieceRecord) -> Self {
        ArtPiece::new(record.title, record.author, record.image_url)
    }
}

/// Parses a gallery JSON document into art pieces, preserving order.
///
/// # Errors
///
/// Returns [`AssetLoadError::Malformed`] if the document is not an array of
/// objects carrying the three string fields.
pub fn parse_art_pieces(json: &[u8]) -> Result<Vec<ArtPiece>, AssetLoadError> {
    let records: Vec<ArtPieceRecord> =
        serde_json::from_slice(json).map_err(|e| AssetLoadError::Malformed(e.to_string()))?;
    Ok(records.into_iter().map(ArtPiece::from).collect())
}

/// The gallery embedded in the executable.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledGallery;

impl GallerySource for BundledGallery {
    fn describe(&self) -> String {
        format!("bundled asset {BUNDLED_GALLERY_FILE}")
    }

    fn load(&self) -> Result<Vec<ArtPiece>, AssetLoadError> {
        let file = BundledAssets::get(BUNDLED_GALLERY_FILE)
            .ok_or_else(|| AssetLoadError::NotFound(BUNDLED_GALLERY_FILE.to_string()))?;
        parse_art_pieces(file.data.as_ref())
    }
}

/// A gallery JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileGallery {
    path: PathBuf,
}

impl FileGallery {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GallerySource for FileGallery {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    fn load(&self) -> Result<Vec<ArtPiece>, AssetLoadError> {
        let bytes = fs::read(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AssetLoadError::NotFound(self.path.display().to_string()),
            _ => AssetLoadError::Io(e.to_string()),
        })?;
        parse_art_pieces(&bytes)
    }
}

/// Picks the gallery source: the file at `path` when given, the bundled asset otherwise.
#[must_use]
pub fn gallery_source(path: Option<&Path>) -> Box<dyn GallerySource> {
    match path {
        Some(path) => Box::new(FileGallery::new(path)),
        None => Box::new(BundledGallery),
    }
}

/// Directory that relative image paths in the gallery resolve against.
///
/// For a file gallery this is the file's parent directory; the bundled gallery
/// has none, so its relative paths resolve against the working directory.
#[must_use]
pub fn image_base_dir(path: Option<&Path>) -> Option<PathBuf> {
    path.and_then(Path::parent)
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
}
