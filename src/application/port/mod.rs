// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`gallery`]: Loading the art piece collection
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no serde types)
//! - No `async fn`; the gallery is loaded once before the window opens

pub mod gallery;

pub use gallery::{AssetLoadError, GallerySource};
