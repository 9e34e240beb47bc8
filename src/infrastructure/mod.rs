// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`asset`]: Bundled and on-disk gallery JSON (implements [`GallerySource`])
//!
//! [`GallerySource`]: crate::application::port::GallerySource

pub mod asset;

pub use asset::{gallery_source, BundledGallery, FileGallery};
