// SPDX-License-Identifier: MPL-2.0
//! Image loading and caching for art piece cards.

pub mod cache;
pub mod image_source;

pub use cache::{CacheStats, ImageCache, ImageSlot};
pub use image_source::{build_client, decode_image, load_image, ImageLocation};
