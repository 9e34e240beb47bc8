// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery rules with ZERO external dependencies.
//!
//! This module contains the pure gallery types and the saturating navigation
//! state machine. It has no dependencies on external crates (except `std`)
//! so it can be exercised without a window, a runtime, or a file system.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`GalleryError`](error::GalleryError))
//! - [`gallery`]: [`ArtPiece`](gallery::ArtPiece) and
//!   [`GalleryStore`](gallery::GalleryStore)

pub mod error;
pub mod gallery;
