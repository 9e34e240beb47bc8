// SPDX-License-Identifier: MPL-2.0
//! Gallery domain: art pieces and the saturating navigation state machine.

mod store;
mod types;

pub use store::{GalleryStore, Navigation, NavigationInfo};
pub use types::ArtPiece;
