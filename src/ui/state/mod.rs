// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! State logic kept out of the main App struct so it can be tested without
//! a running event loop.

pub mod swipe;

pub use swipe::{detect_swipe, SwipeAction, SwipeLatch, SwipeThreshold};
