// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Start position
//! - **Gesture**: Swipe threshold bounds
//! - **Images**: Cache capacity and network timeout

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Index of the art piece shown at startup when nothing else is configured.
pub const DEFAULT_START_INDEX: usize = 0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Horizontal drag distance (logical pixels) that triggers a navigation.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 100.0;

/// Minimum allowed swipe threshold.
pub const MIN_SWIPE_THRESHOLD: f32 = 20.0;

/// Maximum allowed swipe threshold.
pub const MAX_SWIPE_THRESHOLD: f32 = 1000.0;

// ==========================================================================
// Image Defaults
// ==========================================================================

/// Default number of decoded images kept in memory.
pub const DEFAULT_IMAGE_CACHE_CAPACITY: usize = 16;

/// Minimum image cache capacity (current piece plus both neighbors, plus one).
pub const MIN_IMAGE_CACHE_CAPACITY: usize = 4;

/// Maximum image cache capacity.
pub const MAX_IMAGE_CACHE_CAPACITY: usize = 64;

/// Default timeout for remote image requests (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;

/// Minimum remote request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum remote request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;
