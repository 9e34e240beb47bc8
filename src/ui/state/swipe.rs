// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture state management
//!
//! Turns a horizontal press-drag-release gesture into at most one navigation
//! action. The latch only sees x coordinates, so the same logic serves mouse
//! drags and touch swipes.

use crate::config::{DEFAULT_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD, MIN_SWIPE_THRESHOLD};

/// Navigation requested by a swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeAction {
    /// Leftward drag: show the next piece.
    Next,
    /// Rightward drag: show the previous piece.
    Back,
}

/// Horizontal distance, in logical pixels, a drag must exceed to fire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a threshold clamped to the allowed range. Non-finite input falls back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(MIN_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD))
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_THRESHOLD)
    }
}

/// One-shot latch for a single drag gesture.
#[derive(Debug, Clone, Default)]
pub struct SwipeLatch {
    origin_x: Option<f32>,
    consumed: bool,
    threshold: SwipeThreshold,
}

impl SwipeLatch {
    #[must_use]
    pub fn new(threshold: SwipeThreshold) -> Self {
        Self {
            origin_x: None,
            consumed: false,
            threshold,
        }
    }

    #[must_use]
    pub fn threshold(&self) -> SwipeThreshold {
        self.threshold
    }

    /// Starts a gesture at `origin_x` and re-arms the latch.
    pub fn begin(&mut self, origin_x: f32) {
        self.origin_x = Some(origin_x);
        self.consumed = false;
    }

    /// Feeds the pointer's current x position.
    ///
    /// Returns an action the first time the displacement from the origin
    /// passes the threshold; every later call in the same gesture returns `None`.
    pub fn update(&mut self, x: f32) -> Option<SwipeAction> {
        let origin = self.origin_x?;
        if self.consumed {
            return None;
        }

        let action = classify(x - origin, self.threshold.value())?;
        self.consumed = true;
        Some(action)
    }

    /// Finishes the gesture. Updates are ignored until the next [`begin`](Self::begin).
    pub fn end(&mut self) {
        self.origin_x = None;
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.origin_x.is_some()
    }

    /// Whether the current (or last) gesture already fired.
    #[must_use]
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}

fn classify(displacement: f32, threshold: f32) -> Option<SwipeAction> {
    if displacement < -threshold {
        Some(SwipeAction::Next)
    } else if displacement > threshold {
        Some(SwipeAction::Back)
    } else {
        None
    }
}

/// Maps the displacement trace of one gesture to at most one action.
///
/// `trace` holds cumulative displacements from the gesture origin, in order.
#[must_use]
pub fn detect_swipe(trace: &[f32], threshold: SwipeThreshold) -> Option<SwipeAction> {
    let mut latch = SwipeLatch::new(threshold);
    latch.begin(0.0);
    let action = trace.iter().find_map(|&dx| latch.update(dx));
    latch.end();
    action
}
