// SPDX-License-Identifier: MPL-2.0
//! Position persistence.
//!
//! The state file is written on the blocking pool, never inside `update`.
//! At most one write is in flight; moves made meanwhile mark the state dirty
//! and are flushed with the latest position once the running write finishes.

use super::persisted_state::AppState;
use super::Message;
use crate::domain::gallery::GalleryStore;
use iced::Task;

/// Serializes background writes of [`AppState`].
#[derive(Debug, Default)]
pub struct PositionSaver {
    in_flight: bool,
    dirty: bool,
}

impl PositionSaver {
    /// Records the current gallery position and schedules a write of it.
    pub fn persist(&mut self, state: &mut AppState, gallery: &GalleryStore) -> Task<Message> {
        state.record_position(gallery.index(), gallery.len());
        self.request(state)
    }

    /// Called when a write finishes; flushes any position recorded meanwhile.
    pub fn finished(&mut self, state: &AppState) -> Task<Message> {
        self.in_flight = false;
        if self.dirty {
            self.request(state)
        } else {
            Task::none()
        }
    }

    fn request(&mut self, state: &AppState) -> Task<Message> {
        if self.in_flight {
            self.dirty = true;
            return Task::none();
        }

        self.in_flight = true;
        self.dirty = false;
        Task::perform(write_state(state.clone()), Message::PositionSaved)
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

/// Writes `state` to the data directory and returns a warning key on failure.
///
/// Skips the write under `cfg(test)`; tests cover `AppState::save_to` with a
/// temp dir instead.
async fn write_state(state: AppState) -> Option<String> {
    if cfg!(test) {
        return None;
    }

    tokio::task::spawn_blocking(move || state.save())
        .await
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "state writer task failed");
            Some("notification-state-write-error".to_string())
        })
}
