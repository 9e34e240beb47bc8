// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, GestureSource, Message};
use crate::domain::gallery::Navigation;
use crate::media::{self, ImageLocation};
use crate::ui::gallery;
use crate::ui::state::swipe::SwipeAction;
use iced::{Point, Task};

impl App {
    pub(super) fn handle_message(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery::Message::NextPressed) | Message::NavigateNext => {
                self.navigate(SwipeAction::Next)
            }
            Message::Gallery(gallery::Message::BackPressed) | Message::NavigateBack => {
                self.navigate(SwipeAction::Back)
            }
            Message::PointerPressed => {
                if let Some(cursor) = self.cursor {
                    self.begin_gesture(GestureSource::Mouse, cursor.x);
                }
                Task::none()
            }
            Message::PointerMoved(position) => {
                self.cursor = Some(position);
                self.track_gesture(GestureSource::Mouse, position)
            }
            Message::PointerReleased => {
                self.end_gesture(GestureSource::Mouse);
                Task::none()
            }
            Message::TouchPressed { finger, position } => {
                self.begin_gesture(GestureSource::Touch(finger), position.x);
                Task::none()
            }
            Message::TouchMoved { finger, position } => {
                self.track_gesture(GestureSource::Touch(finger), position)
            }
            Message::TouchLifted(finger) => {
                self.end_gesture(GestureSource::Touch(finger));
                Task::none()
            }
            Message::ImageLoaded { url, result } => {
                match result {
                    Ok(handle) => {
                        self.images.insert_ready(url.clone(), handle);
                        tracing::debug!(%url, stats = ?self.images.stats(), "image loaded");
                    }
                    Err(err) => {
                        tracing::warn!(%url, error = %err, "image unavailable");
                        self.images.insert_failed(url, err.to_string());
                    }
                }
                Task::none()
            }
            Message::PositionSaved(warning) => {
                if let Some(key) = warning {
                    tracing::warn!(warning = %key, "failed to save gallery position");
                    self.notice = Some(key);
                }
                self.saver.finished(&self.app_state)
            }
        }
    }

    /// Starts a swipe unless another pointer or finger already owns one.
    fn begin_gesture(&mut self, source: GestureSource, origin_x: f32) {
        if self.gesture.is_some() {
            tracing::trace!(?source, "ignoring press during an active gesture");
            return;
        }
        self.gesture = Some(source);
        self.swipe.begin(origin_x);
    }

    fn track_gesture(&mut self, source: GestureSource, position: Point) -> Task<Message> {
        if self.gesture != Some(source) {
            return Task::none();
        }
        match self.swipe.update(position.x) {
            Some(action) => {
                tracing::debug!(?action, ?source, "swipe detected");
                self.navigate(action)
            }
            None => Task::none(),
        }
    }

    fn end_gesture(&mut self, source: GestureSource) {
        if self.gesture == Some(source) {
            self.gesture = None;
            self.swipe.end();
        }
    }

    pub(super) fn navigate(&mut self, action: SwipeAction) -> Task<Message> {
        let outcome = match action {
            SwipeAction::Next => self.gallery.next(),
            SwipeAction::Back => self.gallery.back(),
        };

        match outcome {
            Navigation::Moved { from, to } => {
                tracing::debug!(from, to, title = %self.gallery.current().title(), "navigated");
                self.notice = None;
                let save = self.saver.persist(&mut self.app_state, &self.gallery);
                Task::batch([save, self.request_images()])
            }
            Navigation::Saturated => {
                tracing::debug!(?action, index = self.gallery.index(), "already at gallery boundary");
                Task::none()
            }
        }
    }

    /// Starts loading the current piece's image and, if enabled, its neighbors'.
    pub(super) fn request_images(&mut self) -> Task<Message> {
        let mut urls = vec![self.gallery.current().image_url().to_string()];
        if self.prefetch_neighbors {
            urls.extend(
                [self.gallery.peek_next(), self.gallery.peek_back()]
                    .into_iter()
                    .flatten()
                    .map(|piece| piece.image_url().to_string()),
            );
        }

        let tasks: Vec<Task<Message>> = urls
            .into_iter()
            .filter_map(|url| self.fetch_image(url))
            .collect();
        Task::batch(tasks)
    }

    fn fetch_image(&mut self, url: String) -> Option<Task<Message>> {
        if !self.images.needs_fetch(&url) {
            self.images.promote(&url);
            return None;
        }

        let location = match ImageLocation::resolve(&url, self.image_base_dir.as_deref()) {
            Ok(location) => location,
            Err(err) => {
                tracing::warn!(%url, error = %err, "invalid image location");
                self.images.insert_failed(url, err.to_string());
                return None;
            }
        };

        self.images.mark_pending(&url);
        let client = self.client.clone();
        Some(Task::perform(
            media::load_image(client, location),
            move |result| Message::ImageLoaded { url, result },
        ))
    }
}
