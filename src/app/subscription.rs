// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native keyboard, mouse and touch events to gallery messages.
//! Presses that a widget already captured (the Back/Next buttons) do not
//! start a swipe; movement and release events are always forwarded so a
//! gesture that ends over a button still finishes.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, mouse, touch, Event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| route_event(&event, status))
}

pub(super) fn route_event(event: &Event, status: event::Status) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(*position))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
        | Event::Mouse(mouse::Event::CursorLeft) => Some(Message::PointerReleased),
        Event::Touch(touch::Event::FingerMoved { id, position }) => Some(Message::TouchMoved {
            finger: *id,
            position: *position,
        }),
        Event::Touch(
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
        ) => Some(Message::TouchLifted(*id)),
        _ if status == event::Status::Captured => None,
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::PointerPressed)
        }
        Event::Touch(touch::Event::FingerPressed { id, position }) => {
            Some(Message::TouchPressed {
                finger: *id,
                position: *position,
            })
        }
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match key {
            Key::Named(Named::ArrowRight) => Some(Message::NavigateNext),
            Key::Named(Named::ArrowLeft) => Some(Message::NavigateBack),
            _ => None,
        },
        _ => None,
    }
}
