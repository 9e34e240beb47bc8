// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Black pill with white content, used for the Back/Next buttons.
pub fn navigation(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::GRAY_900,
        button::Status::Pressed => Color {
            a: opacity::PRESSED,
            ..palette::BLACK
        },
        button::Status::Active => palette::BLACK,
        button::Status::Disabled => palette::GRAY_400,
    };
    let text_color = match status {
        button::Status::Disabled => palette::GRAY_200,
        _ => palette::WHITE,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: palette::BLACK,
            width: 0.0,
            radius: radius::FULL.into(),
        },
        shadow: if matches!(status, button::Status::Hovered) {
            shadow::SM
        } else {
            shadow::NONE
        },
        snap: true,
    }
}
