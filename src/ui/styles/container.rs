// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// White elevated card that frames the art piece image in both themes.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        text_color: Some(palette::GRAY_700),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::CARD,
        ..Default::default()
    }
}
