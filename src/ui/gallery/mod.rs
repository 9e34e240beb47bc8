// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: title, art card, caption and navigation row.
//!
//! The screen is stateless. It renders whatever art piece and image slot the
//! application hands it and reports button presses as [`Message`]s.

use crate::domain::gallery::{ArtPiece, NavigationInfo};
use crate::i18n::fluent::I18n;
use crate::media::ImageSlot;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{button, image, Column, Container, Row, Space, Text};
use iced::{alignment, Color, ContentFit, Element, Font, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    BackPressed,
    NextPressed,
}

/// Everything the gallery screen needs to render one frame.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub piece: &'a ArtPiece,
    pub image: ImageSlot,
    pub navigation: NavigationInfo,
    /// Already localized warning line.
    pub notice: Option<String>,
}

const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("app-title"))
        .size(typography::TITLE_LG)
        .font(BOLD);

    let caption = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(ctx.piece.title())
                .size(typography::TITLE_MD)
                .font(BOLD)
                .align_x(alignment::Horizontal::Center),
        )
        .push(
            Text::new(ctx.piece.author())
                .size(typography::TITLE_MD)
                .align_x(alignment::Horizontal::Center),
        );

    let position = Text::new(position_label(ctx.i18n, ctx.navigation))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    let hint = Text::new(ctx.i18n.tr("gallery-swipe-hint"))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(card(ctx.i18n, ctx.image))
        .push(Space::new().height(spacing::XS))
        .push(caption)
        .push(position)
        .push(hint);

    if let Some(notice) = ctx.notice {
        content = content.push(
            Text::new(notice)
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    let content = content
        .push(Space::new().height(Length::Fill))
        .push(navigation_row(ctx.i18n));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

/// "current / total" with a 1-based current position.
fn position_label(i18n: &I18n, navigation: NavigationInfo) -> String {
    i18n.tr_with_args(
        "gallery-position",
        &[
            ("current", &(navigation.current_index + 1).to_string()),
            ("total", &navigation.total_count.to_string()),
        ],
    )
}

/// What fills the card for a given image slot.
#[derive(Debug)]
enum CardBody {
    Image(image::Handle),
    Text { key: &'static str, color: Color },
}

fn card_body(slot: ImageSlot) -> CardBody {
    match slot {
        ImageSlot::Ready(handle) => CardBody::Image(handle),
        ImageSlot::Loading => CardBody::Text {
            key: "image-loading",
            color: palette::GRAY_700,
        },
        ImageSlot::Failed(_) => CardBody::Text {
            key: "image-unavailable",
            color: palette::ERROR_500,
        },
    }
}

fn card<'a>(i18n: &I18n, slot: ImageSlot) -> Element<'a, Message> {
    let body: Element<'a, Message> = match card_body(slot) {
        CardBody::Image(handle) => image(handle)
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        CardBody::Text { key, color } => Text::new(i18n.tr(key))
            .size(typography::BODY)
            .color(color)
            .into(),
    };

    Container::new(body)
        .width(Length::Fixed(sizing::CARD))
        .height(Length::Fixed(sizing::CARD))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::card)
        .into()
}

// Both buttons stay enabled at the ends; pressing them there is a no-op.
fn navigation_row<'a>(i18n: &I18n) -> Element<'a, Message> {
    let nav_button = |label: String, message: Message| {
        button(
            Text::new(label)
                .size(typography::TITLE_MD)
                .align_x(alignment::Horizontal::Center),
        )
        .width(Length::Fixed(sizing::NAV_BUTTON_WIDTH))
        .height(Length::Fixed(sizing::NAV_BUTTON_HEIGHT))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::navigation)
        .on_press(message)
    };

    Row::new()
        .width(Length::Fill)
        .padding(spacing::MD)
        .align_y(alignment::Vertical::Bottom)
        .push(nav_button(
            format!("← {}", i18n.tr("gallery-back-button")),
            Message::BackPressed,
        ))
        .push(Space::new().width(Length::Fill))
        .push(nav_button(
            format!("{} →", i18n.tr("gallery-next-button")),
            Message::NextPressed,
        ))
        .into()
}
