// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::domain::gallery::GalleryStore;
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::gallery;
use iced::Element;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a GalleryStore,
    pub images: &'a ImageCache,
    /// i18n key of a warning to show, if any.
    pub notice: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let piece = ctx.gallery.current();
    gallery::view(gallery::ViewContext {
        i18n: ctx.i18n,
        piece,
        image: ctx.images.peek(piece.image_url()),
        navigation: ctx.gallery.navigation_info(),
        notice: ctx.notice.map(|key| ctx.i18n.tr(key)),
    })
    .map(Message::Gallery)
}
