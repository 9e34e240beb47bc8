// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::gallery;
use iced::touch::Finger;
use iced::widget::image::Handle;
use iced::Point;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    /// Right arrow key.
    NavigateNext,
    /// Left arrow key.
    NavigateBack,
    /// Left mouse button pressed outside any widget that captured it.
    PointerPressed,
    /// Cursor moved.
    PointerMoved(Point),
    /// Left mouse button released, or the cursor left the window.
    PointerReleased,
    /// A finger touched the screen outside any widget that captured it.
    TouchPressed { finger: Finger, position: Point },
    /// A finger on the screen moved.
    TouchMoved { finger: Finger, position: Point },
    /// A finger was lifted or the touch was lost.
    TouchLifted(Finger),
    /// Image bytes for `url` finished loading.
    ImageLoaded {
        url: String,
        result: Result<Handle, Error>,
    },
    /// A background save of the gallery position finished, with an optional
    /// warning i18n key.
    PositionSaved(Option<String>),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`).
    pub lang: Option<String>,
    /// Gallery JSON file that replaces the bundled asset.
    pub gallery_path: Option<PathBuf>,
    /// Start index; takes precedence over restored and configured positions.
    pub start_index: Option<usize>,
    /// Optional data directory override (for state files).
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
}
