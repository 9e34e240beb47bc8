// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring between the gallery, localization,
//! images and persisted state.
//!
//! Startup happens in two phases. [`bootstrap`] runs before any window
//! exists: it loads settings, the gallery asset and the saved position, and
//! fails on a missing, malformed or empty gallery. [`run`] then hands the
//! prepared state to the iced event loop.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::domain::gallery::GalleryStore;
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::infrastructure::asset;
use crate::media::{self, ImageCache};
use crate::ui::design_tokens::sizing;
use crate::ui::state::swipe::{SwipeLatch, SwipeThreshold};
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::touch::Finger;
use iced::{window, Element, Point, Subscription, Task, Theme};
use persisted_state::AppState;
use persistence::PositionSaver;
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: GalleryStore,
    swipe: SwipeLatch,
    /// Pointer or finger that owns the swipe in progress.
    gesture: Option<GestureSource>,
    /// Last known pointer position; mouse presses carry no coordinates.
    cursor: Option<Point>,
    images: ImageCache,
    client: reqwest::Client,
    /// Directory that relative image paths resolve against.
    image_base_dir: Option<PathBuf>,
    prefetch_neighbors: bool,
    theme_mode: ThemeMode,
    app_state: AppState,
    saver: PositionSaver,
    /// i18n key of a warning shown under the gallery until the next move.
    notice: Option<String>,
}

/// Input device driving a swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GestureSource {
    Mouse,
    Touch(Finger),
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("index", &self.gallery.index())
            .field("len", &self.gallery.len())
            .field("gesture", &self.gesture)
            .field("swipe_active", &self.swipe.is_active())
            .finish()
    }
}

/// Everything prepared before the window opens.
pub struct Bootstrap {
    pub config: Config,
    pub gallery: GalleryStore,
    pub app_state: AppState,
    pub image_base_dir: Option<PathBuf>,
    pub lang: Option<String>,
    /// i18n key of a non-fatal startup warning.
    pub notice: Option<String>,
}

impl fmt::Debug for Bootstrap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bootstrap")
            .field("pieces", &self.gallery.len())
            .field("start_index", &self.gallery.index())
            .field("image_base_dir", &self.image_base_dir)
            .finish_non_exhaustive()
    }
}

/// Picks the start index: CLI flag, then restored position, then configured start.
///
/// The result is clamped later by [`GalleryStore::new`].
#[must_use]
pub fn resolve_start_index(cli: Option<usize>, restored: Option<usize>, configured: usize) -> usize {
    cli.or(restored).unwrap_or(configured)
}

/// Loads settings, the gallery and the saved position.
///
/// # Errors
///
/// Returns [`Error::AssetLoad`] if the gallery asset is missing or malformed,
/// and [`Error::Gallery`] if it holds no pieces.
pub fn bootstrap(flags: Flags) -> Result<Bootstrap> {
    let (config, config_warning) = config::load();
    if let Some(key) = &config_warning {
        tracing::warn!(warning = %key, "using default settings");
    }

    let (app_state, state_warning) = AppState::load();
    if let Some(key) = &state_warning {
        tracing::warn!(warning = %key, "ignoring saved position");
    }

    let mut bootstrap = bootstrap_with(flags, config, app_state)?;
    bootstrap.notice = config_warning.or(state_warning);
    Ok(bootstrap)
}

/// Same as [`bootstrap`] with settings and saved state supplied by the caller.
///
/// # Errors
///
/// Returns [`Error::AssetLoad`] if the gallery asset is missing or malformed,
/// and [`Error::Gallery`] if it holds no pieces.
pub fn bootstrap_with(flags: Flags, config: Config, app_state: AppState) -> Result<Bootstrap> {
    let asset_path = flags
        .gallery_path
        .clone()
        .or_else(|| config.gallery.asset_path.clone());
    let source = asset::gallery_source(asset_path.as_deref());
    tracing::info!(source = %source.describe(), "loading gallery");

    let pieces = source.load()?;
    let restored = if config.restore_position() {
        app_state.restore_index(pieces.len())
    } else {
        None
    };
    let start = resolve_start_index(flags.start_index, restored, config.start_index());
    let gallery = GalleryStore::new(pieces, start)?;
    tracing::info!(
        pieces = gallery.len(),
        start_index = gallery.index(),
        "gallery ready"
    );

    Ok(Bootstrap {
        image_base_dir: asset::image_base_dir(asset_path.as_deref()),
        config,
        gallery,
        app_state,
        lang: flags.lang,
        notice: None,
    })
}

/// Localized one-line description of a startup failure.
///
/// Settings are read again to pick the language, since a failed bootstrap
/// returns none.
#[must_use]
pub fn startup_failure_message(err: &Error, lang: Option<String>) -> String {
    let (config, _) = config::load();
    failure_message(err, &I18n::new(lang, &config))
}

fn failure_message(err: &Error, i18n: &I18n) -> String {
    format!("{} ({err})", i18n.tr(err.i18n_key()))
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(
            sizing::MIN_WINDOW_WIDTH,
            sizing::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(bootstrap: Bootstrap) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot closure; the bootstrap is consumed on the first call
    let boot_state = RefCell::new(Some(bootstrap));
    let boot = move || match boot_state.borrow_mut().take() {
        Some(bootstrap) => App::new(bootstrap),
        None => {
            tracing::error!("boot called more than once");
            std::process::exit(1);
        }
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the application state and requests the first images.
    fn new(bootstrap: Bootstrap) -> (Self, Task<Message>) {
        let Bootstrap {
            config,
            gallery,
            app_state,
            image_base_dir,
            lang,
            notice,
        } = bootstrap;

        let mut app = App {
            i18n: I18n::new(lang, &config),
            gallery,
            swipe: SwipeLatch::new(SwipeThreshold::new(config.swipe_threshold())),
            gesture: None,
            cursor: None,
            images: ImageCache::new(config.image_cache_capacity()),
            client: media::build_client(config.request_timeout()),
            image_base_dir,
            prefetch_neighbors: config.prefetch_neighbors(),
            theme_mode: config.general.theme_mode,
            app_state,
            saver: PositionSaver::default(),
            notice,
        };

        let task = app.request_images();
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        format!("{} - {app_name}", self.gallery.current().title())
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.handle_message(message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            images: &self.images,
            notice: self.notice.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::ArtPiece;
    use crate::media::ImageSlot;
    use crate::domain::error::GalleryError;
    use crate::ui::gallery;
    use iced::widget::image::Handle;
    use std::fs;
    use tempfile::tempdir;

    fn abc() -> Vec<ArtPiece> {
        vec![
            ArtPiece::new("A", "Author A", "https://example.com/a.png"),
            ArtPiece::new("B", "Author B", "https://example.com/b.png"),
            ArtPiece::new("C", "Author C", "https://example.com/c.png"),
        ]
    }

    fn app_with(pieces: Vec<ArtPiece>, start: usize) -> App {
        let bootstrap = Bootstrap {
            config: Config::default(),
            gallery: GalleryStore::new(pieces, start).expect("non-empty gallery"),
            app_state: AppState::default(),
            image_base_dir: None,
            lang: Some("en-US".to_string()),
            notice: None,
        };
        App::new(bootstrap).0
    }

    fn touch_press(id: u64, x: f32) -> Message {
        Message::TouchPressed {
            finger: Finger(id),
            position: Point::new(x, 100.0),
        }
    }

    fn touch_move(id: u64, x: f32) -> Message {
        Message::TouchMoved {
            finger: Finger(id),
            position: Point::new(x, 100.0),
        }
    }

    fn title(app: &App) -> &str {
        app.gallery.current().title()
    }

    #[test]
    fn resolve_start_index_prefers_cli_then_restored_then_config() {
        assert_eq!(resolve_start_index(Some(4), Some(2), 1), 4);
        assert_eq!(resolve_start_index(None, Some(2), 1), 2);
        assert_eq!(resolve_start_index(None, None, 1), 1);
    }

    #[test]
    fn buttons_walk_through_the_gallery_and_saturate() {
        let mut app = app_with(abc(), 0);

        let _ = app.update(Message::Gallery(gallery::Message::NextPressed));
        assert_eq!(title(&app), "B");
        let _ = app.update(Message::Gallery(gallery::Message::NextPressed));
        assert_eq!(title(&app), "C");
        let _ = app.update(Message::Gallery(gallery::Message::NextPressed));
        assert_eq!(title(&app), "C");
        let _ = app.update(Message::Gallery(gallery::Message::BackPressed));
        assert_eq!(title(&app), "B");
    }

    #[test]
    fn arrow_keys_navigate() {
        let mut app = app_with(abc(), 1);
        let _ = app.update(Message::NavigateBack);
        assert_eq!(title(&app), "A");
        let _ = app.update(Message::NavigateBack);
        assert_eq!(title(&app), "A");
        let _ = app.update(Message::NavigateNext);
        assert_eq!(title(&app), "B");
    }

    #[test]
    fn leftward_drag_navigates_once() {
        let mut app = app_with(abc(), 0);

        let _ = app.update(Message::PointerMoved(Point::new(300.0, 100.0)));
        let _ = app.update(Message::PointerPressed);
        for x in [300.0, 250.0, 180.0, 100.0, 210.0] {
            let _ = app.update(Message::PointerMoved(Point::new(x, 100.0)));
        }
        let _ = app.update(Message::PointerReleased);

        assert_eq!(title(&app), "B");
    }

    #[test]
    fn rightward_touch_swipe_goes_back() {
        let mut app = app_with(abc(), 2);

        let _ = app.update(touch_press(1, 50.0));
        let _ = app.update(touch_move(1, 200.0));
        let _ = app.update(touch_move(1, 400.0));
        let _ = app.update(Message::TouchLifted(Finger(1)));

        assert_eq!(title(&app), "B");
    }

    #[test]
    fn second_finger_does_not_move_the_swipe_origin() {
        let mut app = app_with(abc(), 0);

        let _ = app.update(touch_press(1, 300.0));
        let _ = app.update(touch_press(2, 600.0));
        let _ = app.update(touch_move(1, 305.0));
        assert_eq!(title(&app), "A");

        let _ = app.update(touch_move(2, 100.0));
        let _ = app.update(Message::TouchLifted(Finger(2)));
        assert_eq!(title(&app), "A");

        let _ = app.update(touch_move(1, 150.0));
        let _ = app.update(touch_move(1, 20.0));
        assert_eq!(title(&app), "B");
    }

    #[test]
    fn mouse_press_during_touch_swipe_is_ignored() {
        let mut app = app_with(abc(), 0);

        let _ = app.update(touch_press(1, 300.0));
        let _ = app.update(Message::PointerMoved(Point::new(0.0, 0.0)));
        let _ = app.update(Message::PointerPressed);
        let _ = app.update(Message::PointerMoved(Point::new(500.0, 0.0)));
        let _ = app.update(Message::PointerReleased);
        assert_eq!(title(&app), "A");

        let _ = app.update(touch_move(1, 150.0));
        assert_eq!(title(&app), "B");
    }

    #[test]
    fn movement_without_press_does_nothing() {
        let mut app = app_with(abc(), 0);
        let _ = app.update(Message::PointerMoved(Point::new(500.0, 0.0)));
        let _ = app.update(Message::PointerMoved(Point::new(0.0, 0.0)));
        assert_eq!(title(&app), "A");
    }

    #[test]
    fn each_gesture_fires_independently() {
        let mut app = app_with(abc(), 0);
        for id in 0..2 {
            let _ = app.update(touch_press(id, 400.0));
            let _ = app.update(touch_move(id, 250.0));
            let _ = app.update(Message::TouchLifted(Finger(id)));
        }
        assert_eq!(title(&app), "C");
    }

    #[test]
    fn navigation_records_position_in_memory() {
        let mut app = app_with(abc(), 0);
        let _ = app.update(Message::NavigateNext);
        assert_eq!(app.app_state.last_index, Some(1));
        assert_eq!(app.app_state.gallery_len, Some(3));
    }

    #[test]
    fn failed_save_shows_notice_until_next_move() {
        let mut app = app_with(abc(), 0);
        let _ = app.update(Message::NavigateNext);
        let _ = app.update(Message::PositionSaved(Some(
            "notification-state-write-error".to_string(),
        )));
        assert_eq!(app.notice.as_deref(), Some("notification-state-write-error"));

        let _ = app.update(Message::NavigateNext);
        assert_eq!(app.notice, None);
    }

    #[test]
    fn configured_swipe_threshold_is_clamped() {
        let mut config = Config::default();
        config.gesture.swipe_threshold = Some(1.0);
        let bootstrap = Bootstrap {
            config,
            gallery: GalleryStore::new(abc(), 0).expect("non-empty gallery"),
            app_state: AppState::default(),
            image_base_dir: None,
            lang: Some("en-US".to_string()),
            notice: None,
        };
        let app = App::new(bootstrap).0;
        assert_eq!(
            app.swipe.threshold().value(),
            config::MIN_SWIPE_THRESHOLD
        );
    }

    #[test]
    fn startup_failure_is_localized() {
        let en = I18n::new(Some("en-US".to_string()), &Config::default());
        let message = failure_message(&Error::Gallery(GalleryError::Empty), &en);
        assert!(message.starts_with("The gallery contains no art pieces."));

        let ru = I18n::new(Some("ru".to_string()), &Config::default());
        let message = failure_message(&Error::Gallery(GalleryError::Empty), &ru);
        assert!(!message.starts_with("MISSING"));
        assert_ne!(message, failure_message(&Error::Gallery(GalleryError::Empty), &en));
    }

    #[test]
    fn saturated_navigation_does_not_touch_state() {
        let mut app = app_with(abc(), 0);
        let _ = app.update(Message::NavigateBack);
        assert_eq!(app.app_state, AppState::default());
    }

    #[test]
    fn startup_marks_current_and_neighbor_images_pending() {
        let app = app_with(abc(), 1);
        assert!(!app.images.needs_fetch("https://example.com/a.png"));
        assert!(!app.images.needs_fetch("https://example.com/b.png"));
        assert!(!app.images.needs_fetch("https://example.com/c.png"));
    }

    #[test]
    fn image_results_fill_the_cache() {
        let mut app = app_with(abc(), 0);
        let _ = app.update(Message::ImageLoaded {
            url: "https://example.com/a.png".to_string(),
            result: Ok(Handle::from_rgba(1, 1, vec![0; 4])),
        });
        let _ = app.update(Message::ImageLoaded {
            url: "https://example.com/b.png".to_string(),
            result: Err(Error::Image("404 Not Found".to_string())),
        });

        assert!(matches!(
            app.images.peek("https://example.com/a.png"),
            ImageSlot::Ready(_)
        ));
        assert!(matches!(
            app.images.peek("https://example.com/b.png"),
            ImageSlot::Failed(_)
        ));
    }

    #[test]
    fn title_includes_current_piece() {
        let app = app_with(abc(), 0);
        assert_eq!(app.title(), "A - ArtSpace");
    }

    #[test]
    fn bootstrap_with_file_gallery_restores_matching_position() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("gallery.json");
        fs::write(
            &path,
            r#"[
                {"title": "A", "author": "a", "imageUrl": "a.png"},
                {"title": "B", "author": "b", "imageUrl": "b.png"},
                {"title": "C", "author": "c", "imageUrl": "c.png"}
            ]"#,
        )
        .expect("failed to write gallery");

        let mut state = AppState::default();
        state.record_position(2, 3);
        let flags = Flags {
            gallery_path: Some(path),
            ..Flags::default()
        };

        let boot = bootstrap_with(flags, Config::default(), state).expect("bootstrap succeeds");
        assert_eq!(boot.gallery.index(), 2);
        assert_eq!(boot.image_base_dir.as_deref(), Some(dir.path()));
    }

    #[test]
    fn bootstrap_ignores_stale_position_and_honors_cli() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("gallery.json");
        fs::write(
            &path,
            r#"[{"title": "A", "author": "a", "imageUrl": "a.png"},
                {"title": "B", "author": "b", "imageUrl": "b.png"}]"#,
        )
        .expect("failed to write gallery");

        let mut stale = AppState::default();
        stale.record_position(1, 7);
        let flags = Flags {
            gallery_path: Some(path.clone()),
            ..Flags::default()
        };
        let boot = bootstrap_with(flags, Config::default(), stale).expect("bootstrap succeeds");
        assert_eq!(boot.gallery.index(), 0);

        let flags = Flags {
            gallery_path: Some(path),
            start_index: Some(99),
            ..Flags::default()
        };
        let boot = bootstrap_with(flags, Config::default(), AppState::default())
            .expect("bootstrap succeeds");
        assert_eq!(boot.gallery.index(), 1);
    }

    #[test]
    fn bootstrap_rejects_empty_gallery() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("gallery.json");
        fs::write(&path, "[]").expect("failed to write gallery");

        let flags = Flags {
            gallery_path: Some(path),
            ..Flags::default()
        };
        let result = bootstrap_with(flags, Config::default(), AppState::default());
        assert!(matches!(
            result,
            Err(Error::Gallery(GalleryError::Empty))
        ));
    }

    #[test]
    fn bootstrap_rejects_malformed_gallery() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("gallery.json");
        fs::write(&path, r#"[{"title": "A"}]"#).expect("failed to write gallery");

        let flags = Flags {
            gallery_path: Some(path),
            ..Flags::default()
        };
        let result = bootstrap_with(flags, Config::default(), AppState::default());
        assert!(matches!(result, Err(Error::AssetLoad(_))));
    }
}
