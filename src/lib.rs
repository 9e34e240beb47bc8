// SPDX-License-Identifier: MPL-2.0
//! `art_space` is a single-screen art gallery browser built with the Iced GUI framework.
//!
//! It shows one art piece at a time from a bundled JSON gallery and steps
//! through it with buttons, arrow keys, or a horizontal swipe. Navigation
//! saturates at both ends of the gallery.

#![doc(html_root_url = "https://docs.rs/art_space/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
pub mod media;
pub mod ui;

pub use app::config;
