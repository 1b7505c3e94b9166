// SPDX-License-Identifier: MPL-2.0
//! `image_browser` is an embeddable image-browsing overlay controller.
//!
//! It owns everything behind a gallery overlay (selection with wraparound,
//! panels and layouts, an automated slideshow, keyboard/wheel/swipe input)
//! and talks to the hosting platform only through the ports in
//! [`application::port`]. Rendering is left to the host, which reads
//! localized view models from [`browser::view_model`].

#![doc(html_root_url = "https://docs.rs/image_browser/0.1.0")]

pub mod application;
pub mod browser;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod notifications;
