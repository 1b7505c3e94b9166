// SPDX-License-Identifier: MPL-2.0
//! Embeddable image browser.
//!
//! [`ImageBrowser`] ties one instance together: the component state, the
//! input dispatcher, the presentation sync and the host it runs in. Each
//! instance owns all of its state and its own surface handle, so several
//! browsers can live side by side.
//!
//! ```ignore
//! use image_browser::browser::{BrowserOptions, ImageBrowser, Message};
//!
//! let mut browser = ImageBrowser::mount(images, BrowserOptions::default(), host);
//! browser.update(Message::OpenOverlay);
//! browser.update(Message::Next);
//! // Dropping the browser releases scroll lock, fullscreen and timers.
//! ```

pub mod component;
pub mod input;
pub mod subcomponents;
pub mod sync;
#[cfg(any(test, feature = "test-utils"))]
pub mod testing;
pub mod view_model;

pub use component::{Effect, Layout, Message, ViewState};
pub use input::{GestureOptions, InputEvent, Key, SwipeAction, SwipeBindings, TouchPoint};

use crate::application::port::{HostEnvironment, SurfaceId};
use crate::config::Config;
use crate::domain::gallery::Image;
use crate::domain::ui::{SlideshowInterval, SwipeThreshold};
use crate::error::{Error, Result};
use crate::i18n::I18n;
use crate::notifications;
use std::sync::Arc;

/// Instantiation options of one browser.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserOptions {
    /// Label of the trigger button. `None` shows an inline grid instead.
    pub trigger_label: Option<String>,
    pub initial_layout: Layout,
    /// Show the like/share/comment row in the info panel.
    pub show_actions: bool,
    pub interval: SlideshowInterval,
    pub reschedule_on_interval_change: bool,
    pub gestures: GestureOptions,
    /// Thumbnails per row in the grid layout, as the host renders it.
    pub grid_columns: usize,
    /// Root surface handle. A fresh one is allocated when `None`.
    pub surface: Option<SurfaceId>,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            trigger_label: None,
            initial_layout: Layout::default(),
            show_actions: crate::config::DEFAULT_SHOW_ACTIONS,
            interval: SlideshowInterval::default(),
            reschedule_on_interval_change: crate::config::DEFAULT_RESCHEDULE_ON_INTERVAL_CHANGE,
            gestures: GestureOptions::default(),
            grid_columns: crate::config::DEFAULT_GRID_COLUMNS,
            surface: None,
        }
    }
}

impl BrowserOptions {
    /// Builds options from the loaded configuration, clamping every value.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let defaults = Self::default();
        Self {
            trigger_label: config.browser.trigger_label.clone(),
            initial_layout: config.browser.initial_layout.unwrap_or_default(),
            show_actions: config.browser.show_actions.unwrap_or(defaults.show_actions),
            interval: config
                .slideshow
                .interval_secs
                .map_or(defaults.interval, SlideshowInterval::new),
            reschedule_on_interval_change: config
                .slideshow
                .reschedule_on_interval_change
                .unwrap_or(defaults.reschedule_on_interval_change),
            gestures: GestureOptions {
                threshold: config
                    .gestures
                    .swipe_threshold_px
                    .map_or(defaults.gestures.threshold, SwipeThreshold::new),
                bindings: config.gestures.bindings(),
            },
            grid_columns: defaults.grid_columns,
            surface: None,
        }
    }
}

/// One mounted browser instance.
///
/// Dropping it unmounts: the pending timer is cancelled, platform
/// fullscreen is left and the background scroll lock is released.
pub struct ImageBrowser<H: HostEnvironment> {
    state: component::State,
    dispatcher: input::Dispatcher,
    sync: sync::PresentationSync,
    notifications: notifications::Manager,
    options: BrowserOptions,
    host: H,
    mounted: bool,
}

impl<H: HostEnvironment> ImageBrowser<H> {
    /// Mounts a browser over the caller's images.
    ///
    /// An empty collection mounts fine; opening it is refused with a notice.
    pub fn mount(images: impl Into<Arc<[Image]>>, options: BrowserOptions, host: H) -> Self {
        let surface = options.surface.unwrap_or_default();
        let state = component::State::new(
            images,
            options.initial_layout,
            options.interval,
            options.reschedule_on_interval_change,
        );
        tracing::debug!(
            surface = surface.raw(),
            images = state.gallery().map_or(0, crate::domain::gallery::Gallery::len),
            "browser mounted"
        );
        Self {
            state,
            dispatcher: input::Dispatcher::new(options.gestures),
            sync: sync::PresentationSync::new(surface, options.grid_columns),
            notifications: notifications::Manager::new(),
            options,
            host,
            mounted: true,
        }
    }

    /// Applies one message and performs its effects on the host.
    pub fn update(&mut self, message: Message) {
        if let Message::SlideshowElapsed(ticket) = message {
            self.sync.timer_delivered(ticket, &mut self.host);
        }
        if !self.mounted {
            tracing::debug!(?message, "message after unmount ignored");
            return;
        }
        let effects = self.state.update(message);
        self.sync
            .apply(effects, &self.state, &mut self.host, &mut self.notifications);
        self.dispatcher
            .set_overlay_active(self.state.is_overlay_open());
    }

    /// Feeds a raw input event. Returns whether it produced a message.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        if !self.mounted {
            return false;
        }
        match self.dispatcher.dispatch(event) {
            Some(message) => {
                self.update(message);
                true
            }
            None => false,
        }
    }

    /// Selects an image given by reference.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownImage`] if `image` is not one of this
    /// gallery's records.
    pub fn select_image(&mut self, image: &Image) -> Result<()> {
        let id = self.position_of(image)?;
        self.update(Message::Select(id));
        Ok(())
    }

    /// Opens the overlay on an image given by reference.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownImage`] if `image` is not one of this
    /// gallery's records.
    pub fn open_at_image(&mut self, image: &Image) -> Result<()> {
        let id = self.position_of(image)?;
        self.update(Message::OpenAt(id));
        Ok(())
    }

    fn position_of(&self, image: &Image) -> Result<crate::domain::gallery::ImageId> {
        self.state
            .gallery()
            .and_then(|gallery| gallery.position_of(image))
            .ok_or(Error::UnknownImage)
    }

    /// Drops expired notifications. Call periodically.
    pub fn tick(&mut self) {
        self.notifications.tick();
    }

    /// Tears the instance down. Idempotent.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        let effects = self.state.shutdown();
        self.sync
            .apply(effects, &self.state, &mut self.host, &mut self.notifications);
        self.sync.release_all(&mut self.host);
        self.dispatcher.set_overlay_active(false);
        self.mounted = false;
        tracing::debug!(surface = self.sync.surface().raw(), "browser unmounted");
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.state.view_state()
    }

    #[must_use]
    pub fn state(&self) -> &component::State {
        &self.state
    }

    #[must_use]
    pub fn options(&self) -> &BrowserOptions {
        &self.options
    }

    #[must_use]
    pub fn surface(&self) -> SurfaceId {
        self.sync.surface()
    }

    #[must_use]
    pub fn presentation(&self) -> &sync::PresentationSync {
        &self.sync
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut notifications::Manager {
        &mut self.notifications
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    // =========================================================================
    // View models
    // =========================================================================

    #[must_use]
    pub fn footer(&self, i18n: &I18n) -> Option<view_model::Footer> {
        view_model::footer(&self.state, i18n)
    }

    #[must_use]
    pub fn info_panel(&self, i18n: &I18n) -> Option<view_model::InfoPanel> {
        view_model::info_panel(&self.state, self.options.show_actions, i18n)
    }

    #[must_use]
    pub fn slideshow_menu(&self, i18n: &I18n) -> Option<view_model::SlideshowMenu> {
        view_model::slideshow_menu(&self.state, i18n)
    }

    #[must_use]
    pub fn slideshow_bar(&self, i18n: &I18n) -> Option<view_model::SlideshowBar> {
        view_model::slideshow_bar(&self.state, i18n)
    }

    #[must_use]
    pub fn trigger(&self) -> Option<view_model::Trigger> {
        view_model::trigger(&self.state, self.options.trigger_label.as_deref())
    }
}

impl<H: HostEnvironment> Drop for ImageBrowser<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::FullscreenPort;
    use crate::browser::testing::{HostCall, RecordingHost};
    use crate::config::{BrowserConfig, GesturesConfig, SlideshowConfig};

    fn images(n: usize) -> Vec<Image> {
        (0..n).map(|i| Image::new(format!("{i}.jpg"))).collect()
    }

    #[test]
    fn options_from_config_clamp_values() {
        let config = Config {
            browser: BrowserConfig {
                initial_layout: Some(Layout::Grid),
                trigger_label: Some("Photos".to_string()),
                show_actions: Some(true),
            },
            slideshow: SlideshowConfig {
                interval_secs: Some(60),
                reschedule_on_interval_change: Some(true),
            },
            gestures: GesturesConfig {
                swipe_threshold_px: Some(0.0),
                swipe_down: Some(SwipeAction::None),
                ..GesturesConfig::default()
            },
            ..Config::default()
        };
        let options = BrowserOptions::from_config(&config);
        assert_eq!(options.initial_layout, Layout::Grid);
        assert_eq!(options.trigger_label.as_deref(), Some("Photos"));
        assert!(options.show_actions);
        assert_eq!(options.interval.value(), 10);
        assert!(options.reschedule_on_interval_change);
        assert_eq!(options.gestures.threshold.value(), 1.0);
        assert_eq!(options.gestures.bindings.down, SwipeAction::None);
    }

    #[test]
    fn keyboard_listens_only_while_open() {
        let mut browser =
            ImageBrowser::mount(images(3), BrowserOptions::default(), RecordingHost::new());
        assert!(!browser.handle_input(InputEvent::KeyPressed(Key::ArrowRight)));

        browser.update(Message::OpenOverlay);
        assert!(browser.handle_input(InputEvent::KeyPressed(Key::ArrowRight)));
        assert_eq!(browser.view_state().current_index, Some(2));

        browser.handle_input(InputEvent::KeyPressed(Key::Escape));
        assert!(!browser.view_state().overlay_open);
        assert!(!browser.handle_input(InputEvent::KeyPressed(Key::ArrowRight)));
    }

    #[test]
    fn select_image_by_reference() {
        let shared: Arc<[Image]> = images(3).into();
        let mut browser = ImageBrowser::mount(
            Arc::clone(&shared),
            BrowserOptions::default(),
            RecordingHost::new(),
        );
        browser.select_image(&shared[2]).expect("member image");
        assert_eq!(browser.view_state().current_index, Some(3));

        let stranger = Image::new("2.jpg");
        assert_eq!(browser.select_image(&stranger), Err(Error::UnknownImage));
    }

    #[test]
    fn open_at_image_by_reference() {
        let shared: Arc<[Image]> = images(4).into();
        let mut browser = ImageBrowser::mount(
            Arc::clone(&shared),
            BrowserOptions::default(),
            RecordingHost::new(),
        );
        browser.open_at_image(&shared[1]).expect("member image");
        let view = browser.view_state();
        assert!(view.overlay_open);
        assert_eq!(view.current_index, Some(2));
    }

    #[test]
    fn unmount_releases_and_ignores_later_messages() {
        let mut browser =
            ImageBrowser::mount(images(2), BrowserOptions::default(), RecordingHost::new());
        browser.update(Message::OpenOverlay);
        browser.update(Message::StartSlideshow { from: None });
        browser.update(Message::TogglePlatformFullscreen);

        browser.unmount();
        assert!(!browser.host().is_scroll_locked());
        assert!(!browser.host().is_fullscreen());
        assert!(browser.host().armed().is_empty());

        browser.host_mut().clear();
        browser.unmount();
        browser.update(Message::OpenOverlay);
        assert!(browser.host().calls().is_empty());
        assert!(!browser.is_mounted());
    }

    #[test]
    fn instances_use_distinct_surfaces() {
        let first =
            ImageBrowser::mount(images(1), BrowserOptions::default(), RecordingHost::new());
        let second =
            ImageBrowser::mount(images(1), BrowserOptions::default(), RecordingHost::new());
        assert_ne!(first.surface(), second.surface());
    }

    #[test]
    fn explicit_surface_is_passed_to_host() {
        let options = BrowserOptions {
            surface: Some(SurfaceId::from_raw(42)),
            ..BrowserOptions::default()
        };
        let mut browser = ImageBrowser::mount(images(2), options, RecordingHost::new());
        browser.update(Message::OpenOverlay);
        assert_eq!(
            browser.host().calls().first(),
            Some(&HostCall::LockScroll(SurfaceId::from_raw(42)))
        );
    }
}
