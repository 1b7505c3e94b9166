// SPDX-License-Identifier: MPL-2.0
//! Browser component orchestrating the navigation, panel and slideshow
//! sub-components.
//!
//! `State::update` is the single authority for view-state transitions. It
//! never touches the host; everything the outside world must do is returned
//! as a list of [`Effect`]s, in the order they must be applied.

use super::subcomponents::{navigation, panels, slideshow};
use crate::application::port::TimerTicket;
use crate::domain::gallery::{Gallery, Image, ImageId};
use crate::domain::ui::SlideshowInterval;
use crate::notifications::Notification;
use std::sync::Arc;

pub use panels::Layout;

/// Notification key for an open request against an empty gallery.
pub const EMPTY_GALLERY_KEY: &str = "notification-empty-gallery";

/// Messages accepted by a browser instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Show the overlay on the first image.
    OpenOverlay,
    /// Show the overlay on a given image (inline grid click).
    OpenAt(ImageId),
    CloseOverlay,
    Next,
    Previous,
    Select(ImageId),
    ToggleInfo,
    SetInfo(bool),
    ToggleSlideshowMenu,
    /// Compact (layout-only) fullscreen.
    ToggleFullscreen,
    SetLayout(Layout),
    /// True platform fullscreen on the instance's own surface.
    TogglePlatformFullscreen,
    StartSlideshow { from: Option<ImageId> },
    PauseSlideshow,
    ResumeSlideshow,
    TogglePause,
    StopSlideshow,
    SetInterval(u32),
    SlideshowElapsed(TimerTicket),
    /// Escape: close exactly one layer.
    Dismiss,
}

/// Side effects for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    LockBackgroundScroll,
    UnlockBackgroundScroll,
    /// Bring the selected image into view in the visible strip.
    RevealSelection(ImageId),
    ArmTimer(TimerTicket),
    CancelTimer(TimerTicket),
    TogglePlatformFullscreen,
    /// Leave platform fullscreen if it is engaged.
    ExitPlatformFullscreen,
    Notify(Notification),
}

/// A non-empty gallery together with its selection.
#[derive(Debug, Clone)]
struct Session {
    gallery: Gallery,
    navigation: navigation::State,
}

/// Read-only snapshot of the view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ViewState {
    pub overlay_open: bool,
    pub layout: Layout,
    pub info_open: bool,
    pub slideshow_menu_open: bool,
    pub fullscreen: bool,
    pub slideshow_active: bool,
    /// Always `false` while the slideshow is not active.
    pub slideshow_paused: bool,
    pub interval_seconds: u32,
    pub selection: Option<ImageId>,
    pub current_index: Option<usize>,
}

/// Complete state of one browser instance.
#[derive(Debug, Clone)]
pub struct State {
    session: Option<Session>,
    panels: panels::State,
    slideshow: slideshow::State,
}

impl State {
    /// Creates the state for a freshly mounted instance.
    ///
    /// An empty collection is accepted here; only opening the overlay is
    /// refused for it.
    pub fn new(
        images: impl Into<Arc<[Image]>>,
        layout: Layout,
        interval: SlideshowInterval,
        reschedule_on_interval_change: bool,
    ) -> Self {
        let session = Gallery::new(images).ok().map(|gallery| Session {
            navigation: navigation::State::new(&gallery),
            gallery,
        });
        Self {
            session,
            panels: panels::State::new(layout),
            slideshow: slideshow::State::new(interval, reschedule_on_interval_change),
        }
    }

    /// Applies one message and returns the effects to perform.
    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        tracing::trace!(?message, "browser update");
        match message {
            Message::OpenOverlay => self.open(None),
            Message::OpenAt(id) => self.open(Some(id)),
            Message::CloseOverlay => {
                if self.panels.handle(panels::Message::Close) == panels::Effect::Closed {
                    self.closed()
                } else {
                    Vec::new()
                }
            }
            Message::Next => self.navigate(navigation::Message::Next),
            Message::Previous => self.navigate(navigation::Message::Previous),
            Message::Select(id) => self.navigate(navigation::Message::Select(id)),
            Message::ToggleInfo => self.panel(panels::Message::ToggleInfo),
            Message::SetInfo(open) => self.panel(panels::Message::SetInfo(open)),
            Message::ToggleSlideshowMenu => self.panel(panels::Message::ToggleSlideshowMenu),
            Message::ToggleFullscreen => {
                let mut effects = self.panel(panels::Message::ToggleFullscreen);
                self.reveal(&mut effects);
                effects
            }
            Message::SetLayout(layout) => {
                let mut effects = self.panel(panels::Message::SetLayout(layout));
                self.reveal(&mut effects);
                effects
            }
            Message::TogglePlatformFullscreen => {
                if self.panels.is_overlay_open() {
                    vec![Effect::TogglePlatformFullscreen]
                } else {
                    Vec::new()
                }
            }
            Message::StartSlideshow { from } => self.start_slideshow(from),
            Message::PauseSlideshow => self.slideshow(slideshow::Message::Pause),
            Message::ResumeSlideshow => self.slideshow(slideshow::Message::Resume),
            Message::TogglePause => self.slideshow(slideshow::Message::TogglePause),
            Message::StopSlideshow => {
                if self.slideshow.is_active() {
                    self.slideshow(slideshow::Message::Stop)
                } else {
                    Vec::new()
                }
            }
            Message::SetInterval(seconds) => {
                self.slideshow(slideshow::Message::SetInterval(seconds))
            }
            Message::SlideshowElapsed(ticket) => {
                self.slideshow(slideshow::Message::Elapsed(ticket))
            }
            Message::Dismiss => self.dismiss(),
        }
    }

    /// Ends the session for unmount: closes the overlay and stops the
    /// slideshow through the regular close path.
    pub fn shutdown(&mut self) -> Vec<Effect> {
        self.update(Message::CloseOverlay)
    }

    fn open(&mut self, target: Option<ImageId>) -> Vec<Effect> {
        let Some(session) = self.session.as_mut() else {
            tracing::warn!("refusing to open the browser on an empty gallery");
            return vec![Effect::Notify(Notification::warning(EMPTY_GALLERY_KEY))];
        };

        let nav_message = match target {
            Some(id) if !session.gallery.contains(id) => {
                tracing::warn!(position = id.position(), "open target is not in the gallery");
                return Vec::new();
            }
            Some(id) => navigation::Message::Select(id),
            None => navigation::Message::Reset,
        };
        session.navigation.handle(nav_message, &session.gallery);
        let selection = session.navigation.selection();

        let mut effects = Vec::new();
        if self.panels.handle(panels::Message::Open) == panels::Effect::Opened {
            tracing::debug!(image = selection.ordinal(), "overlay opened");
            effects.push(Effect::LockBackgroundScroll);
        }
        if self.slideshow.is_active() {
            effects.extend(self.slideshow(slideshow::Message::SelectionMoved));
        }
        effects.push(Effect::RevealSelection(selection));
        effects
    }

    fn closed(&mut self) -> Vec<Effect> {
        tracing::debug!("overlay closed");
        let mut effects = self.slideshow(slideshow::Message::Stop);
        effects.push(Effect::UnlockBackgroundScroll);
        effects
    }

    fn dismiss(&mut self) -> Vec<Effect> {
        if self.slideshow.is_active() {
            return self.slideshow(slideshow::Message::Stop);
        }
        match self.panels.handle(panels::Message::DismissTopmost) {
            panels::Effect::Dismissed(panels::Dismissed::Overlay) => self.closed(),
            panels::Effect::Dismissed(panels::Dismissed::Fullscreen) => {
                let mut effects = Vec::new();
                self.reveal(&mut effects);
                effects
            }
            _ => Vec::new(),
        }
    }

    fn navigate(&mut self, message: navigation::Message) -> Vec<Effect> {
        let Some(session) = self.session.as_mut() else {
            tracing::debug!("navigation ignored without images");
            return Vec::new();
        };
        match session.navigation.handle(message, &session.gallery) {
            navigation::Effect::Selected(id) => {
                let mut effects = self.slideshow(slideshow::Message::SelectionMoved);
                effects.push(Effect::RevealSelection(id));
                effects
            }
            navigation::Effect::Rejected(id) => {
                tracing::warn!(position = id.position(), "selection target is not in the gallery");
                Vec::new()
            }
        }
    }

    fn start_slideshow(&mut self, from: Option<ImageId>) -> Vec<Effect> {
        if !self.panels.is_overlay_open() {
            tracing::warn!("slideshow start ignored while the overlay is closed");
            return Vec::new();
        }
        let mut effects = Vec::new();
        if let Some(id) = from {
            if let Some(session) = self.session.as_mut() {
                if let navigation::Effect::Selected(id) =
                    session.navigation.handle(navigation::Message::Select(id), &session.gallery)
                {
                    effects.push(Effect::RevealSelection(id));
                }
            }
        }
        effects.extend(self.slideshow(slideshow::Message::Start));
        effects
    }

    fn panel(&mut self, message: panels::Message) -> Vec<Effect> {
        self.panels.handle(message);
        Vec::new()
    }

    fn reveal(&self, effects: &mut Vec<Effect>) {
        if let Some(id) = self.selection() {
            effects.push(Effect::RevealSelection(id));
        }
    }

    fn slideshow(&mut self, message: slideshow::Message) -> Vec<Effect> {
        let mut effects = Vec::new();
        for effect in self.slideshow.handle(message) {
            match effect {
                slideshow::Effect::ArmTimer(ticket) => effects.push(Effect::ArmTimer(ticket)),
                slideshow::Effect::CancelTimer(ticket) => {
                    effects.push(Effect::CancelTimer(ticket));
                }
                slideshow::Effect::ReleasePlatformFullscreen => {
                    effects.push(Effect::ExitPlatformFullscreen);
                }
                slideshow::Effect::Advance => {
                    if let Some(session) = self.session.as_mut() {
                        if let navigation::Effect::Selected(id) =
                            session.navigation.handle(navigation::Message::Next, &session.gallery)
                        {
                            tracing::debug!(image = id.ordinal(), "slideshow advanced");
                            effects.push(Effect::RevealSelection(id));
                        }
                    }
                }
            }
        }
        effects
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        ViewState {
            overlay_open: self.panels.is_overlay_open(),
            layout: self.panels.layout(),
            info_open: self.panels.is_info_open(),
            slideshow_menu_open: self.panels.is_slideshow_menu_open(),
            fullscreen: self.panels.is_fullscreen(),
            slideshow_active: self.slideshow.is_active(),
            slideshow_paused: self.slideshow.is_active() && self.slideshow.is_paused(),
            interval_seconds: self.slideshow.interval().value(),
            selection: self.selection(),
            current_index: self.current_index(),
        }
    }

    #[must_use]
    pub fn gallery(&self) -> Option<&Gallery> {
        self.session.as_ref().map(|session| &session.gallery)
    }

    #[must_use]
    pub fn selection(&self) -> Option<ImageId> {
        self.session
            .as_ref()
            .map(|session| session.navigation.selection())
    }

    /// 1-based position of the selection.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.session
            .as_ref()
            .map(|session| session.navigation.current_index())
    }

    #[must_use]
    pub fn selected_image(&self) -> Option<&Image> {
        let session = self.session.as_ref()?;
        session.gallery.get(session.navigation.selection())
    }

    #[must_use]
    pub fn is_overlay_open(&self) -> bool {
        self.panels.is_overlay_open()
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.panels.layout()
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.panels.is_fullscreen()
    }

    #[must_use]
    pub fn is_info_open(&self) -> bool {
        self.panels.is_info_open()
    }

    #[must_use]
    pub fn is_slideshow_menu_open(&self) -> bool {
        self.panels.is_slideshow_menu_open()
    }

    #[must_use]
    pub fn slideshow_phase(&self) -> slideshow::Phase {
        self.slideshow.phase()
    }

    #[must_use]
    pub fn interval(&self) -> SlideshowInterval {
        self.slideshow.interval()
    }

    #[must_use]
    pub fn pending_ticket(&self) -> Option<TimerTicket> {
        self.slideshow.pending()
    }
}
