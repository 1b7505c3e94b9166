// SPDX-License-Identifier: MPL-2.0
//! Presentation sync: performs component effects against the host.
//!
//! The only state kept here is bookkeeping of what has been acquired from
//! the host (scroll lock, platform fullscreen, the pending timer), so every
//! acquisition can be released exactly once on any exit path.

use super::component::{self, Effect};
use super::subcomponents::panels::Layout;
use crate::application::port::{
    HostEnvironment, ScrollOptions, ScrollStrip, ScrollTarget, SurfaceId, TimerTicket,
};
use crate::domain::gallery::ImageId;
use crate::notifications;

/// Host resources held by one browser instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationSync {
    surface: SurfaceId,
    grid_columns: usize,
    scroll_locked: bool,
    platform_fullscreen: bool,
    pending_timer: Option<TimerTicket>,
}

impl PresentationSync {
    /// `grid_columns` is how many thumbnails the host lays out per grid row.
    #[must_use]
    pub fn new(surface: SurfaceId, grid_columns: usize) -> Self {
        Self {
            surface,
            grid_columns: grid_columns.max(1),
            scroll_locked: false,
            platform_fullscreen: false,
            pending_timer: None,
        }
    }

    /// Applies effects in order.
    pub fn apply<H: HostEnvironment>(
        &mut self,
        effects: Vec<Effect>,
        state: &component::State,
        host: &mut H,
        notifications: &mut notifications::Manager,
    ) {
        for effect in effects {
            match effect {
                Effect::LockBackgroundScroll => {
                    if !self.scroll_locked {
                        host.lock_background_scroll(self.surface);
                        self.scroll_locked = true;
                    }
                }
                Effect::UnlockBackgroundScroll => self.unlock(host),
                Effect::RevealSelection(id) => self.reveal(id, state, host),
                Effect::ArmTimer(ticket) => {
                    host.arm(ticket);
                    self.pending_timer = Some(ticket);
                }
                Effect::CancelTimer(ticket) => {
                    host.cancel(ticket);
                    if self.pending_timer == Some(ticket) {
                        self.pending_timer = None;
                    }
                }
                Effect::TogglePlatformFullscreen => {
                    // The platform may have left fullscreen on its own.
                    self.platform_fullscreen = host.is_fullscreen();
                    if self.platform_fullscreen {
                        self.exit_fullscreen(host);
                    } else {
                        self.enter_fullscreen(host);
                    }
                }
                Effect::ExitPlatformFullscreen => self.exit_fullscreen(host),
                Effect::Notify(notification) => notifications.push(notification),
            }
        }
    }

    /// Hands a ticket that came back from the host to its adapter.
    ///
    /// Runs for every delivery, including stale ones, so adapters never
    /// accumulate fired tickets.
    pub fn timer_delivered<H: HostEnvironment>(&mut self, ticket: TimerTicket, host: &mut H) {
        host.delivered(ticket);
        if self.pending_timer == Some(ticket) {
            self.pending_timer = None;
        }
    }

    /// Releases everything still held. Safe to call repeatedly.
    pub fn release_all<H: HostEnvironment>(&mut self, host: &mut H) {
        if let Some(ticket) = self.pending_timer.take() {
            host.cancel(ticket);
        }
        self.exit_fullscreen(host);
        self.unlock(host);
    }

    fn reveal<H: HostEnvironment>(&self, id: ImageId, state: &component::State, host: &mut H) {
        // The strip is hidden in compact fullscreen and absent while closed.
        if !state.is_overlay_open() || state.is_fullscreen() {
            return;
        }
        let Some(count) = state.gallery().map(crate::domain::gallery::Gallery::len) else {
            return;
        };
        let strip = match state.layout() {
            Layout::Slides => ScrollStrip::Filmstrip,
            Layout::Grid => ScrollStrip::Grid,
        };
        host.scroll_into_view(
            ScrollTarget {
                surface: self.surface,
                strip,
                image: id,
                count,
                columns: self.grid_columns,
            },
            ScrollOptions::default(),
        );
    }

    fn enter_fullscreen<H: HostEnvironment>(&mut self, host: &mut H) {
        match host.request_fullscreen(self.surface) {
            Ok(()) => {
                tracing::debug!(surface = self.surface.raw(), "platform fullscreen engaged");
                self.platform_fullscreen = true;
            }
            Err(err) => {
                tracing::warn!(
                    surface = self.surface.raw(),
                    %err,
                    "platform fullscreen unavailable"
                );
            }
        }
    }

    fn exit_fullscreen<H: HostEnvironment>(&mut self, host: &mut H) {
        if !self.platform_fullscreen {
            return;
        }
        self.platform_fullscreen = false;
        if !host.is_fullscreen() {
            tracing::debug!("platform already left fullscreen");
            return;
        }
        if let Err(err) = host.exit_fullscreen() {
            tracing::warn!(%err, "leaving platform fullscreen failed");
        }
    }

    fn unlock<H: HostEnvironment>(&mut self, host: &mut H) {
        if self.scroll_locked {
            host.unlock_background_scroll(self.surface);
            self.scroll_locked = false;
        }
    }

    #[must_use]
    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    #[must_use]
    pub fn is_platform_fullscreen(&self) -> bool {
        self.platform_fullscreen
    }

    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerTicket> {
        self.pending_timer
    }
}
