// SPDX-License-Identifier: MPL-2.0
//! Test double for the host ports.
//!
//! [`RecordingHost`] records every port call in order and keeps a small model
//! of what is held (scroll lock, fullscreen, armed tickets) so tests can check
//! that everything acquired is eventually released.
//!
//! Compiled for this crate's unit tests and behind the `test-utils` feature
//! for integration tests and benches.

use crate::application::port::{
    FullscreenPort, HostError, ScrollOptions, ScrollPort, ScrollStrip, ScrollTarget, SurfaceId,
    TimerPort, TimerTicket,
};
use crate::domain::gallery::ImageId;

/// One recorded port call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    RequestFullscreen(SurfaceId),
    ExitFullscreen,
    ScrollIntoView { strip: ScrollStrip, image: ImageId },
    LockScroll(SurfaceId),
    UnlockScroll(SurfaceId),
    Arm(TimerTicket),
    Cancel(TimerTicket),
    Delivered(TimerTicket),
}

/// Host that records calls instead of performing them.
#[derive(Debug, Default)]
pub struct RecordingHost {
    calls: Vec<HostCall>,
    fullscreen_error: Option<HostError>,
    locked: Vec<SurfaceId>,
    fullscreen: bool,
    armed: Vec<TimerTicket>,
    last_scroll: Option<(ScrollTarget, ScrollOptions)>,
}

impl RecordingHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later fullscreen request fail with `error`.
    pub fn fail_fullscreen_with(&mut self, error: HostError) {
        self.fullscreen_error = Some(error);
    }

    #[must_use]
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Forgets recorded calls; the held-resource model is kept.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Tickets armed and not cancelled, oldest first.
    #[must_use]
    pub fn armed(&self) -> &[TimerTicket] {
        &self.armed
    }

    /// Removes and returns the oldest armed ticket, as if it fired.
    pub fn fire_next(&mut self) -> Option<TimerTicket> {
        if self.armed.is_empty() {
            None
        } else {
            Some(self.armed.remove(0))
        }
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        !self.locked.is_empty()
    }

    #[must_use]
    pub fn last_scroll_target(&self) -> Option<ScrollTarget> {
        self.last_scroll.map(|(target, _)| target)
    }

    #[must_use]
    pub fn last_scroll_options(&self) -> Option<ScrollOptions> {
        self.last_scroll.map(|(_, options)| options)
    }
}

impl FullscreenPort for RecordingHost {
    fn request_fullscreen(&mut self, surface: SurfaceId) -> Result<(), HostError> {
        self.calls.push(HostCall::RequestFullscreen(surface));
        if let Some(error) = &self.fullscreen_error {
            return Err(error.clone());
        }
        self.fullscreen = true;
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<(), HostError> {
        self.calls.push(HostCall::ExitFullscreen);
        self.fullscreen = false;
        Ok(())
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }
}

impl ScrollPort for RecordingHost {
    fn scroll_into_view(&mut self, target: ScrollTarget, options: ScrollOptions) {
        self.calls.push(HostCall::ScrollIntoView {
            strip: target.strip,
            image: target.image,
        });
        self.last_scroll = Some((target, options));
    }

    fn lock_background_scroll(&mut self, surface: SurfaceId) {
        self.calls.push(HostCall::LockScroll(surface));
        self.locked.push(surface);
    }

    fn unlock_background_scroll(&mut self, surface: SurfaceId) {
        self.calls.push(HostCall::UnlockScroll(surface));
        if let Some(pos) = self.locked.iter().position(|s| *s == surface) {
            self.locked.remove(pos);
        }
    }
}

impl TimerPort for RecordingHost {
    fn arm(&mut self, ticket: TimerTicket) {
        self.calls.push(HostCall::Arm(ticket));
        self.armed.push(ticket);
    }

    fn cancel(&mut self, ticket: TimerTicket) {
        self.calls.push(HostCall::Cancel(ticket));
        self.armed.retain(|t| *t != ticket);
    }

    fn delivered(&mut self, ticket: TimerTicket) {
        self.calls.push(HostCall::Delivered(ticket));
        self.armed.retain(|t| *t != ticket);
    }
}
