// SPDX-License-Identifier: MPL-2.0
//! Iced adapter.
//!
//! [`input_from_event`] converts native Iced events into browser
//! [`InputEvent`]s, and [`IcedHost`] implements the host ports by queueing
//! Iced [`Task`]s that the application returns from its `update`.

use crate::application::port::{
    FullscreenPort, HostError, ScrollOptions, ScrollPort, ScrollStrip, ScrollTarget, SurfaceId,
    TimerPort, TimerTicket,
};
use crate::browser::input::{InputEvent, Key, TouchPoint};
use iced::keyboard::key::Named;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{keyboard, mouse, task, touch, window, Event, Task};
use std::collections::{HashMap, HashSet};

/// Identifier of the thumbnail strip scrollable in the slides layout.
pub const FILMSTRIP_SCROLLABLE_ID: &str = "image-browser-filmstrip";

/// Identifier of the thumbnail matrix scrollable in the grid layout.
pub const GRID_SCROLLABLE_ID: &str = "image-browser-grid";

/// Lines are converted to pixels with this factor so both wheel kinds share
/// one sign convention and rough magnitude.
const PIXELS_PER_LINE: f32 = 40.0;

/// Maps an Iced key to a browser key.
#[must_use]
pub fn key_from_iced(key: &keyboard::Key) -> Option<Key> {
    match key {
        keyboard::Key::Named(Named::ArrowLeft) => Some(Key::ArrowLeft),
        keyboard::Key::Named(Named::ArrowRight) => Some(Key::ArrowRight),
        keyboard::Key::Named(Named::Escape) => Some(Key::Escape),
        keyboard::Key::Named(Named::Enter) => Some(Key::Enter),
        keyboard::Key::Named(Named::Space) => Some(Key::Space),
        keyboard::Key::Character(c) => Key::from_name(c.as_str()),
        _ => None,
    }
}

/// Maps a native Iced event to a browser input event.
///
/// Iced reports wheel deltas positive upwards; the browser expects positive
/// downwards, so the sign is flipped here.
#[must_use]
pub fn input_from_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            key_from_iced(key).map(InputEvent::KeyPressed)
        }
        Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
            let delta_y = match delta {
                mouse::ScrollDelta::Lines { y, .. } => -y * PIXELS_PER_LINE,
                mouse::ScrollDelta::Pixels { y, .. } => -y,
            };
            Some(InputEvent::Wheel { delta_y })
        }
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(InputEvent::TouchStart(TouchPoint::new(position.x, position.y)))
        }
        Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(InputEvent::TouchEnd(TouchPoint::new(position.x, position.y)))
        }
        Event::Touch(touch::Event::FingerLost { .. }) => Some(InputEvent::TouchCancel),
        _ => None,
    }
}

/// Host ports backed by Iced tasks.
///
/// Port calls only queue work; the application drains it with
/// [`IcedHost::take_tasks`] and returns the batch from its `update`.
pub struct IcedHost<M> {
    window: Option<window::Id>,
    tasks: Vec<Task<M>>,
    timers: HashMap<TimerTicket, task::Handle>,
    locked: HashSet<SurfaceId>,
    fullscreen: bool,
    on_elapsed: fn(TimerTicket) -> M,
}

impl<M> std::fmt::Debug for IcedHost<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IcedHost")
            .field("window", &self.window)
            .field("queued_tasks", &self.tasks.len())
            .field("timers", &self.timers.len())
            .field("locked", &self.locked)
            .field("fullscreen", &self.fullscreen)
            .finish_non_exhaustive()
    }
}

impl<M: Send + 'static> IcedHost<M> {
    /// Creates a host that turns fired slideshow tickets into `on_elapsed`.
    #[must_use]
    pub fn new(on_elapsed: fn(TimerTicket) -> M) -> Self {
        Self {
            window: None,
            tasks: Vec::new(),
            timers: HashMap::new(),
            locked: HashSet::new(),
            fullscreen: false,
            on_elapsed,
        }
    }

    /// Records the window hosting the browser, as seen in raw events.
    pub fn set_window(&mut self, window: window::Id) {
        self.window = Some(window);
    }

    /// Drains queued work into one batch.
    pub fn take_tasks(&mut self) -> Task<M> {
        Task::batch(std::mem::take(&mut self.tasks))
    }

    #[must_use]
    pub fn queued_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Records the window mode Iced reports, e.g. the answer to
    /// [`window::get_mode`] or a resize after the window manager left
    /// fullscreen.
    pub fn set_mode(&mut self, mode: window::Mode) {
        self.fullscreen = mode == window::Mode::Fullscreen;
    }

    /// Slideshow tickets with a live abort handle.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Whether scrollables behind the overlay should ignore the wheel.
    #[must_use]
    pub fn is_background_scroll_locked(&self) -> bool {
        !self.locked.is_empty()
    }

    fn change_mode(&mut self, mode: window::Mode) -> Result<(), HostError> {
        let Some(window) = self.window else {
            return Err(HostError::SurfaceUnavailable);
        };
        self.tasks.push(window::set_mode(window, mode));
        Ok(())
    }
}

impl<M: Send + 'static> FullscreenPort for IcedHost<M> {
    fn request_fullscreen(&mut self, _surface: SurfaceId) -> Result<(), HostError> {
        self.change_mode(window::Mode::Fullscreen)?;
        self.fullscreen = true;
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<(), HostError> {
        self.change_mode(window::Mode::Windowed)?;
        self.fullscreen = false;
        Ok(())
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }
}

impl<M: Send + 'static> ScrollPort for IcedHost<M> {
    fn scroll_into_view(&mut self, target: ScrollTarget, options: ScrollOptions) {
        // Iced scrollables have no animated scrolling, so `smooth` is moot.
        let offset = if options.centered {
            target.relative_offset()
        } else {
            0.0
        };
        let (id, relative) = match target.strip {
            ScrollStrip::Filmstrip => (
                FILMSTRIP_SCROLLABLE_ID,
                RelativeOffset { x: offset, y: 0.0 },
            ),
            ScrollStrip::Grid => (GRID_SCROLLABLE_ID, RelativeOffset { x: 0.0, y: offset }),
        };
        self.tasks.push(operation::snap_to(Id::new(id), relative));
    }

    fn lock_background_scroll(&mut self, surface: SurfaceId) {
        self.locked.insert(surface);
    }

    fn unlock_background_scroll(&mut self, surface: SurfaceId) {
        self.locked.remove(&surface);
    }
}

impl<M: Send + 'static> TimerPort for IcedHost<M> {
    fn arm(&mut self, ticket: TimerTicket) {
        let on_elapsed = self.on_elapsed;
        let (task, handle) =
            Task::perform(tokio::time::sleep(ticket.delay()), move |()| on_elapsed(ticket))
                .abortable();
        if let Some(previous) = self.timers.insert(ticket, handle) {
            previous.abort();
        }
        self.tasks.push(task);
    }

    fn cancel(&mut self, ticket: TimerTicket) {
        if let Some(handle) = self.timers.remove(&ticket) {
            handle.abort();
        }
    }

    fn delivered(&mut self, ticket: TimerTicket) {
        self.timers.remove(&ticket);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;
    use std::time::Duration;

    #[derive(Debug)]
    enum TestMessage {
        Elapsed(TimerTicket),
    }

    fn host() -> IcedHost<TestMessage> {
        IcedHost::new(TestMessage::Elapsed)
    }

    #[test]
    fn named_and_character_keys_map() {
        assert_eq!(
            key_from_iced(&keyboard::Key::Named(Named::Escape)),
            Some(Key::Escape)
        );
        assert_eq!(
            key_from_iced(&keyboard::Key::Named(Named::Space)),
            Some(Key::Space)
        );
        assert_eq!(
            key_from_iced(&keyboard::Key::Character("i".into())),
            Some(Key::Character('i'))
        );
        assert_eq!(key_from_iced(&keyboard::Key::Named(Named::F11)), None);
    }

    #[test]
    fn wheel_sign_is_flipped_to_downwards_positive() {
        let event = Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: -1.0 },
        });
        match input_from_event(&event) {
            Some(InputEvent::Wheel { delta_y }) => assert!(delta_y > 0.0),
            other => panic!("unexpected {other:?}"),
        }

        let event = Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Pixels { x: 0.0, y: 12.0 },
        });
        assert_eq!(
            input_from_event(&event),
            Some(InputEvent::Wheel { delta_y: -12.0 })
        );
    }

    #[test]
    fn touch_events_map_to_points() {
        let pressed = Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(1),
            position: Point::new(10.0, 20.0),
        });
        assert_eq!(
            input_from_event(&pressed),
            Some(InputEvent::TouchStart(TouchPoint::new(10.0, 20.0)))
        );

        let lost = Event::Touch(touch::Event::FingerLost {
            id: touch::Finger(1),
            position: Point::new(0.0, 0.0),
        });
        assert_eq!(input_from_event(&lost), Some(InputEvent::TouchCancel));
    }

    #[test]
    fn fullscreen_needs_a_window() {
        let mut host = host();
        let surface = SurfaceId::from_raw(1);
        assert_eq!(
            host.request_fullscreen(surface),
            Err(HostError::SurfaceUnavailable)
        );
        assert!(!host.is_fullscreen());

        host.set_window(window::Id::unique());
        assert_eq!(host.request_fullscreen(surface), Ok(()));
        assert!(host.is_fullscreen());
        assert_eq!(host.queued_tasks(), 1);

        host.exit_fullscreen().expect("window is known");
        assert!(!host.is_fullscreen());
    }

    #[test]
    fn reported_mode_overrides_requested_one() {
        let mut host = host();
        host.set_window(window::Id::unique());
        host.request_fullscreen(SurfaceId::from_raw(1))
            .expect("window is known");

        host.set_mode(window::Mode::Windowed);
        assert!(!host.is_fullscreen());
        host.set_mode(window::Mode::Fullscreen);
        assert!(host.is_fullscreen());
    }

    #[tokio::test]
    async fn delivered_tickets_release_their_handles() {
        let mut host = host();
        let mut previous = None;
        for generation in 1..=5 {
            let ticket = TimerTicket::new(generation, Duration::from_secs(1));
            host.arm(ticket);
            if let Some(fired) = previous.replace(ticket) {
                host.delivered(fired);
            }
            assert_eq!(host.pending_timers(), 1);
        }
        host.delivered(TimerTicket::new(99, Duration::from_secs(1)));
        assert_eq!(host.pending_timers(), 1);
    }

    #[tokio::test]
    async fn timers_and_scrolls_queue_tasks() {
        let mut host = host();
        let ticket = TimerTicket::new(1, Duration::from_secs(5));
        host.arm(ticket);
        host.scroll_into_view(
            ScrollTarget {
                surface: SurfaceId::from_raw(1),
                strip: ScrollStrip::Grid,
                image: crate::domain::gallery::ImageId::new(0),
                count: 4,
                columns: 2,
            },
            ScrollOptions::default(),
        );
        assert_eq!(host.queued_tasks(), 2);

        host.cancel(ticket);
        let _batch = host.take_tasks();
        assert_eq!(host.queued_tasks(), 0);
    }

    #[test]
    fn background_lock_tracks_surfaces() {
        let mut host = host();
        let first = SurfaceId::from_raw(1);
        let second = SurfaceId::from_raw(2);
        host.lock_background_scroll(first);
        host.lock_background_scroll(second);
        host.unlock_background_scroll(first);
        assert!(host.is_background_scroll_locked());
        host.unlock_background_scroll(second);
        assert!(!host.is_background_scroll_locked());
    }
}
