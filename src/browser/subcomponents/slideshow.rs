// SPDX-License-Identifier: MPL-2.0
//! Slideshow scheduler sub-component.
//!
//! While running there is exactly one pending [`TimerTicket`]. Every ticket
//! gets a fresh generation number, and only the pending ticket may advance
//! the gallery, so a delivery that loses the race against pause, stop or
//! close is discarded.

use crate::application::port::TimerTicket;
use crate::domain::ui::SlideshowInterval;

/// Lifecycle of the slideshow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Paused,
}

/// Slideshow sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    phase: Phase,
    interval: SlideshowInterval,
    pending: Option<TimerTicket>,
    generation: u64,
    /// Re-arm immediately when the interval changes while running.
    reschedule_on_interval_change: bool,
}

/// Messages for the slideshow sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Start,
    Pause,
    Resume,
    /// Space bar: pause when running, resume when paused, otherwise nothing.
    TogglePause,
    Stop,
    SetInterval(u32),
    /// The host delivered a ticket.
    Elapsed(TimerTicket),
    /// The selection moved for another reason; restart the wait.
    SelectionMoved,
}

/// Effects produced by the scheduler, in the order they must be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    ArmTimer(TimerTicket),
    CancelTimer(TimerTicket),
    /// Move the selection one image forward.
    Advance,
    /// Leave platform fullscreen if it is engaged.
    ReleasePlatformFullscreen,
}

impl State {
    #[must_use]
    pub fn new(interval: SlideshowInterval, reschedule_on_interval_change: bool) -> Self {
        Self {
            interval,
            reschedule_on_interval_change,
            ..Self::default()
        }
    }

    /// Handle a scheduler message.
    pub fn handle(&mut self, msg: Message) -> Vec<Effect> {
        let mut effects = Vec::new();
        match msg {
            Message::Start => {
                self.phase = Phase::Running;
                self.rearm(&mut effects);
            }
            Message::Pause => self.pause(&mut effects),
            Message::Resume => self.resume(&mut effects),
            Message::TogglePause => match self.phase {
                Phase::Running => self.pause(&mut effects),
                Phase::Paused => self.resume(&mut effects),
                Phase::Idle => {}
            },
            Message::Stop => {
                self.phase = Phase::Idle;
                self.cancel_pending(&mut effects);
                effects.push(Effect::ReleasePlatformFullscreen);
            }
            Message::SetInterval(seconds) => {
                self.interval = SlideshowInterval::new(seconds);
                if self.reschedule_on_interval_change && self.phase == Phase::Running {
                    self.rearm(&mut effects);
                }
            }
            Message::Elapsed(ticket) => {
                if self.phase == Phase::Running && self.pending == Some(ticket) {
                    self.pending = None;
                    effects.push(Effect::Advance);
                    self.rearm(&mut effects);
                } else {
                    tracing::debug!(
                        generation = ticket.generation(),
                        "discarding stale slideshow ticket"
                    );
                }
            }
            Message::SelectionMoved => {
                if self.phase == Phase::Running {
                    self.rearm(&mut effects);
                }
            }
        }
        effects
    }

    fn pause(&mut self, effects: &mut Vec<Effect>) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
            self.cancel_pending(effects);
        }
    }

    fn resume(&mut self, effects: &mut Vec<Effect>) {
        if self.phase == Phase::Paused {
            self.phase = Phase::Running;
            self.rearm(effects);
        }
    }

    fn cancel_pending(&mut self, effects: &mut Vec<Effect>) {
        if let Some(ticket) = self.pending.take() {
            effects.push(Effect::CancelTimer(ticket));
        }
    }

    fn rearm(&mut self, effects: &mut Vec<Effect>) {
        self.cancel_pending(effects);
        self.generation += 1;
        let ticket = TimerTicket::new(self.generation, self.interval.as_duration());
        self.pending = Some(ticket);
        effects.push(Effect::ArmTimer(ticket));
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Running or paused.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Only meaningful while active.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    #[must_use]
    pub fn interval(&self) -> SlideshowInterval {
        self.interval
    }

    /// The ticket the scheduler is waiting for, if any.
    #[must_use]
    pub fn pending(&self) -> Option<TimerTicket> {
        self.pending
    }
}
