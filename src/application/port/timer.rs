// SPDX-License-Identifier: MPL-2.0
//! Slideshow timer port definition.
//!
//! The slideshow never sleeps itself. It hands a [`TimerTicket`] to the host,
//! and the host delivers the ticket back once its delay has elapsed. Every
//! ticket carries a generation number; the scheduler only honors the ticket
//! it armed last, so a delivery racing a cancellation is dropped.

use std::time::Duration;

/// One scheduled slideshow advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerTicket {
    generation: u64,
    delay: Duration,
}

impl TimerTicket {
    #[must_use]
    pub fn new(generation: u64, delay: Duration) -> Self {
        Self { generation, delay }
    }

    /// Monotonic arm counter of the owning scheduler.
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }

    /// Time to wait before delivering the ticket.
    #[must_use]
    pub fn delay(self) -> Duration {
        self.delay
    }
}

/// Port for the single pending slideshow timer of a browser instance.
pub trait TimerPort {
    /// Schedules delivery of `ticket` after `ticket.delay()`.
    fn arm(&mut self, ticket: TimerTicket);

    /// Revokes a previously armed ticket. Cancelling an unknown or already
    /// delivered ticket is a no-op.
    fn cancel(&mut self, ticket: TimerTicket);

    /// Called by the browser once `ticket` has come back to it, stale or
    /// not. Adapters that keep per-ticket state drop it here.
    fn delivered(&mut self, _ticket: TimerTicket) {}
}
