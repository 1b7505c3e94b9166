// SPDX-License-Identifier: MPL-2.0
//! Tokio-backed slideshow timer.
//!
//! Every armed ticket gets its own sleeping task and cancellation token.
//! Fired tickets are sent on an unbounded channel; the owner reads them and
//! feeds them back as [`Message::SlideshowElapsed`].
//!
//! [`Message::SlideshowElapsed`]: crate::browser::Message::SlideshowElapsed

use crate::application::port::{TimerPort, TimerTicket};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Timer adapter spawning onto the current Tokio runtime.
///
/// Must be used from within a runtime context; `arm` calls
/// [`tokio::spawn`].
#[derive(Debug)]
pub struct TokioTimer {
    pending: HashMap<TimerTicket, CancellationToken>,
    fired_tx: mpsc::UnboundedSender<TimerTicket>,
}

impl TokioTimer {
    /// Creates the timer and the receiver its tickets are delivered on.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerTicket>) {
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        let timer = Self {
            pending: HashMap::new(),
            fired_tx,
        };
        (timer, fired_rx)
    }

    /// Number of tickets armed and neither cancelled nor delivered.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl TimerPort for TokioTimer {
    fn arm(&mut self, ticket: TimerTicket) {
        let cancel = CancellationToken::new();
        if let Some(previous) = self.pending.insert(ticket, cancel.clone()) {
            previous.cancel();
        }
        let tx = self.fired_tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::trace!(generation = ticket.generation(), "timer cancelled");
                }
                _ = tokio::time::sleep(ticket.delay()) => {
                    // Receiver gone means the browser is gone too.
                    let _ = tx.send(ticket);
                }
            }
        });
    }

    fn cancel(&mut self, ticket: TimerTicket) {
        if let Some(token) = self.pending.remove(&ticket) {
            token.cancel();
        }
    }

    fn delivered(&mut self, ticket: TimerTicket) {
        self.pending.remove(&ticket);
    }
}

impl Drop for TokioTimer {
    fn drop(&mut self) {
        for (_, token) in self.pending.drain() {
            token.cancel();
        }
    }
}
