// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`tokio_timer`]: slideshow timer on the Tokio runtime (implements [`TimerPort`])
//! - [`iced_host`]: Iced event mapping and task-queueing host (implements [`HostEnvironment`])
//! - [`terminal`]: logging host and command parser for the command-line demo
//!
//! [`TimerPort`]: crate::application::port::TimerPort
//! [`HostEnvironment`]: crate::application::port::HostEnvironment

pub mod iced_host;
pub mod terminal;
pub mod tokio_timer;

// Re-export main types for convenience
pub use iced_host::{input_from_event, IcedHost};
pub use terminal::TerminalHost;
pub use tokio_timer::TokioTimer;
