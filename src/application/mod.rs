// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports towards the hosting platform.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The browser controller only talks to the host through these ports
//!
//! # Example
//!
//! ```ignore
//! use image_browser::application::port::{TimerPort, TimerTicket};
//!
//! // Infrastructure implements the port trait
//! struct MyTimer { /* ... */ }
//! impl TimerPort for MyTimer { /* ... */ }
//! ```

pub mod port;
