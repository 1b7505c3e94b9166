// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that host adapters implement.
//! These traits use only domain types, ensuring the browser controller remains
//! independent of any concrete platform.
//!
//! # Available Ports
//!
//! - [`host`]: platform fullscreen, strip scrolling, background scroll lock
//! - [`timer`]: the slideshow's single pending timer
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no tokio types)
//! - Failing capabilities return [`HostError`]; the controller degrades
//!   instead of propagating
//! - No `async fn` - adapters schedule work on their own runtime
//!
//! # Example
//!
//! ```ignore
//! use image_browser::application::port::{HostEnvironment, SurfaceId};
//!
//! fn enter(host: &mut impl HostEnvironment, surface: SurfaceId) {
//!     if host.request_fullscreen(surface).is_err() {
//!         // stay windowed
//!     }
//! }
//! ```

pub mod host;
pub mod timer;

// Re-export main types for convenience
pub use host::{
    FullscreenPort, HostError, ScrollOptions, ScrollPort, ScrollStrip, ScrollTarget, SurfaceId,
};
pub use timer::{TimerPort, TimerTicket};

/// Everything a browser instance needs from its host.
pub trait HostEnvironment: FullscreenPort + ScrollPort + TimerPort {}

impl<T: FullscreenPort + ScrollPort + TimerPort> HostEnvironment for T {}
