// SPDX-License-Identifier: MPL-2.0
//! Host environment port definitions.
//!
//! The browser never touches page-global state directly. Everything it needs
//! from the hosting platform (true fullscreen, smooth scrolling of the
//! thumbnail strip, suspending background scrolling) goes through these
//! traits, so several instances and test doubles never collide.

use crate::domain::gallery::ImageId;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// =============================================================================
// HostError
// =============================================================================

/// Failures reported by a host capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The platform does not offer this capability.
    Unsupported,

    /// The surface the request targets does not exist (yet, or anymore).
    SurfaceUnavailable,

    /// The platform refused the request.
    Rejected(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::Unsupported => write!(f, "Capability not supported by the host"),
            HostError::SurfaceUnavailable => write!(f, "Target surface is not available"),
            HostError::Rejected(msg) => write!(f, "Request rejected: {msg}"),
        }
    }
}

impl std::error::Error for HostError {}

// =============================================================================
// SurfaceId
// =============================================================================

/// Handle of the root surface owned by one browser instance.
///
/// Each instance passes its own handle to the host; surfaces are never looked
/// up through a shared identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    /// Allocates a process-unique surface handle.
    #[must_use]
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Wraps a handle assigned by the host.
    #[must_use]
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl Default for SurfaceId {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Scrolling
// =============================================================================

/// The scrollable collection that mirrors the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollStrip {
    /// Thumbnail strip under the main image (slides layout).
    Filmstrip,
    /// Thumbnail matrix (grid layout).
    Grid,
}

/// How the host should bring an item into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollOptions {
    pub smooth: bool,
    pub centered: bool,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            smooth: true,
            centered: true,
        }
    }
}

/// Item to bring into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTarget {
    /// Surface owning the strip.
    pub surface: SurfaceId,
    /// Which strip to scroll.
    pub strip: ScrollStrip,
    /// Selected image.
    pub image: ImageId,
    /// Number of items in the strip.
    pub count: usize,
    /// Items per grid row. The filmstrip is a single row and ignores it.
    pub columns: usize,
}

impl ScrollTarget {
    /// Relative position of the item inside the strip, from 0.0 to 1.0.
    ///
    /// The filmstrip scrolls per item; the grid scrolls per row, so every
    /// item of a row shares one offset.
    #[must_use]
    pub fn relative_offset(&self) -> f32 {
        let (index, len) = match self.strip {
            ScrollStrip::Filmstrip => (self.image.position(), self.count),
            ScrollStrip::Grid => {
                let columns = self.columns.max(1);
                (self.image.position() / columns, self.count.div_ceil(columns))
            }
        };
        if len <= 1 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = index as f32 / (len - 1) as f32;
        ratio.clamp(0.0, 1.0)
    }
}

// =============================================================================
// Ports
// =============================================================================

/// Port for true platform fullscreen on a browser surface.
///
/// Both calls may fail when the platform lacks the capability; callers must
/// treat failures as "did not engage" and carry on.
pub trait FullscreenPort {
    /// Asks the platform to show `surface` fullscreen.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] if fullscreen cannot be engaged.
    fn request_fullscreen(&mut self, surface: SurfaceId) -> Result<(), HostError>;

    /// Leaves platform fullscreen.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] if the platform refuses.
    fn exit_fullscreen(&mut self) -> Result<(), HostError>;

    /// Whether the platform currently shows a surface fullscreen.
    ///
    /// The user or the window manager can leave fullscreen without going
    /// through the browser, so this reports the live platform state.
    fn is_fullscreen(&self) -> bool;
}

/// Port for scrolling the strip and suspending background scrolling.
pub trait ScrollPort {
    /// Brings the target item into view.
    fn scroll_into_view(&mut self, target: ScrollTarget, options: ScrollOptions);

    /// Suspends scrolling of the hosting page while `surface` is open.
    fn lock_background_scroll(&mut self, surface: SurfaceId);

    /// Restores scrolling of the hosting page.
    fn unlock_background_scroll(&mut self, surface: SurfaceId);
}
