// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Slideshow**: interval in seconds and its bounds
//! - **Gestures**: minimum swipe travel
//! - **Browser**: options of a freshly mounted instance

use crate::domain::ui::newtypes::{interval_bounds, swipe_bounds};

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Default time each image stays on screen (in seconds).
pub const DEFAULT_SLIDESHOW_INTERVAL_SECS: u32 = interval_bounds::DEFAULT;

/// Minimum slideshow interval (in seconds).
pub const MIN_SLIDESHOW_INTERVAL_SECS: u32 = interval_bounds::MIN;

/// Maximum slideshow interval (in seconds).
pub const MAX_SLIDESHOW_INTERVAL_SECS: u32 = interval_bounds::MAX;

/// Whether an interval change re-arms the pending wait immediately.
pub const DEFAULT_RESCHEDULE_ON_INTERVAL_CHANGE: bool = false;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Default minimum swipe travel in logical pixels.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = swipe_bounds::DEFAULT;

// ==========================================================================
// Browser Defaults
// ==========================================================================

/// Whether the info panel shows the like/share/comment row.
pub const DEFAULT_SHOW_ACTIONS: bool = false;

/// Thumbnails per row assumed for the grid layout.
pub const DEFAULT_GRID_COLUMNS: usize = 4;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SLIDESHOW_INTERVAL_SECS > 0);
    assert!(MAX_SLIDESHOW_INTERVAL_SECS >= MIN_SLIDESHOW_INTERVAL_SECS);
    assert!(DEFAULT_SLIDESHOW_INTERVAL_SECS >= MIN_SLIDESHOW_INTERVAL_SECS);
    assert!(DEFAULT_SLIDESHOW_INTERVAL_SECS <= MAX_SLIDESHOW_INTERVAL_SECS);

    assert!(DEFAULT_SWIPE_THRESHOLD_PX >= swipe_bounds::MIN);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX <= swipe_bounds::MAX);

    assert!(DEFAULT_GRID_COLUMNS > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slideshow_defaults_are_valid() {
        assert_eq!(DEFAULT_SLIDESHOW_INTERVAL_SECS, 5);
        assert_eq!(MIN_SLIDESHOW_INTERVAL_SECS, 1);
        assert_eq!(MAX_SLIDESHOW_INTERVAL_SECS, 10);
    }

    #[test]
    fn swipe_default_is_ten_pixels() {
        assert_eq!(DEFAULT_SWIPE_THRESHOLD_PX, 10.0);
    }
}
