// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Slideshow Interval Bounds
// =============================================================================

/// Slideshow interval bounds in seconds.
pub mod interval_bounds {
    /// Shortest time an image stays on screen.
    pub const MIN: u32 = 1;
    /// Longest time an image stays on screen.
    pub const MAX: u32 = 10;
    /// Interval preselected in the slideshow menu.
    pub const DEFAULT: u32 = 5;
}

// =============================================================================
// SlideshowInterval
// =============================================================================

/// Time each image stays on screen during a slideshow.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–10 seconds).
///
/// # Example
///
/// ```
/// use image_browser::domain::ui::SlideshowInterval;
///
/// let interval = SlideshowInterval::new(3);
/// assert_eq!(interval.value(), 3);
///
/// // Values outside range are clamped
/// assert_eq!(SlideshowInterval::new(0).value(), 1);
/// assert_eq!(SlideshowInterval::new(60).value(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideshowInterval(u32);

impl SlideshowInterval {
    /// Creates a new interval, clamping to the valid range.
    #[must_use]
    pub fn new(seconds: u32) -> Self {
        Self(seconds.clamp(interval_bounds::MIN, interval_bounds::MAX))
    }

    /// Returns the value in seconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= interval_bounds::MIN
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= interval_bounds::MAX
    }
}

impl Default for SlideshowInterval {
    fn default() -> Self {
        Self(interval_bounds::DEFAULT)
    }
}

// =============================================================================
// Swipe Threshold Bounds
// =============================================================================

/// Minimum swipe travel bounds in logical pixels.
pub mod swipe_bounds {
    /// Smallest accepted threshold.
    pub const MIN: f32 = 1.0;
    /// Largest accepted threshold.
    pub const MAX: f32 = 500.0;
    /// Default threshold.
    pub const DEFAULT: f32 = 10.0;
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Minimum finger travel before a touch is recognized as a swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping to the valid range.
    ///
    /// NaN falls back to the default.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        if pixels.is_nan() {
            return Self::default();
        }
        Self(pixels.clamp(swipe_bounds::MIN, swipe_bounds::MAX))
    }

    /// Returns the threshold in logical pixels.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(swipe_bounds::DEFAULT)
    }
}
