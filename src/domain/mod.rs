// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`gallery`]: The caller's image collection ([`Image`](gallery::Image),
//!   [`Gallery`](gallery::Gallery), [`ImageId`](gallery::ImageId))
//! - [`ui`]: UI value objects ([`SlideshowInterval`](ui::newtypes::SlideshowInterval),
//!   [`SwipeThreshold`](ui::newtypes::SwipeThreshold))

pub mod gallery;
pub mod ui;
