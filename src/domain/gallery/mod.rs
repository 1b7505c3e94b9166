// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! The gallery is the caller's ordered image collection. It is referenced,
//! never copied or reordered, and answers position and neighbor queries
//! with circular wraparound.

#[allow(clippy::module_inception)]
mod gallery;
mod image;

pub use gallery::{Gallery, ImageId};
pub use image::Image;
