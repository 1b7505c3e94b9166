// SPDX-License-Identifier: MPL-2.0
//! Read-only view over the caller's ordered image collection.

use super::Image;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Positional handle of an image inside a [`Gallery`].
///
/// Images carry no identity field, so identity is the position in the
/// caller's sequence. A handle is only meaningful for the gallery that
/// produced it; [`Gallery::contains`] checks membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(usize);

impl ImageId {
    /// Creates a handle for the given 0-based position.
    #[must_use]
    pub fn new(position: usize) -> Self {
        Self(position)
    }

    /// Returns the 0-based position.
    #[must_use]
    pub fn position(self) -> usize {
        self.0
    }

    /// Returns the 1-based position shown to users ("3 of 7").
    #[must_use]
    pub fn ordinal(self) -> usize {
        self.0 + 1
    }
}

/// Ordered, non-empty image collection.
///
/// The images are shared with the caller through an `Arc`, never copied
/// or reordered.
#[derive(Debug, Clone)]
pub struct Gallery {
    images: Arc<[Image]>,
}

impl Gallery {
    /// Wraps the caller's images.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGallery`] when the sequence has no element.
    pub fn new(images: impl Into<Arc<[Image]>>) -> Result<Self> {
        let images = images.into();
        if images.is_empty() {
            return Err(Error::EmptyGallery);
        }
        Ok(Self { images })
    }

    /// Number of images; always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always `false`: construction refuses empty collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Handle of the first image.
    #[must_use]
    pub fn first(&self) -> ImageId {
        ImageId(0)
    }

    /// Handle of the last image.
    #[must_use]
    pub fn last(&self) -> ImageId {
        ImageId(self.images.len() - 1)
    }

    /// Returns the handle for a 0-based position, if in range.
    #[must_use]
    pub fn id_at(&self, position: usize) -> Option<ImageId> {
        (position < self.images.len()).then_some(ImageId(position))
    }

    /// Returns whether the handle designates an image of this gallery.
    #[must_use]
    pub fn contains(&self, id: ImageId) -> bool {
        id.0 < self.images.len()
    }

    /// Looks up an image by handle.
    #[must_use]
    pub fn get(&self, id: ImageId) -> Option<&Image> {
        self.images.get(id.0)
    }

    /// Finds the position of an image by reference.
    ///
    /// Matching is by address, not by value: two equal records at different
    /// positions are different images.
    #[must_use]
    pub fn position_of(&self, image: &Image) -> Option<ImageId> {
        self.images
            .iter()
            .position(|candidate| std::ptr::eq(candidate, image))
            .map(ImageId)
    }

    /// Circular successor: the last image wraps to the first.
    #[must_use]
    pub fn next_of(&self, id: ImageId) -> ImageId {
        ImageId((id.0 + 1) % self.images.len())
    }

    /// Circular predecessor: the first image wraps to the last.
    #[must_use]
    pub fn previous_of(&self, id: ImageId) -> ImageId {
        let len = self.images.len();
        ImageId((id.0 + len - 1) % len)
    }

    /// Iterates over every image with its handle, in caller order.
    pub fn iter(&self) -> impl Iterator<Item = (ImageId, &Image)> {
        self.images
            .iter()
            .enumerate()
            .map(|(position, image)| (ImageId(position), image))
    }

    /// Returns the shared backing slice.
    #[must_use]
    pub fn shared(&self) -> Arc<[Image]> {
        Arc::clone(&self.images)
    }
}
