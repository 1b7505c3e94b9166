// SPDX-License-Identifier: MPL-2.0
//! Navigation sub-component: the current selection and circular stepping.
//!
//! The selection is the only stored position. The 1-based index shown to
//! users is always derived from it, so the displayed number can never drift
//! from the image actually shown.

use crate::domain::gallery::{Gallery, ImageId};

/// Navigation sub-component state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    selection: ImageId,
}

/// Messages for the navigation sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Step to the following image, wrapping from last to first.
    Next,
    /// Step to the preceding image, wrapping from first to last.
    Previous,
    /// Jump to a specific image (thumbnail click, start-image picker).
    Select(ImageId),
    /// Go back to the first image.
    Reset,
}

/// Effects produced by navigation changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The selection now points at this image.
    Selected(ImageId),
    /// The requested image is not a member of the gallery; selection kept.
    Rejected(ImageId),
}

impl State {
    /// Starts on the first image of the gallery.
    #[must_use]
    pub fn new(gallery: &Gallery) -> Self {
        Self {
            selection: gallery.first(),
        }
    }

    /// Handle a navigation message.
    ///
    /// `next`/`previous` read the current selection, never a separately
    /// tracked counter.
    pub fn handle(&mut self, msg: Message, gallery: &Gallery) -> Effect {
        let target = match msg {
            Message::Next => gallery.next_of(self.selection),
            Message::Previous => gallery.previous_of(self.selection),
            Message::Select(id) => {
                if !gallery.contains(id) {
                    return Effect::Rejected(id);
                }
                id
            }
            Message::Reset => gallery.first(),
        };
        self.selection = target;
        Effect::Selected(target)
    }

    /// The selected image.
    #[must_use]
    pub fn selection(&self) -> ImageId {
        self.selection
    }

    /// 1-based position of the selection, derived on every call.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.selection.ordinal()
    }
}
