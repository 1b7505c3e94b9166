// SPDX-License-Identifier: MPL-2.0
//! Panel and mode sub-component.
//!
//! Owns the overlay-open flag, the layout mode, the compact fullscreen flag
//! and the two side panels. The info panel and the slideshow menu are
//! mutually exclusive: every transition that opens one closes the other.

use serde::{Deserialize, Serialize};

/// How the overlay arranges the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// One large image above a thumbnail strip.
    #[default]
    Slides,
    /// Matrix of thumbnails.
    Grid,
}

/// The layer closed by one Escape press, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissed {
    SlideshowMenu,
    Info,
    Fullscreen,
    Overlay,
}

/// Panel sub-component state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct State {
    overlay_open: bool,
    layout: Layout,
    info_open: bool,
    slideshow_menu_open: bool,
    fullscreen: bool,
}

/// Messages for the panel sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Open,
    Close,
    ToggleInfo,
    /// Direct assignment used by vertical swipes.
    SetInfo(bool),
    ToggleSlideshowMenu,
    ToggleFullscreen,
    SetLayout(Layout),
    /// Close the outermost open layer (Escape cascade, minus the slideshow).
    DismissTopmost,
}

/// Effects produced by panel changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The overlay became visible.
    Opened,
    /// The overlay was hidden.
    Closed,
    /// A panel, layout or fullscreen flag changed.
    Changed,
    /// One layer was closed by a dismiss request.
    Dismissed(Dismissed),
}

impl State {
    /// Creates the panel state with the caller's initial layout.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    /// Handle a panel message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Open => {
                if self.overlay_open {
                    Effect::None
                } else {
                    self.overlay_open = true;
                    Effect::Opened
                }
            }
            Message::Close => {
                if self.overlay_open {
                    self.overlay_open = false;
                    Effect::Closed
                } else {
                    Effect::None
                }
            }
            Message::ToggleInfo => {
                self.slideshow_menu_open = false;
                self.info_open = !self.info_open;
                Effect::Changed
            }
            Message::SetInfo(open) => {
                if open {
                    self.slideshow_menu_open = false;
                }
                self.info_open = open;
                Effect::Changed
            }
            Message::ToggleSlideshowMenu => {
                self.info_open = false;
                self.slideshow_menu_open = !self.slideshow_menu_open;
                Effect::Changed
            }
            Message::ToggleFullscreen => {
                self.fullscreen = !self.fullscreen;
                Effect::Changed
            }
            Message::SetLayout(layout) => {
                self.layout = layout;
                Effect::Changed
            }
            Message::DismissTopmost => self.dismiss_topmost(),
        }
    }

    fn dismiss_topmost(&mut self) -> Effect {
        if !self.overlay_open {
            return Effect::None;
        }
        let layer = if self.slideshow_menu_open {
            self.slideshow_menu_open = false;
            Dismissed::SlideshowMenu
        } else if self.info_open {
            self.info_open = false;
            Dismissed::Info
        } else if self.fullscreen {
            self.fullscreen = false;
            Dismissed::Fullscreen
        } else {
            self.overlay_open = false;
            Dismissed::Overlay
        };
        Effect::Dismissed(layer)
    }

    #[must_use]
    pub fn is_overlay_open(&self) -> bool {
        self.overlay_open
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[must_use]
    pub fn is_info_open(&self) -> bool {
        self.info_open
    }

    #[must_use]
    pub fn is_slideshow_menu_open(&self) -> bool {
        self.slideshow_menu_open
    }

    /// Compact fullscreen flag (layout only, not platform fullscreen).
    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_state() -> State {
        let mut state = State::default();
        state.handle(Message::Open);
        state
    }

    #[test]
    fn default_layout_is_slides() {
        assert_eq!(State::default().layout(), Layout::Slides);
        assert_eq!(State::new(Layout::Grid).layout(), Layout::Grid);
    }

    #[test]
    fn open_and_close_report_transitions_once() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::Open), Effect::Opened);
        assert_eq!(state.handle(Message::Open), Effect::None);
        assert_eq!(state.handle(Message::Close), Effect::Closed);
        assert_eq!(state.handle(Message::Close), Effect::None);
    }

    #[test]
    fn info_then_menu_leaves_only_menu_open() {
        let mut state = open_state();
        state.handle(Message::ToggleInfo);
        state.handle(Message::ToggleSlideshowMenu);
        assert!(!state.is_info_open());
        assert!(state.is_slideshow_menu_open());
    }

    #[test]
    fn menu_then_info_leaves_only_info_open() {
        let mut state = open_state();
        state.handle(Message::ToggleSlideshowMenu);
        state.handle(Message::ToggleInfo);
        assert!(state.is_info_open());
        assert!(!state.is_slideshow_menu_open());
    }

    #[test]
    fn panels_are_never_both_open() {
        let messages = [
            Message::ToggleInfo,
            Message::ToggleSlideshowMenu,
            Message::SetInfo(true),
            Message::SetInfo(false),
            Message::ToggleFullscreen,
        ];
        let mut state = open_state();
        for first in messages {
            for second in messages {
                state.handle(first);
                state.handle(second);
                assert!(!(state.is_info_open() && state.is_slideshow_menu_open()));
            }
        }
    }

    #[test]
    fn set_info_true_closes_menu() {
        let mut state = open_state();
        state.handle(Message::ToggleSlideshowMenu);
        state.handle(Message::SetInfo(true));
        assert!(state.is_info_open());
        assert!(!state.is_slideshow_menu_open());
    }

    #[test]
    fn set_info_false_keeps_menu() {
        let mut state = open_state();
        state.handle(Message::ToggleSlideshowMenu);
        state.handle(Message::SetInfo(false));
        assert!(state.is_slideshow_menu_open());
    }

    #[test]
    fn set_layout_does_not_touch_other_flags() {
        let mut state = open_state();
        state.handle(Message::ToggleInfo);
        state.handle(Message::ToggleFullscreen);
        state.handle(Message::SetLayout(Layout::Grid));
        assert_eq!(state.layout(), Layout::Grid);
        assert!(state.is_info_open());
        assert!(state.is_fullscreen());
        assert!(state.is_overlay_open());
    }

    #[test]
    fn dismiss_closes_one_layer_per_call() {
        let mut state = open_state();
        state.handle(Message::ToggleInfo);
        state.handle(Message::ToggleFullscreen);

        assert_eq!(
            state.handle(Message::DismissTopmost),
            Effect::Dismissed(Dismissed::Info)
        );
        assert_eq!(
            state.handle(Message::DismissTopmost),
            Effect::Dismissed(Dismissed::Fullscreen)
        );
        assert_eq!(
            state.handle(Message::DismissTopmost),
            Effect::Dismissed(Dismissed::Overlay)
        );
        assert!(!state.is_overlay_open());
        assert_eq!(state.handle(Message::DismissTopmost), Effect::None);
    }

    #[test]
    fn layout_deserializes_from_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            layout: Layout,
        }
        let parsed: Wrapper = toml::from_str("layout = \"grid\"").expect("valid toml");
        assert_eq!(parsed.layout, Layout::Grid);
    }
}
