// SPDX-License-Identifier: MPL-2.0
//! Input dispatcher: turns raw keyboard, wheel, touch and pointer events into
//! browser [`Message`]s.
//!
//! The dispatcher only translates. It never looks at the view state; the one
//! thing it knows is whether the overlay surface currently listens, which the
//! browser switches on when the overlay opens and off when it closes.

use super::component::Message;
use crate::domain::gallery::ImageId;
use crate::domain::ui::SwipeThreshold;
use serde::{Deserialize, Serialize};

/// Keys the overlay reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Enter,
    Space,
    Character(char),
}

impl Key {
    /// Parses a key name such as `"ArrowLeft"`, `"Escape"`, `" "` or `"i"`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "Left" => Some(Key::ArrowLeft),
            "ArrowRight" | "Right" => Some(Key::ArrowRight),
            "Escape" | "Esc" => Some(Key::Escape),
            "Enter" => Some(Key::Enter),
            " " | "Space" | "Spacebar" => Some(Key::Space),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Key::Character(c)),
                    _ => None,
                }
            }
        }
    }
}

/// A touch position in logical pixels, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Raw input the host forwards to a browser instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyPressed(Key),
    /// Wheel over the main image or a thumbnail strip. Positive is downwards.
    Wheel { delta_y: f32 },
    TouchStart(TouchPoint),
    TouchEnd(TouchPoint),
    TouchCancel,
    /// Double-click on the main image or a grid thumbnail.
    DoubleClick,
    /// Click on a thumbnail, in the overlay or in the inline grid.
    ThumbnailClicked(ImageId),
    /// The trigger button was pressed.
    TriggerPressed,
}

/// What a swipe in one direction does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SwipeAction {
    Next,
    Previous,
    OpenInfo,
    CloseInfo,
    None,
}

impl SwipeAction {
    fn message(self) -> Option<Message> {
        match self {
            SwipeAction::Next => Some(Message::Next),
            SwipeAction::Previous => Some(Message::Previous),
            SwipeAction::OpenInfo => Some(Message::SetInfo(true)),
            SwipeAction::CloseInfo => Some(Message::SetInfo(false)),
            SwipeAction::None => None,
        }
    }
}

/// Direction of a recognised swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Action bound to each swipe direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeBindings {
    pub left: SwipeAction,
    pub right: SwipeAction,
    pub up: SwipeAction,
    pub down: SwipeAction,
}

impl Default for SwipeBindings {
    fn default() -> Self {
        Self {
            left: SwipeAction::Next,
            right: SwipeAction::Previous,
            up: SwipeAction::OpenInfo,
            down: SwipeAction::CloseInfo,
        }
    }
}

impl SwipeBindings {
    #[must_use]
    pub fn action(&self, direction: SwipeDirection) -> SwipeAction {
        match direction {
            SwipeDirection::Left => self.left,
            SwipeDirection::Right => self.right,
            SwipeDirection::Up => self.up,
            SwipeDirection::Down => self.down,
        }
    }
}

/// Swipe recognition settings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureOptions {
    /// Minimum travel along the dominant axis.
    pub threshold: SwipeThreshold,
    pub bindings: SwipeBindings,
}

/// Classifies a finished touch as a swipe, or `None` when it moved too little.
#[must_use]
pub fn classify_swipe(
    start: TouchPoint,
    end: TouchPoint,
    threshold: SwipeThreshold,
) -> Option<SwipeDirection> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    if !dx.is_finite() || !dy.is_finite() {
        return None;
    }
    if dx.abs().max(dy.abs()) < threshold.value() {
        return None;
    }
    let direction = if dx.abs() >= dy.abs() {
        if dx < 0.0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        }
    } else if dy < 0.0 {
        SwipeDirection::Up
    } else {
        SwipeDirection::Down
    };
    Some(direction)
}

/// Per-instance input dispatcher.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    overlay_active: bool,
    gestures: GestureOptions,
    touch_origin: Option<TouchPoint>,
}

impl Dispatcher {
    #[must_use]
    pub fn new(gestures: GestureOptions) -> Self {
        Self {
            gestures,
            ..Self::default()
        }
    }

    /// Attaches or detaches the overlay listeners.
    ///
    /// Detaching also forgets a touch in progress, so a gesture started
    /// before the overlay closed can never complete afterwards.
    pub fn set_overlay_active(&mut self, active: bool) {
        if self.overlay_active != active {
            tracing::debug!(active, "overlay input listeners");
        }
        self.overlay_active = active;
        if !active {
            self.touch_origin = None;
        }
    }

    #[must_use]
    pub fn is_overlay_active(&self) -> bool {
        self.overlay_active
    }

    #[must_use]
    pub fn gestures(&self) -> &GestureOptions {
        &self.gestures
    }

    /// Translates one event into at most one browser message.
    pub fn dispatch(&mut self, event: InputEvent) -> Option<Message> {
        match event {
            InputEvent::TriggerPressed => Some(Message::OpenOverlay),
            InputEvent::ThumbnailClicked(id) => Some(if self.overlay_active {
                Message::Select(id)
            } else {
                Message::OpenAt(id)
            }),
            _ if !self.overlay_active => None,
            InputEvent::KeyPressed(key) => Self::key_message(key),
            InputEvent::Wheel { delta_y } => {
                if delta_y > 0.0 {
                    Some(Message::Next)
                } else if delta_y < 0.0 {
                    Some(Message::Previous)
                } else {
                    None
                }
            }
            InputEvent::TouchStart(point) => {
                self.touch_origin = Some(point);
                None
            }
            InputEvent::TouchEnd(point) => {
                let origin = self.touch_origin.take()?;
                let direction = classify_swipe(origin, point, self.gestures.threshold)?;
                self.gestures.bindings.action(direction).message()
            }
            InputEvent::TouchCancel => {
                self.touch_origin = None;
                None
            }
            InputEvent::DoubleClick => Some(Message::ToggleFullscreen),
        }
    }

    fn key_message(key: Key) -> Option<Message> {
        match key {
            Key::ArrowRight => Some(Message::Next),
            Key::ArrowLeft => Some(Message::Previous),
            Key::Escape => Some(Message::Dismiss),
            Key::Enter => Some(Message::ToggleFullscreen),
            Key::Space => Some(Message::TogglePause),
            Key::Character('i') => Some(Message::ToggleInfo),
            Key::Character('p') => Some(Message::ToggleSlideshowMenu),
            Key::Character(_) => None,
        }
    }
}
