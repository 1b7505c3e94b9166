// SPDX-License-Identifier: MPL-2.0
//! Terminal host used by the command-line demo.
//!
//! There is no real surface in a terminal: fullscreen and scrolling are
//! logged and tracked, and the slideshow timer runs on Tokio. Input arrives
//! as typed command lines, parsed by [`parse_command`].

use super::tokio_timer::TokioTimer;
use crate::application::port::{
    FullscreenPort, HostError, ScrollOptions, ScrollPort, ScrollTarget, SurfaceId, TimerPort,
    TimerTicket,
};
use crate::browser::input::{InputEvent, Key, TouchPoint};
use crate::browser::{Layout, Message};
use crate::domain::gallery::ImageId;
use std::fmt;
use tokio::sync::mpsc;

/// Distance of a simulated swipe, in logical pixels.
const SWIPE_DISTANCE: f32 = 200.0;

/// Host that prints instead of rendering.
#[derive(Debug)]
pub struct TerminalHost {
    timer: TokioTimer,
    fullscreen: bool,
    locked: Option<SurfaceId>,
    last_revealed: Option<ImageId>,
}

impl TerminalHost {
    /// Creates the host and the receiver fired slideshow tickets arrive on.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerTicket>) {
        let (timer, fired) = TokioTimer::new();
        let host = Self {
            timer,
            fullscreen: false,
            locked: None,
            last_revealed: None,
        };
        (host, fired)
    }

    /// Slideshow tickets the timer still tracks.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timer.pending_count()
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.locked.is_some()
    }

    #[must_use]
    pub fn last_revealed(&self) -> Option<ImageId> {
        self.last_revealed
    }
}

impl FullscreenPort for TerminalHost {
    fn request_fullscreen(&mut self, surface: SurfaceId) -> Result<(), HostError> {
        tracing::info!(surface = surface.raw(), "entering fullscreen");
        self.fullscreen = true;
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<(), HostError> {
        tracing::info!("leaving fullscreen");
        self.fullscreen = false;
        Ok(())
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }
}

impl ScrollPort for TerminalHost {
    fn scroll_into_view(&mut self, target: ScrollTarget, options: ScrollOptions) {
        tracing::debug!(
            strip = ?target.strip,
            image = target.image.ordinal(),
            offset = target.relative_offset(),
            smooth = options.smooth,
            "scrolling into view"
        );
        self.last_revealed = Some(target.image);
    }

    fn lock_background_scroll(&mut self, surface: SurfaceId) {
        tracing::debug!(surface = surface.raw(), "background scroll locked");
        self.locked = Some(surface);
    }

    fn unlock_background_scroll(&mut self, surface: SurfaceId) {
        tracing::debug!(surface = surface.raw(), "background scroll unlocked");
        if self.locked == Some(surface) {
            self.locked = None;
        }
    }
}

impl TimerPort for TerminalHost {
    fn arm(&mut self, ticket: TimerTicket) {
        self.timer.arm(ticket);
    }

    fn cancel(&mut self, ticket: TimerTicket) {
        self.timer.cancel(ticket);
    }

    fn delivered(&mut self, ticket: TimerTicket) {
        self.timer.delivered(ticket);
    }
}

// =============================================================================
// Commands
// =============================================================================

/// One parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Raw input, fed through the dispatcher.
    Input(Vec<InputEvent>),
    /// A message sent straight to the browser.
    Send(Message),
    Show,
    Help,
    Quit,
}

/// Why a command line was not understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    MissingArgument(&'static str),
    InvalidArgument(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unknown(cmd) => write!(f, "unknown command '{cmd}', try 'help'"),
            CommandError::MissingArgument(what) => write!(f, "missing {what}"),
            CommandError::InvalidArgument(arg) => write!(f, "invalid argument '{arg}'"),
        }
    }
}

impl std::error::Error for CommandError {}

/// Help text listing every command.
pub const HELP: &str = "\
open [n]          open the overlay, optionally on image n
close             close the overlay
next | prev       navigate
go <n>            select image n
info | menu       toggle the info panel or slideshow menu
grid | slides     switch layout
compact           toggle compact fullscreen
fullscreen        toggle platform fullscreen
play [n]          start the slideshow, optionally from image n
pause | resume | toggle | stop
interval <secs>   slideshow interval (1-10)
key <name>        press a key (ArrowLeft, Escape, i, p, ...)
wheel <dy>        scroll the wheel, positive is down
swipe <dir>       swipe left, right, up or down
esc               same as 'key Escape'
show              print the current view
help | quit";

/// Parses one line typed by the user. Blank lines are `Ok(None)`.
///
/// # Errors
///
/// Returns a [`CommandError`] for unknown commands and bad arguments.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();

    let command = match head.to_ascii_lowercase().as_str() {
        "open" => match arg {
            Some(n) => Command::Send(Message::OpenAt(image_id(n)?)),
            None => Command::Input(vec![InputEvent::TriggerPressed]),
        },
        "close" => Command::Send(Message::CloseOverlay),
        "next" | "n" => Command::Input(vec![InputEvent::KeyPressed(Key::ArrowRight)]),
        "prev" | "previous" => Command::Input(vec![InputEvent::KeyPressed(Key::ArrowLeft)]),
        "go" => Command::Send(Message::Select(image_id(
            arg.ok_or(CommandError::MissingArgument("image number"))?,
        )?)),
        "info" => Command::Send(Message::ToggleInfo),
        "menu" => Command::Send(Message::ToggleSlideshowMenu),
        "grid" => Command::Send(Message::SetLayout(Layout::Grid)),
        "slides" => Command::Send(Message::SetLayout(Layout::Slides)),
        "compact" => Command::Send(Message::ToggleFullscreen),
        "fullscreen" => Command::Send(Message::TogglePlatformFullscreen),
        "play" => Command::Send(Message::StartSlideshow {
            from: arg.map(image_id).transpose()?,
        }),
        "pause" => Command::Send(Message::PauseSlideshow),
        "resume" => Command::Send(Message::ResumeSlideshow),
        "toggle" => Command::Input(vec![InputEvent::KeyPressed(Key::Space)]),
        "stop" => Command::Send(Message::StopSlideshow),
        "interval" => {
            let raw = arg.ok_or(CommandError::MissingArgument("seconds"))?;
            let secs = raw
                .parse::<u32>()
                .map_err(|_| CommandError::InvalidArgument(raw.to_string()))?;
            Command::Send(Message::SetInterval(secs))
        }
        "key" => {
            let raw = arg.ok_or(CommandError::MissingArgument("key name"))?;
            let key =
                Key::from_name(raw).ok_or_else(|| CommandError::InvalidArgument(raw.to_string()))?;
            Command::Input(vec![InputEvent::KeyPressed(key)])
        }
        "esc" | "escape" => Command::Input(vec![InputEvent::KeyPressed(Key::Escape)]),
        "wheel" => {
            let raw = arg.ok_or(CommandError::MissingArgument("delta"))?;
            let delta_y = raw
                .parse::<f32>()
                .map_err(|_| CommandError::InvalidArgument(raw.to_string()))?;
            Command::Input(vec![InputEvent::Wheel { delta_y }])
        }
        "swipe" => {
            let raw = arg.ok_or(CommandError::MissingArgument("direction"))?;
            Command::Input(swipe(raw)?)
        }
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

/// One-based image number to id.
fn image_id(raw: &str) -> Result<ImageId, CommandError> {
    raw.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .map(ImageId::new)
        .ok_or_else(|| CommandError::InvalidArgument(raw.to_string()))
}

fn swipe(direction: &str) -> Result<Vec<InputEvent>, CommandError> {
    let (dx, dy) = match direction {
        "left" => (-SWIPE_DISTANCE, 0.0),
        "right" => (SWIPE_DISTANCE, 0.0),
        "up" => (0.0, -SWIPE_DISTANCE),
        "down" => (0.0, SWIPE_DISTANCE),
        other => return Err(CommandError::InvalidArgument(other.to_string())),
    };
    let origin = TouchPoint::new(SWIPE_DISTANCE, SWIPE_DISTANCE);
    Ok(vec![
        InputEvent::TouchStart(origin),
        InputEvent::TouchEnd(TouchPoint::new(origin.x + dx, origin.y + dy)),
    ])
}
