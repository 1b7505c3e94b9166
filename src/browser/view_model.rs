// SPDX-License-Identifier: MPL-2.0
//! Read-only snapshots for renderers.
//!
//! Renderers never read the component state directly. They ask for one of
//! these models, already localized, and turn it into widgets, markup or
//! terminal text.

use super::component::State;
use crate::domain::gallery::{Image, ImageId};
use crate::domain::ui::newtypes::interval_bounds;
use crate::i18n::I18n;

/// Caption under the main image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    /// "3 of 7".
    pub position: String,
    pub title: String,
    pub author: String,
}

/// Entries of the optional action row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Like,
    Share,
    Comment,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Like, Action::Share, Action::Comment];

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Action::Like => "action-like",
            Action::Share => "action-share",
            Action::Comment => "action-comment",
        }
    }
}

/// Metadata panel content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoPanel {
    pub title: String,
    pub author: String,
    pub description: String,
    pub date: String,
    pub location: String,
    /// Localized labels, empty unless the action row is enabled.
    pub actions: Vec<(Action, String)>,
}

/// One entry of the start-image picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartOption {
    pub image: ImageId,
    /// "2. Harbour".
    pub label: String,
}

/// Slideshow setup menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideshowMenu {
    pub title: String,
    pub interval_label: String,
    pub interval: u32,
    pub min_interval: u32,
    pub max_interval: u32,
    pub options: Vec<StartOption>,
    /// The current image.
    pub preselected: Option<ImageId>,
    pub start_label: String,
}

/// Control bar shown while the slideshow is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideshowBar {
    pub title: String,
    pub paused: bool,
    /// "Pause" or "Resume".
    pub toggle_label: String,
    pub stop_label: String,
    pub fullscreen_label: String,
}

/// What the page shows before the overlay opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    Button(String),
    /// Every image, clickable to open the overlay on it.
    InlineGrid(Vec<ImageId>),
}

fn or_unknown(value: Option<&str>, i18n: &I18n) -> String {
    value.map_or_else(|| i18n.tr("unknown-value"), str::to_string)
}

fn or_key(value: Option<&str>, key: &str, i18n: &I18n) -> String {
    value.map_or_else(|| i18n.tr(key), str::to_string)
}

fn title_of(image: &Image, i18n: &I18n) -> String {
    or_unknown(image.title.as_deref(), i18n)
}

/// Footer for the selected image.
#[must_use]
pub fn footer(state: &State, i18n: &I18n) -> Option<Footer> {
    let gallery = state.gallery()?;
    let image = state.selected_image()?;
    let index = state.current_index()?.to_string();
    let total = gallery.len().to_string();
    Some(Footer {
        position: i18n.tr_with_args(
            "footer-position",
            &[("index", index.as_str()), ("total", total.as_str())],
        ),
        title: title_of(image, i18n),
        author: or_unknown(image.author.as_deref(), i18n),
    })
}

/// Info panel, while it is open.
#[must_use]
pub fn info_panel(state: &State, show_actions: bool, i18n: &I18n) -> Option<InfoPanel> {
    if !state.is_overlay_open() || !state.is_info_open() {
        return None;
    }
    let image = state.selected_image()?;
    let actions = if show_actions {
        Action::ALL
            .iter()
            .map(|action| (*action, i18n.tr(action.label_key())))
            .collect()
    } else {
        Vec::new()
    };
    Some(InfoPanel {
        title: title_of(image, i18n),
        author: or_unknown(image.author.as_deref(), i18n),
        description: or_key(image.description.as_deref(), "info-no-description", i18n),
        date: or_key(image.date.as_deref(), "info-no-date", i18n),
        location: or_key(image.location.as_deref(), "info-no-location", i18n),
        actions,
    })
}

/// Slideshow setup menu, while it is open.
#[must_use]
pub fn slideshow_menu(state: &State, i18n: &I18n) -> Option<SlideshowMenu> {
    if !state.is_overlay_open() || !state.is_slideshow_menu_open() {
        return None;
    }
    let gallery = state.gallery()?;
    let interval = state.interval().value();
    let options = gallery
        .iter()
        .map(|(id, image)| {
            let number = id.ordinal().to_string();
            let title = title_of(image, i18n);
            StartOption {
                image: id,
                label: i18n.tr_with_args(
                    "slideshow-start-option",
                    &[("number", number.as_str()), ("title", title.as_str())],
                ),
            }
        })
        .collect();
    let seconds = interval.to_string();
    Some(SlideshowMenu {
        title: i18n.tr("slideshow-menu-title"),
        interval_label: i18n
            .tr_with_args("slideshow-interval", &[("seconds", seconds.as_str())]),
        interval,
        min_interval: interval_bounds::MIN,
        max_interval: interval_bounds::MAX,
        options,
        preselected: state.selection(),
        start_label: i18n.tr("slideshow-start"),
    })
}

/// Slideshow control bar, while the slideshow is active.
#[must_use]
pub fn slideshow_bar(state: &State, i18n: &I18n) -> Option<SlideshowBar> {
    let view = state.view_state();
    if !view.slideshow_active {
        return None;
    }
    let toggle_key = if view.slideshow_paused {
        "slideshow-resume"
    } else {
        "slideshow-pause"
    };
    Some(SlideshowBar {
        title: i18n.tr("slideshow-menu-title"),
        paused: view.slideshow_paused,
        toggle_label: i18n.tr(toggle_key),
        stop_label: i18n.tr("slideshow-stop"),
        fullscreen_label: i18n.tr("platform-fullscreen"),
    })
}

/// Trigger affordance.
///
/// A label gives a button; without one the inline grid is shown, and an
/// empty gallery shows nothing at all.
#[must_use]
pub fn trigger(state: &State, label: Option<&str>) -> Option<Trigger> {
    if let Some(label) = label {
        return Some(Trigger::Button(label.to_string()));
    }
    let gallery = state.gallery()?;
    Some(Trigger::InlineGrid(gallery.iter().map(|(id, _)| id).collect()))
}
