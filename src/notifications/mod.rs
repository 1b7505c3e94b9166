// SPDX-License-Identifier: MPL-2.0
//! User-facing notices raised by the browser.
//!
//! The browser never renders toasts itself. It queues [`Notification`]s in a
//! [`Manager`] and the host decides how to show them, resolving each message
//! key through [`crate::i18n`].
//!
//! - [`notification`] - `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//!
//! # Usage
//!
//! ```ignore
//! use image_browser::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::warning("notification-empty-gallery"));
//! for notice in manager.visible() {
//!     println!("{}", i18n.tr(notice.message_key()));
//! }
//! ```
//!
//! Warnings stay about 5s, info notices about 3s, errors until dismissed.
//! At most 3 notices are visible; the rest wait in a queue.

mod manager;
mod notification;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
