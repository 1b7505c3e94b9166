// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the browser.
//!
//! Every user-visible string of the view models goes through Fluent.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings
//! - Translation files embedded at compile time
//! - Runtime language switching
//! - `MISSING: <key>` for keys absent from the active bundle

pub mod fluent;

pub use fluent::I18n;
