// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the browser.
//!
//! Each sub-component has its own State, Message, Effect, and handle() method.
//! The main component.rs orchestrates these sub-components.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── navigation - Selection and circular stepping
//!     ├── panels     - Overlay, layout, compact fullscreen, info/menu panels
//!     └── slideshow  - Auto-advance scheduler with generation-tagged tickets
//! ```

pub mod navigation;
pub mod panels;
pub mod slideshow;
