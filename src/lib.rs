// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. nav::NavBar)
    clippy::module_name_repetitions
)]

//! # Landing
//!
//! A single-page landing document in the terminal with a scroll-spy
//! navigation header.
//!
//! Landing renders a page of titled sections with:
//! - A header bar of links, one per section, that follows the reading position
//! - Smooth scrolling to a section when its link is clicked
//! - A header that hides itself once scrolling has been idle for a while
//! - A scroll-to-top button past a scroll threshold
//! - Collapsible sections with hover hints
//!
//! ## Architecture
//!
//! Landing uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`page`]: Page content, markdown loading and layout
//! - [`nav`]: Navigation bar items and highlight
//! - [`spy`]: Active-section selection and scroll timers
//! - [`ui`]: Terminal UI components
//! - [`config`]: Flag files and CLI merging

pub mod app;
pub mod config;
pub mod nav;
pub mod page;
pub mod spy;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::nav::NavBar;
    pub use crate::page::Page;
    pub use crate::ui::viewport::Viewport;
}
