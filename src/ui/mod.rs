//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`viewport`]: Scroll position and visible range management
//! - [`style`]: Colors for sections, the header and the nav bar
//! - Hit-test helpers shared by rendering and mouse input

pub mod style;
pub mod viewport;

mod render;
mod status;

pub use render::{
    nav_anchor_at, nav_anchor_ranges, page_area, page_content_width, render,
    scroll_top_button_rect,
};

/// Columns left of the text: active-section marker plus a space.
pub const DOCUMENT_LEFT_PADDING: u16 = 2;
/// Label of the scroll-to-top control.
pub const SCROLL_TOP_LABEL: &str = "[ ▲ Top ]";
