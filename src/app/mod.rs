//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use input::{handle_event, handle_key, handle_mouse};
pub use model::{FrameKey, Model, ToastLevel};
pub use update::{Message, NavHit, update};

use std::path::PathBuf;

use crate::spy::{HEADER_IDLE_MS, SCROLL_TOP_THRESHOLD, SMOOTH_SCROLL_MS};

/// Sections shown when no file is given.
pub const DEFAULT_DEMO_SECTIONS: usize = 4;

/// Where the page comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    /// A markdown file
    File(PathBuf),
    /// The built-in demo page with this many sections
    Demo(usize),
}

impl PageSource {
    /// Name shown in the status bar.
    pub fn display_name(&self) -> String {
        match self {
            Self::File(path) => path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().to_string()),
            Self::Demo(_) => "demo".to_string(),
        }
    }
}

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    source: PageSource,
    idle_ms: u64,
    scroll_top_threshold: usize,
    smooth_ms: u64,
}

impl App {
    /// Create a new application for the given page source.
    pub const fn new(source: PageSource) -> Self {
        Self {
            source,
            idle_ms: HEADER_IDLE_MS,
            scroll_top_threshold: SCROLL_TOP_THRESHOLD,
            smooth_ms: SMOOTH_SCROLL_MS,
        }
    }

    /// Delay before the header hides after scrolling stops.
    pub const fn with_idle_ms(mut self, idle_ms: u64) -> Self {
        self.idle_ms = idle_ms;
        self
    }

    /// Offset above which the scroll-to-top button shows.
    pub const fn with_scroll_top_threshold(mut self, threshold: usize) -> Self {
        self.scroll_top_threshold = threshold;
        self
    }

    /// Smooth scroll duration; zero disables the animation.
    pub const fn with_smooth_ms(mut self, smooth_ms: u64) -> Self {
        self.smooth_ms = smooth_ms;
        self
    }

    pub const fn source(&self) -> &PageSource {
        &self.source
    }
}

#[cfg(test)]
mod tests;
