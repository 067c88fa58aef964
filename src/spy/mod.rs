//! Scroll-driven UI synchronization.
//!
//! Pure building blocks used by the scroll handler:
//! - [`select_active`]: which section counts as "currently viewed"
//! - [`IdleTimer`]: trailing debounce that hides the header
//! - [`scroll_top_visible`]: threshold rule for the scroll-to-top button
//! - [`SmoothScroll`]: animated scroll towards a target offset

mod smooth;
mod timer;

pub use smooth::SmoothScroll;
pub use timer::IdleTimer;

/// Header hides after this much scroll inactivity.
pub const HEADER_IDLE_MS: u64 = 2000;
/// Scroll-to-top button shows once the offset exceeds this many rows.
pub const SCROLL_TOP_THRESHOLD: usize = 70;
/// Default duration of a smooth scroll.
pub const SMOOTH_SCROLL_MS: u64 = 300;

/// Pick the active section from viewport-relative section tops.
///
/// Returns the first index, in document order, whose top lies in
/// `(-1, viewport_height / 2]`. `None` means no section qualifies and the
/// caller keeps whatever was active before.
pub fn select_active(tops: &[i64], viewport_height: u16) -> Option<usize> {
    let limit = i64::from(viewport_height);
    tops.iter().position(|&top| top > -1 && top * 2 <= limit)
}

/// Whether the scroll-to-top button is shown at `offset`.
pub const fn scroll_top_visible(offset: usize, threshold: usize) -> bool {
    offset > threshold
}
