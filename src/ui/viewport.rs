//! Viewport management for scrolling.
//!
//! The [`Viewport`] tracks which rows of the laid-out page are on screen.
//! Every mutating scroll operation reports whether the offset moved, which
//! is what the app treats as a scroll event.

use std::ops::Range;

/// The visible window over the page, measured in rows.
///
/// # Example
///
/// ```
/// use landing::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(80, 24, 100);
/// assert_eq!(vp.visible_range(), 0..24);
///
/// assert!(vp.scroll_down(10));
/// assert_eq!(vp.visible_range(), 10..34);
/// assert_eq!(vp.relative_top(12), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    offset: usize,
    total_lines: usize,
}

impl Viewport {
    /// Create a viewport at the top of a page with `total_lines` rows.
    pub const fn new(width: u16, height: u16, total_lines: usize) -> Self {
        Self {
            width,
            height,
            offset: 0,
            total_lines,
        }
    }

    /// Rows scrolled past the top of the page.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Rows currently on screen, clamped to the page.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.offset.min(self.total_lines);
        let end = (self.offset + self.height as usize).min(self.total_lines);
        start..end
    }

    /// Position of a page row relative to the top of the viewport.
    ///
    /// Negative when the row has scrolled above the viewport.
    pub fn relative_top(&self, row: usize) -> i64 {
        let row = i64::try_from(row).unwrap_or(i64::MAX);
        let offset = i64::try_from(self.offset).unwrap_or(i64::MAX);
        row - offset
    }

    /// Scroll percentage (0-100).
    pub fn scroll_percent(&self) -> u8 {
        let max_offset = self.max_offset();
        if max_offset == 0 {
            return 100;
        }
        // Percentage value always 0-100
        #[allow(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        {
            ((self.offset as f64 / max_offset as f64) * 100.0).round() as u8
        }
    }

    /// Move to `line`, clamped. Returns true when the offset changed.
    pub fn go_to_line(&mut self, line: usize) -> bool {
        let next = line.min(self.max_offset());
        let moved = next != self.offset;
        self.offset = next;
        moved
    }

    pub fn scroll_up(&mut self, n: usize) -> bool {
        self.go_to_line(self.offset.saturating_sub(n))
    }

    pub fn scroll_down(&mut self, n: usize) -> bool {
        self.go_to_line(self.offset.saturating_add(n))
    }

    pub fn page_up(&mut self) -> bool {
        self.scroll_up(self.height as usize)
    }

    pub fn page_down(&mut self) -> bool {
        self.scroll_down(self.height as usize)
    }

    pub fn half_page_up(&mut self) -> bool {
        self.scroll_up(self.height as usize / 2)
    }

    pub fn half_page_down(&mut self) -> bool {
        self.scroll_down(self.height as usize / 2)
    }

    pub fn go_to_bottom(&mut self) -> bool {
        self.go_to_line(self.max_offset())
    }

    /// Resize the viewport. Returns true when the offset had to be clamped.
    pub fn resize(&mut self, width: u16, height: u16) -> bool {
        self.width = width;
        self.height = height;
        self.go_to_line(self.offset)
    }

    /// Update the page length (after a relayout). Returns true when the
    /// offset had to be clamped.
    pub fn set_total_lines(&mut self, total: usize) -> bool {
        self.total_lines = total;
        self.go_to_line(self.offset)
    }

    /// Largest offset that still fills the viewport.
    pub const fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.height as usize)
    }
}
