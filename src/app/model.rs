use crate::nav::NavBar;
use crate::page::{CollapseState, Page, PageError};
use crate::spy::{
    HEADER_IDLE_MS, IdleTimer, SCROLL_TOP_THRESHOLD, SMOOTH_SCROLL_MS, SmoothScroll,
    scroll_top_visible, select_active,
};
use crate::ui::viewport::Viewport;

/// How long a toast stays on screen.
const TOAST_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at_ms: u64,
}

/// Everything the renderer needs to decide whether a redraw is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameKey {
    offset: usize,
    active_section: Option<usize>,
    header_visible: bool,
    scroll_top_visible: bool,
    toast_visible: bool,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state. The header idle
/// timer and any in-flight smooth scroll are owned fields driven by
/// [`Message::Tick`](super::Message::Tick).
#[derive(Debug)]
pub struct Model {
    /// The laid-out page
    pub page: Page,
    /// Navigation bar built from the page sections
    pub nav: NavBar,
    /// Viewport managing scroll position
    pub viewport: Viewport,
    /// Section currently designated as viewed
    pub active_section: Option<usize>,
    /// Whether the header overlay (and its nav bar) is shown
    pub header_visible: bool,
    /// Whether the scroll-to-top button is shown
    pub scroll_top_visible: bool,
    /// Nav entry selected with the keyboard
    pub nav_focus: Option<usize>,
    /// Section header under the mouse pointer
    pub hovered_section: Option<usize>,
    /// Name shown in the status bar
    pub source_name: String,
    /// Whether the app should quit
    pub should_quit: bool,
    scroll_top_threshold: usize,
    smooth_ms: u64,
    header_timer: IdleTimer,
    smooth: Option<SmoothScroll>,
    toast: Option<Toast>,
    now_ms: u64,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Page::default(), (80, 24))
    }
}

impl Model {
    /// Lay out `page`, build the nav bar and mark the first section active.
    pub fn new(mut page: Page, terminal_size: (u16, u16)) -> Self {
        page.layout(crate::ui::page_content_width(terminal_size.0));
        let viewport = Viewport::new(
            terminal_size.0,
            terminal_size.1.saturating_sub(1),
            page.line_count(),
        );
        let mut nav = NavBar::new();
        nav.append_sections(page.sections());

        let active_section = page.sections().first().map(|_| 0);
        if let Some(first) = page.sections().first() {
            nav.highlight(&first.id);
        }

        Self {
            page,
            nav,
            viewport,
            active_section,
            header_visible: true,
            scroll_top_visible: false,
            nav_focus: None,
            hovered_section: None,
            source_name: "untitled".to_string(),
            should_quit: false,
            scroll_top_threshold: SCROLL_TOP_THRESHOLD,
            smooth_ms: SMOOTH_SCROLL_MS,
            header_timer: IdleTimer::new(HEADER_IDLE_MS),
            smooth: None,
            toast: None,
            now_ms: 0,
        }
    }

    #[must_use]
    pub const fn with_idle_ms(mut self, idle_ms: u64) -> Self {
        self.header_timer = IdleTimer::new(idle_ms);
        self
    }

    #[must_use]
    pub const fn with_scroll_top_threshold(mut self, threshold: usize) -> Self {
        self.scroll_top_threshold = threshold;
        self
    }

    /// Duration of animated scrolls; zero jumps immediately.
    #[must_use]
    pub const fn with_smooth_ms(mut self, smooth_ms: u64) -> Self {
        self.smooth_ms = smooth_ms;
        self
    }

    #[must_use]
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self
    }

    pub const fn header_timer(&self) -> &IdleTimer {
        &self.header_timer
    }

    pub const fn smooth_scroll(&self) -> Option<&SmoothScroll> {
        self.smooth.as_ref()
    }

    pub const fn is_animating(&self) -> bool {
        self.smooth.is_some()
    }

    pub const fn frame_key(&self) -> FrameKey {
        FrameKey {
            offset: self.viewport.offset(),
            active_section: self.active_section,
            header_visible: self.header_visible,
            scroll_top_visible: self.scroll_top_visible,
            toast_visible: self.toast.is_some(),
        }
    }

    /// How long the event loop may sleep before a timer needs servicing.
    pub fn next_wakeup_ms(&self) -> Option<u64> {
        let toast = self
            .toast
            .as_ref()
            .map(|t| t.expires_at_ms.saturating_sub(self.now_ms));
        match (self.header_timer.remaining_ms(self.now_ms), toast) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    // Scroll reactions

    /// Run the per-scroll reactions in order: highlight, header, button.
    pub(super) fn on_scroll(&mut self) {
        self.highlight_current_section();
        self.control_header_visibility();
        self.control_scroll_top_button();
    }

    fn highlight_current_section(&mut self) {
        // Read every position first, then write.
        let tops: Vec<i64> = self
            .page
            .section_tops()
            .iter()
            .map(|&row| self.viewport.relative_top(row))
            .collect();
        let Some(idx) = select_active(&tops, self.viewport.height()) else {
            return;
        };
        if self.active_section != Some(idx) {
            tracing::debug!(
                from = ?self.active_section,
                to = idx,
                offset = self.viewport.offset(),
                "active section changed"
            );
        }
        self.active_section = Some(idx);
        if let Some(section) = self.page.section(idx) {
            self.nav.highlight(&section.id);
        }
    }

    fn control_header_visibility(&mut self) {
        self.header_visible = true;
        self.header_timer.rearm(self.now_ms);
    }

    fn control_scroll_top_button(&mut self) {
        self.scroll_top_visible =
            scroll_top_visible(self.viewport.offset(), self.scroll_top_threshold);
    }

    // Scrolling

    /// Apply a user scroll; cancels any animation in flight.
    pub(super) fn user_scroll(&mut self, op: impl FnOnce(&mut Viewport) -> bool) {
        self.smooth = None;
        if op(&mut self.viewport) {
            self.on_scroll();
        }
    }

    /// Scroll to `target` rows from the top, animated unless smooth
    /// scrolling is disabled.
    pub(super) fn start_smooth_scroll(&mut self, target: usize) {
        if self.smooth_ms == 0 {
            self.smooth = None;
            if self.viewport.go_to_line(target) {
                self.on_scroll();
            }
            return;
        }
        tracing::debug!(
            from = self.viewport.offset(),
            to = target,
            duration_ms = self.smooth_ms,
            "smooth scroll started"
        );
        self.smooth = Some(SmoothScroll::new(
            self.viewport.offset(),
            target,
            self.now_ms,
            self.smooth_ms,
        ));
    }

    /// Scroll to the section a nav entry links to.
    pub(super) fn scroll_to_nav_item(&mut self, idx: usize) {
        let Some(item) = self.nav.item(idx) else {
            return;
        };
        match self.page.resolve_anchor(&item.href) {
            Ok(section) => self.scroll_to_section(section),
            Err(err) => self.report_missing_target(&err),
        }
    }

    pub(super) fn scroll_to_section(&mut self, idx: usize) {
        match self.page.section_top(idx) {
            Some(top) => self.start_smooth_scroll(top),
            None => self.show_toast(
                ToastLevel::Warning,
                format!("No section {} on this page", idx + 1),
            ),
        }
    }

    fn report_missing_target(&mut self, err: &PageError) {
        tracing::warn!(%err, "nav target not found");
        self.show_toast(ToastLevel::Error, err.to_string());
    }

    /// Advance the clock: step the animation, then fire the idle timer.
    pub(super) fn tick(&mut self, now_ms: u64) {
        self.now_ms = now_ms;

        if let Some(anim) = self.smooth {
            let moved = self.viewport.go_to_line(anim.position_at(now_ms));
            if anim.is_finished(now_ms) {
                self.smooth = None;
            }
            if moved {
                self.on_scroll();
            }
        }

        if self.header_timer.take_expired(now_ms) {
            tracing::debug!(now_ms, "header hidden after idle");
            self.header_visible = false;
        }

        self.expire_toast();
    }

    // Sections

    pub(super) fn toggle_section(&mut self, idx: usize) {
        let Some(state) = self.page.toggle_collapse(idx) else {
            return;
        };
        tracing::debug!(section = idx, collapsed = state == CollapseState::Collapsed, "section toggled");
        if self.viewport.set_total_lines(self.page.line_count()) {
            self.on_scroll();
        }
    }

    pub(super) fn resize(&mut self, width: u16, height: u16) {
        self.page.layout(crate::ui::page_content_width(width));
        let resized = self.viewport.resize(width, height.saturating_sub(1));
        let clamped = self.viewport.set_total_lines(self.page.line_count());
        if resized || clamped {
            self.on_scroll();
        }
    }

    // Keyboard nav focus

    pub(super) fn focus_nav(&mut self, forward: bool) {
        let len = self.nav.len();
        if len == 0 {
            return;
        }
        self.nav_focus = Some(match (self.nav_focus, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        });
        self.header_visible = true;
        self.header_timer.rearm(self.now_ms);
    }

    // Toasts

    pub fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at_ms: self.now_ms.saturating_add(TOAST_MS),
        });
    }

    /// Nav entry the header must keep on screen: the focused one, else the
    /// active one.
    pub fn pinned_nav_item(&self) -> Option<usize> {
        self.nav_focus.or_else(|| self.nav.active())
    }

    /// Tell the user when there is nothing to navigate.
    pub fn show_startup_hint(&mut self) {
        if self.page.sections().is_empty() {
            self.show_toast(ToastLevel::Info, "No sections to navigate");
        }
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }

    fn expire_toast(&mut self) {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| self.now_ms >= toast.expires_at_ms)
        {
            self.toast = None;
        }
    }

    /// Tooltip of the hovered section header, if it has one.
    pub fn hovered_tooltip(&self) -> Option<&str> {
        self.hovered_section
            .and_then(|idx| self.page.section(idx))
            .and_then(|section| section.title.as_deref())
    }
}
