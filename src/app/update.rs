use crate::app::Model;
use crate::ui::viewport::Viewport;

/// Where a click on the nav bar landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavHit {
    /// On the link of the nav entry with this index
    Anchor(usize),
    /// On the bar itself, between or after links
    Container,
}

/// All possible events and actions in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Scrolling
    /// Scroll up by n rows
    ScrollUp(usize),
    /// Scroll down by n rows
    ScrollDown(usize),
    PageUp,
    PageDown,
    HalfPageUp,
    HalfPageDown,
    /// Jump to the end of the page
    GoToBottom,
    /// Smooth scroll to offset 0
    ScrollToTop,

    // Navigation
    /// Click on the nav bar
    NavClick(NavHit),
    /// Smooth scroll to the section with this index
    ScrollToSection(usize),
    /// Move keyboard focus to the next nav entry
    FocusNextNav,
    /// Move keyboard focus to the previous nav entry
    FocusPrevNav,
    /// Follow the focused nav entry
    ActivateFocusedNav,

    // Sections
    /// Collapse or expand the section with this index
    ToggleSection(usize),
    /// Collapse or expand the active section
    ToggleActiveSection,
    /// Pointer moved over a section header (or off all of them)
    HoverSection(Option<usize>),

    // Time and window
    /// Clock advanced to this many ms since start
    Tick(u64),
    /// Terminal resized
    Resize(u16, u16),

    // Application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// Any message that moves the viewport runs the scroll reactions
/// (highlight, header idle-hide, scroll-top button) before returning.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::ScrollUp(n) => model.user_scroll(|vp| vp.scroll_up(n)),
        Message::ScrollDown(n) => model.user_scroll(|vp| vp.scroll_down(n)),
        Message::PageUp => model.user_scroll(Viewport::page_up),
        Message::PageDown => model.user_scroll(Viewport::page_down),
        Message::HalfPageUp => model.user_scroll(Viewport::half_page_up),
        Message::HalfPageDown => model.user_scroll(Viewport::half_page_down),
        Message::GoToBottom => model.user_scroll(Viewport::go_to_bottom),
        Message::ScrollToTop => model.start_smooth_scroll(0),

        Message::NavClick(NavHit::Anchor(idx)) => model.scroll_to_nav_item(idx),
        // Only clicks on a link navigate.
        Message::NavClick(NavHit::Container) => {}
        Message::ScrollToSection(idx) => model.scroll_to_section(idx),
        Message::FocusNextNav => model.focus_nav(true),
        Message::FocusPrevNav => model.focus_nav(false),
        Message::ActivateFocusedNav => {
            if let Some(idx) = model.nav_focus {
                model.scroll_to_nav_item(idx);
            }
        }

        Message::ToggleSection(idx) => model.toggle_section(idx),
        Message::ToggleActiveSection => {
            if let Some(idx) = model.active_section {
                model.toggle_section(idx);
            }
        }
        Message::HoverSection(idx) => model.hovered_section = idx,

        Message::Tick(now_ms) => model.tick(now_ms),
        Message::Resize(width, height) => model.resize(width, height),

        Message::Quit => model.should_quit = true,
    }
    model
}
