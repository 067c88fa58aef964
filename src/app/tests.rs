use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::page::{COLLAPSE_HINT, CollapseState, EXPAND_HINT, Page, Section};
use crate::spy::select_active;

use super::{
    Message, Model, NavHit, PageSource, ToastLevel, handle_event, handle_key, update,
};

fn create_model(sections: usize) -> Model {
    Model::new(Page::demo(sections), (80, 24))
}

fn relative_tops(model: &Model) -> Vec<i64> {
    model
        .page
        .section_tops()
        .iter()
        .map(|&row| model.viewport.relative_top(row))
        .collect()
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Up(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

// Initialization

#[test]
fn test_init_builds_one_nav_item_per_section_in_order() {
    let model = create_model(5);
    assert_eq!(model.nav.len(), 5);
    for (item, section) in model.nav.items().iter().zip(model.page.sections()) {
        assert_eq!(item.target(), section.id);
        assert_eq!(item.label, section.label);
    }
}

#[test]
fn test_init_marks_first_section_and_nav_item_active() {
    let model = create_model(3);
    assert_eq!(model.active_section, Some(0));
    assert_eq!(model.nav.active(), Some(0));
    assert!(model.header_visible);
    assert!(!model.scroll_top_visible);
    assert!(!model.header_timer().is_armed());
}

#[test]
fn test_init_without_sections() {
    let model = create_model(0);
    assert_eq!(model.active_section, None);
    assert!(model.nav.is_empty());
    let model = update(model, Message::ScrollDown(1));
    assert_eq!(model.active_section, None);
}

// Active-section selection

#[test]
fn test_section_at_viewport_top_becomes_active() {
    let model = create_model(10);
    let top = model.page.section_top(2).unwrap();
    let model = update(model, Message::ScrollDown(top));
    assert_eq!(model.viewport.offset(), top);
    assert_eq!(model.active_section, Some(2));
    assert_eq!(model.nav.active(), Some(2));
    assert_eq!(model.nav.active_item().map(|i| i.target()), Some("section3"));
}

#[test]
fn test_no_qualifying_section_keeps_previous_active() {
    let model = create_model(10);
    let top = model.page.section_top(1).unwrap();
    let model = update(model, Message::ScrollDown(top));
    assert_eq!(model.active_section, Some(1));

    let model = update(model, Message::ScrollDown(3));
    assert_eq!(
        select_active(&relative_tops(&model), model.viewport.height()),
        None,
        "fixture should leave no section in the upper half"
    );
    assert_eq!(model.active_section, Some(1));
    assert_eq!(model.nav.active(), Some(1));
}

#[test]
fn test_scrolling_back_up_reselects_earlier_section() {
    let model = create_model(10);
    let top = model.page.section_top(3).unwrap();
    let model = update(model, Message::ScrollDown(top));
    assert_eq!(model.active_section, Some(3));
    let back = top - model.page.section_top(1).unwrap();
    let model = update(model, Message::ScrollUp(back));
    assert_eq!(model.active_section, Some(1));
}

#[test]
fn test_scroll_without_movement_is_not_a_scroll_event() {
    let model = create_model(3);
    let model = update(model, Message::ScrollUp(5));
    assert!(!model.header_timer().is_armed());
}

// Header idle-hide

#[test]
fn test_header_hides_after_idle_period() {
    let model = create_model(10);
    let model = update(model, Message::Tick(1000));
    let model = update(model, Message::ScrollDown(1));
    assert!(model.header_visible);

    let model = update(model, Message::Tick(2999));
    assert!(model.header_visible);
    let model = update(model, Message::Tick(3000));
    assert!(!model.header_visible);
}

#[test]
fn test_scrolling_within_window_keeps_header_visible() {
    let model = create_model(10);
    let model = update(model, Message::Tick(0));
    let model = update(model, Message::ScrollDown(1));
    let model = update(model, Message::Tick(1500));
    assert!(model.header_visible);
    let model = update(model, Message::ScrollDown(1));

    let model = update(model, Message::Tick(2000));
    assert!(model.header_visible, "first deadline was replaced");
    let model = update(model, Message::Tick(3499));
    assert!(model.header_visible);
    let model = update(model, Message::Tick(3500));
    assert!(!model.header_visible);
}

#[test]
fn test_scroll_shows_hidden_header_immediately() {
    let model = create_model(10);
    let model = update(model, Message::ScrollDown(1));
    let model = update(model, Message::Tick(5000));
    assert!(!model.header_visible);
    let model = update(model, Message::ScrollDown(1));
    assert!(model.header_visible);
}

#[test]
fn test_custom_idle_delay() {
    let model = create_model(10).with_idle_ms(500);
    let model = update(model, Message::ScrollDown(1));
    let model = update(model, Message::Tick(500));
    assert!(!model.header_visible);
}

// Scroll-to-top button

#[test]
fn test_scroll_top_button_threshold_is_exclusive() {
    let model = create_model(10);
    assert!(model.viewport.max_offset() > 71);
    let model = update(model, Message::ScrollDown(70));
    assert!(!model.scroll_top_visible);
    let model = update(model, Message::ScrollDown(1));
    assert!(model.scroll_top_visible);
    let model = update(model, Message::ScrollUp(1));
    assert!(!model.scroll_top_visible);
}

#[test]
fn test_scroll_top_button_custom_threshold() {
    let model = create_model(10).with_scroll_top_threshold(5);
    let model = update(model, Message::ScrollDown(6));
    assert!(model.scroll_top_visible);
}

// Smooth scroll

#[test]
fn test_nav_click_scrolls_smoothly_to_section_offset() {
    let model = create_model(10);
    let model = update(model, Message::Tick(100));
    let target = model.page.section_top(2).unwrap();

    let model = update(model, Message::NavClick(NavHit::Anchor(2)));
    assert_eq!(model.smooth_scroll().map(|s| s.target()), Some(target));
    assert_eq!(model.viewport.offset(), 0, "no instant jump");

    let model = update(model, Message::Tick(250));
    let mid = model.viewport.offset();
    assert!(mid > 0 && mid < target);

    let model = update(model, Message::Tick(400));
    assert_eq!(model.viewport.offset(), target);
    assert!(!model.is_animating());
    assert_eq!(model.active_section, Some(2));
    assert!(model.header_timer().is_armed());
}

#[test]
fn test_nav_click_on_container_does_nothing() {
    let model = create_model(4);
    let model = update(model, Message::NavClick(NavHit::Container));
    assert!(!model.is_animating());
    assert_eq!(model.viewport.offset(), 0);
}

#[test]
fn test_nav_click_without_smooth_jumps() {
    let model = create_model(10).with_smooth_ms(0);
    let target = model.page.section_top(4).unwrap();
    let model = update(model, Message::NavClick(NavHit::Anchor(4)));
    assert_eq!(model.viewport.offset(), target);
    assert_eq!(model.active_section, Some(4));
    assert!(!model.is_animating());
}

#[test]
fn test_nav_click_unknown_target_shows_error_toast() {
    let mut model = create_model(2);
    model
        .nav
        .append_sections(&[Section::new("ghost", "Ghost", Vec::new())]);
    let model = update(model, Message::NavClick(NavHit::Anchor(2)));
    assert!(!model.is_animating());
    let (message, _) = model.active_toast().expect("toast");
    assert!(message.contains("ghost"));

    let model = update(model, Message::Tick(3000));
    assert!(model.active_toast().is_none());
}

#[test]
fn test_nav_click_out_of_range_is_ignored() {
    let model = create_model(2);
    let model = update(model, Message::NavClick(NavHit::Anchor(9)));
    assert!(!model.is_animating());
    assert!(model.active_toast().is_none());
}

#[test]
fn test_scroll_to_missing_section_warns() {
    let model = update(create_model(4), Message::ScrollToSection(8));
    assert!(!model.is_animating());
    assert_eq!(model.viewport.offset(), 0);
    let (message, level) = model.active_toast().expect("toast");
    assert_eq!(level, ToastLevel::Warning);
    assert!(message.contains("No section 9"));
}

#[test]
fn test_startup_hint_only_for_empty_page() {
    let mut empty = create_model(0);
    empty.show_startup_hint();
    assert_eq!(
        empty.active_toast(),
        Some(("No sections to navigate", ToastLevel::Info))
    );

    let mut model = create_model(2);
    model.show_startup_hint();
    assert!(model.active_toast().is_none());
}

#[test]
fn test_default_model_has_no_nav_entries() {
    let model = Model::default();
    assert!(model.nav.is_empty());
    assert_eq!(model.active_section, None);
}

#[test]
fn test_manual_scroll_cancels_animation() {
    let model = create_model(10);
    let model = update(model, Message::ScrollToSection(5));
    assert!(model.is_animating());
    let model = update(model, Message::ScrollDown(1));
    assert!(!model.is_animating());
    assert_eq!(model.viewport.offset(), 1);
}

#[test]
fn test_scroll_to_top_from_bottom() {
    let model = create_model(10);
    let model = update(model, Message::GoToBottom);
    assert!(model.scroll_top_visible);
    let model = update(model, Message::Tick(1000));
    let model = update(model, Message::ScrollToTop);
    assert_eq!(model.smooth_scroll().map(|s| s.target()), Some(0));

    let model = update(model, Message::Tick(1300));
    assert_eq!(model.viewport.offset(), 0);
    assert!(!model.scroll_top_visible);
    assert_eq!(model.active_section, Some(0));
}

// Keyboard nav focus

#[test]
fn test_focus_cycles_through_nav_items() {
    let model = create_model(3);
    let model = update(model, Message::FocusPrevNav);
    assert_eq!(model.nav_focus, Some(2));
    let model = update(model, Message::FocusNextNav);
    assert_eq!(model.nav_focus, Some(0));
    let model = update(model, Message::FocusNextNav);
    assert_eq!(model.nav_focus, Some(1));
}

#[test]
fn test_focus_reveals_hidden_header() {
    let model = create_model(10);
    let model = update(model, Message::ScrollDown(1));
    let model = update(model, Message::Tick(2000));
    assert!(!model.header_visible);
    let model = update(model, Message::FocusNextNav);
    assert!(model.header_visible);
}

#[test]
fn test_activate_focused_nav_scrolls() {
    let model = create_model(10).with_smooth_ms(0);
    let model = update(model, Message::FocusNextNav);
    let model = update(model, Message::FocusNextNav);
    let model = update(model, Message::ActivateFocusedNav);
    assert_eq!(model.viewport.offset(), model.page.section_top(1).unwrap());
}

// Section collapse

#[test]
fn test_toggle_section_hides_body_and_sets_expand_tooltip() {
    let model = create_model(3);
    let rows = model.page.line_count();
    let model = update(model, Message::ToggleSection(1));
    let section = model.page.section(1).unwrap();
    assert_eq!(section.collapse, CollapseState::Collapsed);
    assert_eq!(section.title.as_deref(), Some(EXPAND_HINT));
    assert!(model.page.line_count() < rows);
    assert_eq!(model.viewport.total_lines(), model.page.line_count());

    let model = update(model, Message::ToggleSection(1));
    let section = model.page.section(1).unwrap();
    assert_eq!(section.collapse, CollapseState::Expanded);
    assert_eq!(section.title.as_deref(), Some(COLLAPSE_HINT));
    assert_eq!(model.page.line_count(), rows);
}

#[test]
fn test_toggle_active_section() {
    let model = create_model(3);
    let model = update(model, Message::ToggleActiveSection);
    assert!(model.page.section(0).unwrap().collapse.is_collapsed());
}

#[test]
fn test_collapse_at_bottom_clamps_offset_and_runs_scroll_reactions() {
    let model = create_model(4);
    let model = update(model, Message::GoToBottom);
    let model = update(model, Message::Tick(5000));
    assert!(!model.header_visible);

    let model = update(model, Message::ToggleSection(3));
    assert!(model.viewport.offset() <= model.viewport.max_offset());
    assert!(model.header_visible);
}

#[test]
fn test_hover_shows_tooltip_only_after_toggle() {
    let model = create_model(2);
    let model = update(model, Message::HoverSection(Some(0)));
    assert_eq!(model.hovered_tooltip(), None);
    let model = update(model, Message::ToggleSection(0));
    assert_eq!(model.hovered_tooltip(), Some(EXPAND_HINT));
    let model = update(model, Message::HoverSection(None));
    assert_eq!(model.hovered_tooltip(), None);
}

// Window

#[test]
fn test_resize_relayouts_page() {
    let model = create_model(3);
    let rows = model.page.line_count();
    let model = update(model, Message::Resize(40, 30));
    assert!(model.page.line_count() > rows);
    assert_eq!(model.viewport.width(), 40);
    assert_eq!(model.viewport.height(), 29);
}

#[test]
fn test_quit() {
    let model = create_model(1);
    let model = update(model, Message::Quit);
    assert!(model.should_quit);
}

// Input mapping

#[test]
fn test_key_bindings() {
    assert_eq!(handle_key(key(KeyCode::Char('j'))), Some(Message::ScrollDown(1)));
    assert_eq!(handle_key(key(KeyCode::Char('t'))), Some(Message::ScrollToTop));
    assert_eq!(handle_key(key(KeyCode::Char('c'))), Some(Message::ToggleActiveSection));
    assert_eq!(handle_key(key(KeyCode::Char('3'))), Some(Message::ScrollToSection(2)));
    assert_eq!(handle_key(key(KeyCode::Tab)), Some(Message::FocusNextNav));
    assert_eq!(handle_key(key(KeyCode::Char('q'))), Some(Message::Quit));
    assert_eq!(
        handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(Message::Quit)
    );
    assert_eq!(handle_key(key(KeyCode::Char('z'))), None);
}

#[test]
fn test_click_on_nav_link_is_anchor_hit() {
    let model = create_model(3);
    // " Section 1 " occupies columns 1..12, gap at 12, next link from 13.
    assert_eq!(
        handle_event(&click(5, 0), &model),
        Some(Message::NavClick(NavHit::Anchor(0)))
    );
    assert_eq!(
        handle_event(&click(13, 0), &model),
        Some(Message::NavClick(NavHit::Anchor(1)))
    );
}

#[test]
fn test_click_between_nav_links_is_container_hit() {
    let model = create_model(3);
    assert_eq!(
        handle_event(&click(12, 0), &model),
        Some(Message::NavClick(NavHit::Container))
    );
    assert_eq!(
        handle_event(&click(0, 0), &model),
        Some(Message::NavClick(NavHit::Container))
    );
    assert_eq!(
        handle_event(&click(79, 0), &model),
        Some(Message::NavClick(NavHit::Container))
    );
}

#[test]
fn test_click_on_first_row_with_hidden_header_reaches_page() {
    let mut model = create_model(3);
    model.header_visible = false;
    // Row 0 is the page title, not a section header.
    assert_eq!(handle_event(&click(5, 0), &model), None);
}

#[test]
fn test_click_on_section_header_toggles_it() {
    let model = create_model(3);
    let row = u16::try_from(model.page.section_top(0).unwrap()).unwrap();
    assert_eq!(
        handle_event(&click(10, row), &model),
        Some(Message::ToggleSection(0))
    );
}

#[test]
fn test_click_on_scroll_top_button() {
    let model = create_model(10);
    let model = update(model, Message::ScrollDown(80));
    assert!(model.scroll_top_visible);
    // Button sits at the bottom-right of the 23-row page area.
    assert_eq!(handle_event(&click(72, 22), &model), Some(Message::ScrollToTop));
}

#[test]
fn test_click_on_status_bar_is_ignored() {
    let model = create_model(3);
    assert_eq!(handle_event(&click(5, 23), &model), None);
}

#[test]
fn test_mouse_wheel_scrolls() {
    let model = create_model(3);
    let wheel = Event::Mouse(MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 10,
        row: 10,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(handle_event(&wheel, &model), Some(Message::ScrollDown(3)));
}

#[test]
fn test_mouse_move_over_header_emits_hover_once() {
    let model = create_model(3);
    let row = u16::try_from(model.page.section_top(0).unwrap()).unwrap();
    let moved = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column: 10,
        row,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(
        handle_event(&moved, &model),
        Some(Message::HoverSection(Some(0)))
    );
    let model = update(model, Message::HoverSection(Some(0)));
    assert_eq!(handle_event(&moved, &model), None);
}

#[test]
fn test_resize_event_maps_to_message() {
    let model = create_model(1);
    assert_eq!(
        handle_event(&Event::Resize(100, 40), &model),
        Some(Message::Resize(100, 40))
    );
}

#[test]
fn test_page_source_display_name() {
    assert_eq!(
        PageSource::File("docs/index.md".into()).display_name(),
        "index.md"
    );
    assert_eq!(PageSource::Demo(4).display_name(), "demo");
}
