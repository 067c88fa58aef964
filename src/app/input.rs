use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{Message, Model, NavHit};
use crate::page::LineKind;

/// Translate a terminal event into a message.
pub fn handle_event(event: &Event, model: &Model) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(*key),
        Event::Mouse(mouse) => handle_mouse(*mouse, model),
        Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
        _ => None,
    }
}

pub fn handle_key(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Message::Quit),
            KeyCode::Char('d') => Some(Message::HalfPageDown),
            KeyCode::Char('u') => Some(Message::HalfPageUp),
            KeyCode::Char('f') => Some(Message::PageDown),
            KeyCode::Char('b') => Some(Message::PageUp),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(Message::ScrollDown(1)),
        KeyCode::Char('k') | KeyCode::Up => Some(Message::ScrollUp(1)),
        KeyCode::Char(' ' | 'f') | KeyCode::PageDown => Some(Message::PageDown),
        KeyCode::Char('b') | KeyCode::PageUp => Some(Message::PageUp),
        KeyCode::Char('d') => Some(Message::HalfPageDown),
        KeyCode::Char('u') => Some(Message::HalfPageUp),
        KeyCode::Char('g' | 't') | KeyCode::Home => Some(Message::ScrollToTop),
        KeyCode::Char('G') | KeyCode::End => Some(Message::GoToBottom),
        KeyCode::Char('c') => Some(Message::ToggleActiveSection),
        KeyCode::Tab => Some(Message::FocusNextNav),
        KeyCode::BackTab => Some(Message::FocusPrevNav),
        KeyCode::Enter => Some(Message::ActivateFocusedNav),
        KeyCode::Char(ch @ '1'..='9') => ch
            .to_digit(10)
            .and_then(|d| usize::try_from(d).ok())
            .map(|d| Message::ScrollToSection(d - 1)),
        _ => None,
    }
}

pub fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
    let area = Rect::new(
        0,
        0,
        model.viewport.width(),
        model.viewport.height().saturating_add(1),
    );
    let page = crate::ui::page_area(area);
    let in_page = point_in_rect(mouse.column, mouse.row, page);

    match mouse.kind {
        MouseEventKind::ScrollDown => Some(Message::ScrollDown(3)),
        MouseEventKind::ScrollUp => Some(Message::ScrollUp(3)),
        MouseEventKind::Up(MouseButton::Left) => {
            if !in_page {
                return None;
            }
            // The header sits on top of the first page row while visible.
            if model.header_visible && mouse.row == page.y {
                let column = mouse.column - page.x;
                let pinned = model.pinned_nav_item();
                let hit = crate::ui::nav_anchor_at(&model.nav, page.width, pinned, column)
                    .map_or(NavHit::Container, NavHit::Anchor);
                return Some(Message::NavClick(hit));
            }
            if model.scroll_top_visible
                && point_in_rect(
                    mouse.column,
                    mouse.row,
                    crate::ui::scroll_top_button_rect(page),
                )
            {
                return Some(Message::ScrollToTop);
            }
            section_header_at(model, page, mouse.row).map(Message::ToggleSection)
        }
        MouseEventKind::Moved => {
            let hovered = if in_page && !(model.header_visible && mouse.row == page.y) {
                section_header_at(model, page, mouse.row)
            } else {
                None
            };
            (hovered != model.hovered_section).then_some(Message::HoverSection(hovered))
        }
        _ => None,
    }
}

fn section_header_at(model: &Model, page: Rect, row: u16) -> Option<usize> {
    let line = model.viewport.offset() + usize::from(row.checked_sub(page.y)?);
    match model.page.line(line)?.kind {
        LineKind::SectionHeader(idx) => Some(idx),
        _ => None,
    }
}

const fn point_in_rect(column: u16, row: u16, rect: Rect) -> bool {
    column >= rect.x
        && column < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}
