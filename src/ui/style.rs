//! Theming and color definitions.
//!
//! Uses ANSI colors that adapt to the terminal's color palette.

use ratatui::style::{Color, Modifier, Style};

use crate::page::LineKind;

/// Style for a page row. `active` is true for rows of the active section.
pub fn style_for_line(kind: LineKind, active: bool) -> Style {
    match kind {
        LineKind::Title => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        LineKind::SectionHeader(_) if active => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LineKind::SectionHeader(_) => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LineKind::SectionBody(_) if active => Style::default(),
        LineKind::SectionBody(_) => Style::default().add_modifier(Modifier::DIM),
        LineKind::Footer => Style::default()
            .fg(Color::Indexed(245))
            .add_modifier(Modifier::ITALIC),
        LineKind::Intro | LineKind::Empty => Style::default(),
    }
}

/// Gutter marker drawn beside the active section.
pub fn active_marker_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Background of the header bar.
pub fn header_bar_style() -> Style {
    Style::default().bg(Color::Blue).fg(Color::White)
}

/// A nav entry: active mirrors the active section, focused follows Tab.
pub fn nav_item_style(active: bool, focused: bool) -> Style {
    let mut style = header_bar_style();
    if active {
        style = style
            .bg(Color::White)
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD);
    }
    if focused {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    style
}

pub fn scroll_top_style() -> Style {
    Style::default()
        .bg(Color::DarkGray)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}
