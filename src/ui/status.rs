use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Model, ToastLevel};

/// Tooltip of the hovered section header, drawn over the status bar.
pub fn render_tooltip_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some(tooltip) = model.hovered_tooltip() else {
        return;
    };
    let bar = Paragraph::new(format!(" {tooltip}"))
        .style(Style::default().bg(Color::Blue).fg(Color::White));
    frame.render_widget(bar, area);
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let section = model
        .active_section
        .and_then(|idx| model.page.section(idx))
        .map_or_else(String::new, |s| format!("  § {}", s.label));
    let percent = model.viewport.scroll_percent();
    let row_info = format!(
        "Row {}/{}",
        model.viewport.offset() + 1,
        model.viewport.total_lines()
    );

    let status = format!(
        " {}{}  [{}%]  {}  Tab:nav  c:collapse  t:top  q:quit",
        model.source_name, section, percent, row_info
    );

    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ToastLevel::Error => ("[error]", Style::default().bg(Color::Red).fg(Color::White)),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
