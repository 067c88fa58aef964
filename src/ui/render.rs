use std::ops::Range;

use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::app::Model;
use crate::nav::NavBar;
use crate::page::{CollapseState, LineKind};

use super::{DOCUMENT_LEFT_PADDING, SCROLL_TOP_LABEL, status, style};

/// Everything above the status bar.
pub fn page_area(area: Rect) -> Rect {
    Rect {
        height: area.height.saturating_sub(1),
        ..area
    }
}

fn status_area(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height.saturating_sub(1),
        height: area.height.min(1),
        ..area
    }
}

/// Width available for page text, leaving room for the gutter and a margin.
pub fn page_content_width(total_width: u16) -> u16 {
    total_width
        .saturating_sub(DOCUMENT_LEFT_PADDING + 1)
        .max(1)
}

/// Columns taken by an overflow marker (` …`) at either end of the bar.
const NAV_OVERFLOW_WIDTH: u16 = 2;

/// Column ranges of the nav links, relative to the left edge of the bar.
///
/// Each link is its label padded by one space on either side; links are
/// separated by a one-column gap. When the bar is too narrow for every
/// link it shows a window that contains `pinned`, with room for a ` …`
/// marker on each side that has hidden links.
pub fn nav_anchor_ranges(
    nav: &NavBar,
    width: u16,
    pinned: Option<usize>,
) -> Vec<(Range<u16>, usize)> {
    let Some(pinned) = pinned.filter(|&idx| idx < nav.len()) else {
        return nav_window(nav, width, 0);
    };
    (0..=pinned)
        .map(|first| nav_window(nav, width, first))
        .find(|ranges| ranges.iter().any(|(_, idx)| *idx == pinned))
        .unwrap_or_else(|| nav_window(nav, width, pinned))
}

/// Links that fit when the bar starts at item `first`.
fn nav_window(nav: &NavBar, width: u16, first: usize) -> Vec<(Range<u16>, usize)> {
    let mut ranges = Vec::with_capacity(nav.len());
    let mut x: u16 = if first > 0 { NAV_OVERFLOW_WIDTH + 1 } else { 1 };
    for (idx, item) in nav.items().iter().enumerate().skip(first) {
        let link_width = u16::try_from(item.label.width())
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        let end = x.saturating_add(link_width);
        let reserve = if idx + 1 < nav.len() { NAV_OVERFLOW_WIDTH } else { 0 };
        if end.saturating_add(reserve) > width {
            break;
        }
        ranges.push((x..end, idx));
        x = end.saturating_add(1);
    }
    ranges
}

/// Nav entry whose link covers `column`, if any.
pub fn nav_anchor_at(
    nav: &NavBar,
    width: u16,
    pinned: Option<usize>,
    column: u16,
) -> Option<usize> {
    nav_anchor_ranges(nav, width, pinned)
        .into_iter()
        .find(|(range, _)| range.contains(&column))
        .map(|(_, idx)| idx)
}

/// Bottom-right corner of the page area. Empty when the area is too small.
pub fn scroll_top_button_rect(page_area: Rect) -> Rect {
    let width = u16::try_from(SCROLL_TOP_LABEL.width()).unwrap_or(u16::MAX);
    if page_area.width <= width || page_area.height == 0 {
        return Rect::new(page_area.x, page_area.y, 0, 0);
    }
    Rect::new(
        page_area.x + page_area.width - width - 1,
        page_area.y + page_area.height - 1,
        width,
        1,
    )
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let page = page_area(area);

    render_page(model, frame, page);
    if model.header_visible {
        render_header(model, frame, page);
    }
    if model.scroll_top_visible {
        render_scroll_top(frame, page);
    }

    let status_area = status_area(area);
    if model.active_toast().is_some() {
        status::render_toast_bar(model, frame, status_area);
    } else if model.hovered_tooltip().is_some() {
        status::render_tooltip_bar(model, frame, status_area);
    } else {
        status::render_status_bar(model, frame, status_area);
    }
}

fn render_page(model: &Model, frame: &mut Frame, area: Rect) {
    let mut content: Vec<Line> = Vec::with_capacity(area.height as usize);
    for row in model.viewport.visible_range() {
        let Some(line) = model.page.line(row) else {
            break;
        };
        let section = line.kind.section();
        let active = section.is_some() && section == model.active_section;
        let marker = if active {
            Span::styled("▌ ", style::active_marker_style())
        } else {
            Span::raw("  ")
        };
        let text = match line.kind {
            // Wrapped headers carry the glyph on their first row only.
            LineKind::SectionHeader(idx) if model.page.section_top(idx) == Some(row) => {
                let glyph = match model.page.section(idx).map(|s| s.collapse) {
                    Some(CollapseState::Collapsed) => '▸',
                    _ => '▾',
                };
                format!("{glyph} {}", line.text)
            }
            LineKind::SectionHeader(_) => format!("  {}", line.text),
            _ => line.text.clone(),
        };
        content.push(Line::from(vec![
            marker,
            Span::styled(text, style::style_for_line(line.kind, active)),
        ]));
    }

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(content), area);
}

fn render_header(model: &Model, frame: &mut Frame, page: Rect) {
    if page.height == 0 {
        return;
    }
    let bar = Rect { height: 1, ..page };
    let ranges = nav_anchor_ranges(&model.nav, bar.width, model.pinned_nav_item());

    let mut spans = Vec::with_capacity(ranges.len() * 2 + 2);
    let mut x: u16 = 0;
    if ranges.first().is_some_and(|(_, idx)| *idx > 0) {
        spans.push(Span::raw(" …"));
        x = NAV_OVERFLOW_WIDTH;
    }
    for (range, idx) in &ranges {
        let Some(item) = model.nav.item(*idx) else {
            continue;
        };
        spans.push(Span::raw(" ".repeat(usize::from(range.start.saturating_sub(x)))));
        spans.push(Span::styled(
            format!(" {} ", item.label),
            style::nav_item_style(model.nav.active() == Some(*idx), model.nav_focus == Some(*idx)),
        ));
        x = range.end;
    }
    if ranges
        .last()
        .is_some_and(|(_, idx)| idx + 1 < model.nav.len())
    {
        spans.push(Span::raw(" …"));
    }

    frame.render_widget(Clear, bar);
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(style::header_bar_style()),
        bar,
    );
}

fn render_scroll_top(frame: &mut Frame, page: Rect) {
    let rect = scroll_top_button_rect(page);
    if rect.width == 0 {
        return;
    }
    frame.render_widget(
        Paragraph::new(SCROLL_TOP_LABEL).style(style::scroll_top_style()),
        rect,
    );
}
