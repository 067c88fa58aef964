//! Core page types.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Tooltip shown on an expanded section header after it has been toggled.
pub const COLLAPSE_HINT: &str = "Click to collapse the section";
/// Tooltip shown on a collapsed section header.
pub const EXPAND_HINT: &str = "Click to expand the section";

/// Whether a section's body is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollapseState {
    #[default]
    Expanded,
    Collapsed,
}

impl CollapseState {
    pub const fn is_collapsed(self) -> bool {
        matches!(self, Self::Collapsed)
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsed,
            Self::Collapsed => Self::Expanded,
        }
    }
}

/// A navigable content block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Unique identifier, the target of `#id` anchors
    pub id: String,
    /// Label used for the nav entry and the section header
    pub label: String,
    /// Body paragraphs, unwrapped
    pub body: Vec<String>,
    /// Body visibility
    pub collapse: CollapseState,
    /// Advisory tooltip for the header, set once the header has been clicked
    pub title: Option<String>,
}

impl Section {
    pub fn new(id: impl Into<String>, label: impl Into<String>, body: Vec<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            body,
            collapse: CollapseState::Expanded,
            title: None,
        }
    }
}

/// What a laid-out row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Title,
    Intro,
    SectionHeader(usize),
    SectionBody(usize),
    Footer,
    Empty,
}

impl LineKind {
    /// Section index for rows that belong to a section.
    pub const fn section(self) -> Option<usize> {
        match self {
            Self::SectionHeader(idx) | Self::SectionBody(idx) => Some(idx),
            _ => None,
        }
    }
}

/// One terminal row of the laid-out page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLine {
    pub text: String,
    pub kind: LineKind,
}

impl PageLine {
    fn new(text: impl Into<String>, kind: LineKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Failure to resolve a nav anchor against the page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("anchor `{0}` is not a fragment reference")]
    InvalidAnchor(String),
    #[error("no section with id `{0}`")]
    UnknownSection(String),
}

/// A single page: title, intro, sections and footer, laid out into rows.
#[derive(Debug, Clone, Default)]
pub struct Page {
    title: Option<String>,
    intro: Vec<String>,
    sections: Vec<Section>,
    footer: Option<String>,
    /// Rows produced by the last layout
    lines: Vec<PageLine>,
    /// Row of each section header, in document order
    section_tops: Vec<usize>,
    /// Width used for the last layout
    width: u16,
}

impl Page {
    /// Create a page. Call [`Page::layout`] before reading rows.
    pub const fn new(
        title: Option<String>,
        intro: Vec<String>,
        sections: Vec<Section>,
        footer: Option<String>,
    ) -> Self {
        Self {
            title,
            intro,
            sections,
            footer,
            lines: Vec::new(),
            section_tops: Vec::new(),
            width: 0,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn intro(&self) -> &[String] {
        &self.intro
    }

    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, idx: usize) -> Option<&Section> {
        self.sections.get(idx)
    }

    pub fn lines(&self) -> &[PageLine] {
        &self.lines
    }

    pub fn line(&self, row: usize) -> Option<&PageLine> {
        self.lines.get(row)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Header rows of every section, in document order.
    pub fn section_tops(&self) -> &[usize] {
        &self.section_tops
    }

    /// Offset of a section from the top of the page, in rows.
    pub fn section_top(&self, idx: usize) -> Option<usize> {
        self.section_tops.get(idx).copied()
    }

    /// Index of the section with the given id.
    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// Resolve a `#id` fragment reference to a section index.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::InvalidAnchor`] when `href` is not a fragment and
    /// [`PageError::UnknownSection`] when no section carries the id.
    pub fn resolve_anchor(&self, href: &str) -> Result<usize, PageError> {
        let id = href
            .strip_prefix('#')
            .filter(|id| !id.is_empty())
            .ok_or_else(|| PageError::InvalidAnchor(href.to_string()))?;
        self.section_index(id)
            .ok_or_else(|| PageError::UnknownSection(id.to_string()))
    }

    /// Flip a section between shown and hidden and update its tooltip to
    /// describe what the next click does. Re-lays out the page.
    pub fn toggle_collapse(&mut self, idx: usize) -> Option<CollapseState> {
        let section = self.sections.get_mut(idx)?;
        section.collapse = section.collapse.toggled();
        section.title = Some(
            match section.collapse {
                CollapseState::Collapsed => EXPAND_HINT,
                CollapseState::Expanded => COLLAPSE_HINT,
            }
            .to_string(),
        );
        let state = section.collapse;
        self.layout(self.width);
        Some(state)
    }

    /// Append the current year to the footer, if there is one.
    pub fn stamp_footer_year(&mut self, year: i32) {
        if let Some(footer) = self.footer.as_mut() {
            footer.push_str(&format!(" | {year}"));
            self.layout(self.width);
        }
    }

    /// Wrap all text to `width` columns and recompute section offsets.
    pub fn layout(&mut self, width: u16) {
        self.width = width.max(1);
        let wrap_width = self.width as usize;
        let mut lines = Vec::new();
        let mut tops = Vec::with_capacity(self.sections.len());

        if let Some(title) = &self.title {
            for row in wrap_text(title, wrap_width) {
                lines.push(PageLine::new(row, LineKind::Title));
            }
            lines.push(PageLine::new("", LineKind::Empty));
        }
        for paragraph in &self.intro {
            for row in wrap_text(paragraph, wrap_width) {
                lines.push(PageLine::new(row, LineKind::Intro));
            }
            lines.push(PageLine::new("", LineKind::Empty));
        }

        for (idx, section) in self.sections.iter().enumerate() {
            tops.push(lines.len());
            // Header keeps room for the collapse glyph.
            let header_width = wrap_width.saturating_sub(2).max(1);
            for row in wrap_text(&section.label, header_width) {
                lines.push(PageLine::new(row, LineKind::SectionHeader(idx)));
            }
            if !section.collapse.is_collapsed() {
                for paragraph in &section.body {
                    lines.push(PageLine::new("", LineKind::SectionBody(idx)));
                    for row in wrap_text(paragraph, wrap_width) {
                        lines.push(PageLine::new(row, LineKind::SectionBody(idx)));
                    }
                }
            }
            lines.push(PageLine::new("", LineKind::Empty));
            lines.push(PageLine::new("", LineKind::Empty));
        }

        if let Some(footer) = &self.footer {
            for row in wrap_text(footer, wrap_width) {
                lines.push(PageLine::new(row, LineKind::Footer));
            }
        }

        self.lines = lines;
        self.section_tops = tops;
    }
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let sep = usize::from(!current.is_empty());
        if current_width + sep + word_width <= width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += sep + word_width;
            continue;
        }
        if !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }
        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if current_width + ch_width > width && !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}
