//! Navigation bar synthesized from page sections.
//!
//! One [`NavItem`] per section, in document order. At most one item is
//! active at a time and it mirrors the active section.

use crate::page::Section;

/// One link in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Fragment reference to the target section (`#id`)
    pub href: String,
    /// Text shown in the bar
    pub label: String,
}

impl NavItem {
    pub fn for_section(section: &Section) -> Self {
        Self {
            href: format!("#{}", section.id),
            label: section.label.clone(),
        }
    }

    /// Identifier of the section this item links to.
    pub fn target(&self) -> &str {
        self.href.strip_prefix('#').unwrap_or(&self.href)
    }
}

/// Ordered list of nav items with a single optional active entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavBar {
    items: Vec<NavItem>,
    active: Option<usize>,
}

impl NavBar {
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            active: None,
        }
    }

    /// Build entries for `sections` and append them in one batch.
    ///
    /// Existing entries are kept, so calling this twice with the same
    /// sections duplicates every entry.
    pub fn append_sections(&mut self, sections: &[Section]) {
        if sections.is_empty() {
            return;
        }
        let batch: Vec<NavItem> = sections.iter().map(NavItem::for_section).collect();
        tracing::debug!(count = batch.len(), "nav entries appended");
        self.items.extend(batch);
    }

    /// Mark the first item linking to `id` as the active one.
    ///
    /// Returns false and leaves the bar untouched when no item links to `id`.
    pub fn highlight(&mut self, id: &str) -> bool {
        let Some(idx) = self.items.iter().position(|item| item.target() == id) else {
            return false;
        };
        self.active = Some(idx);
        true
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn item(&self, idx: usize) -> Option<&NavItem> {
        self.items.get(idx)
    }

    pub const fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn active_item(&self) -> Option<&NavItem> {
        self.active.and_then(|idx| self.items.get(idx))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
