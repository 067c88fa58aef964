//! Page model: sections, layout and anchors.
//!
//! This module handles:
//! - Parsing markdown into a title, intro, sections and footer
//! - Building the built-in demo page
//! - Laying the page out into terminal rows and tracking section offsets
//! - Collapsing and expanding section bodies

mod demo;
mod parser;
mod types;

pub use demo::demo;
pub use parser::{parse, slugify};
pub use types::{
    COLLAPSE_HINT, CollapseState, EXPAND_HINT, LineKind, Page, PageError, PageLine, Section,
};

use std::path::Path;

use anyhow::{Context, Result};

/// Load a page from a markdown file.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load(path: &Path) -> Result<Page> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(parse(&source))
}
