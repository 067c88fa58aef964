//! Markdown to [`Page`] conversion with comrak.
//!
//! The first level-1 heading becomes the page title and every level-2
//! heading opens a section. Blocks before the first section form the
//! intro; a thematic break after the last section starts the footer.

use comrak::nodes::{AstNode, NodeValue};
use comrak::{Arena, Options, parse_document};

use super::types::{Page, Section};

impl Page {
    pub fn parse(source: &str) -> Self {
        parse(source)
    }
}

/// Parse markdown source into a page. The result is not laid out yet.
pub fn parse(source: &str) -> Page {
    let arena = Arena::new();
    let options = create_options();
    let root = parse_document(&arena, source, &options);

    let mut title = None;
    let mut intro = Vec::new();
    let mut sections: Vec<Section> = Vec::new();
    // Blocks after a thematic break. They become the footer only if no
    // section follows.
    let mut after_break: Option<Vec<String>> = None;

    for node in root.children() {
        let heading_level = match &node.data.borrow().value {
            NodeValue::Heading(heading) => Some(heading.level),
            NodeValue::ThematicBreak => {
                if !sections.is_empty() && after_break.is_none() {
                    after_break = Some(Vec::new());
                }
                continue;
            }
            _ => None,
        };

        match heading_level {
            Some(1) if title.is_none() && sections.is_empty() => {
                title = Some(extract_text(node));
            }
            Some(2) => {
                let pending = after_break.take();
                if let (Some(pending), Some(section)) = (pending, sections.last_mut()) {
                    section.body.extend(pending);
                }
                let label = extract_text(node);
                let id = unique_id(&slugify(&label), &sections);
                sections.push(Section::new(id, label, Vec::new()));
            }
            _ => {
                let mut blocks = Vec::new();
                collect_blocks(node, &mut blocks);
                if let Some(pending) = after_break.as_mut() {
                    pending.extend(blocks);
                } else if let Some(section) = sections.last_mut() {
                    section.body.extend(blocks);
                } else {
                    intro.extend(blocks);
                }
            }
        }
    }

    let footer = after_break
        .filter(|blocks| !blocks.is_empty())
        .map(|blocks| blocks.join(" "));
    Page::new(title, intro, sections, footer)
}

fn create_options() -> Options {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options
}

/// Turn a label into an anchor id: lowercase ASCII alphanumerics joined by `-`.
pub fn slugify(label: &str) -> String {
    let mut out = String::new();
    let mut last_dash = false;
    for ch in label.chars() {
        let lower = ch.to_ascii_lowercase();
        if lower.is_ascii_alphanumeric() {
            out.push(lower);
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }
    let slug = out.trim_matches('-').to_string();
    if slug.is_empty() {
        "section".to_string()
    } else {
        slug
    }
}

fn unique_id(base: &str, existing: &[Section]) -> String {
    if !existing.iter().any(|s| s.id == base) {
        return base.to_string();
    }
    (2..)
        .map(|n| format!("{base}-{n}"))
        .find(|candidate| !existing.iter().any(|s| &s.id == candidate))
        .unwrap_or_else(|| base.to_string())
}

/// Flatten a block node into plain-text paragraphs.
fn collect_blocks<'a>(node: &'a AstNode<'a>, blocks: &mut Vec<String>) {
    match &node.data.borrow().value {
        NodeValue::Paragraph | NodeValue::Heading(_) => {
            let text = extract_text(node);
            if !text.trim().is_empty() {
                blocks.push(text);
            }
        }
        NodeValue::CodeBlock(code) => {
            blocks.extend(
                code.literal
                    .lines()
                    .filter(|line| !line.trim().is_empty())
                    .map(|line| format!("  {line}")),
            );
        }
        NodeValue::Item(_) | NodeValue::TaskItem(_) => {
            let mut inner = Vec::new();
            for child in node.children() {
                collect_blocks(child, &mut inner);
            }
            if let Some((first, rest)) = inner.split_first() {
                blocks.push(format!("• {first}"));
                blocks.extend(rest.iter().cloned());
            }
        }
        NodeValue::BlockQuote => {
            let mut inner = Vec::new();
            for child in node.children() {
                collect_blocks(child, &mut inner);
            }
            blocks.extend(inner.into_iter().map(|line| format!("│ {line}")));
        }
        NodeValue::HtmlBlock(html) => {
            let text = html.literal.trim();
            if !text.is_empty() {
                blocks.push(text.to_string());
            }
        }
        _ => {
            for child in node.children() {
                collect_blocks(child, blocks);
            }
        }
    }
}

fn extract_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    extract_text_recursive(node, &mut text);
    text.trim().to_string()
}

fn extract_text_recursive<'a>(node: &'a AstNode<'a>, text: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(t) => text.push_str(t),
        NodeValue::Code(c) => {
            text.push('`');
            text.push_str(&c.literal);
            text.push('`');
        }
        NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
        _ => {
            for child in node.children() {
                extract_text_recursive(child, text);
            }
        }
    }
}
