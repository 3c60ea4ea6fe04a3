//! Line classification.
//!
//! Every input line is classified exactly once, in a fixed priority order:
//! fence markers, protected lines, lines that already fit, then the three
//! reflowable shapes. The reflow engine dispatches on the result.

use std::sync::LazyLock;

use regex::Regex;

use super::value_objects::LineWidth;

/// Fenced code block marker.
pub const FENCE_MARKER: &str = "```";

/// A full table row: starts and ends with a pipe.
static TABLE_ROW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\|.*\|$").unwrap());

/// A line made of an HTML tag pair, e.g. `<img src="..."/>` or `<p>text</p>`.
static HTML_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^<.*>.*>$").unwrap());

/// ATX heading: one to six `#` followed by whitespace.
static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6}\s+)(.*)$").unwrap());

/// Bullet (`*`, `-`, `+`) or ordered (`1.`) list item.
static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*(?:[*+-]|\d+\.)\s+)(.*)$").unwrap());

/// Inline markdown link `[text](url)`.
pub(crate) static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]\([^)]*\)").unwrap());

/// Shape of a single line, borrowed from the document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Opens or closes a fenced code block.
    Fence,
    /// Never reflowed, whatever its length.
    Protected,
    /// Already fits the width.
    Short,
    Heading { prefix: &'a str, text: &'a str },
    ListItem { prefix: &'a str, text: &'a str },
    Paragraph,
}

impl LineKind<'_> {
    /// Whether the reflow engine has to look at this line at all.
    pub const fn is_reflowable(&self) -> bool {
        matches!(
            self,
            Self::Heading { .. } | Self::ListItem { .. } | Self::Paragraph
        )
    }
}

/// Classify `line` given the fence state *before* the line.
pub fn classify(line: &str, in_fence: bool, width: LineWidth) -> LineKind<'_> {
    if is_fence(line) {
        return LineKind::Fence;
    }
    if in_fence || is_protected(line) {
        return LineKind::Protected;
    }
    if char_len(line) <= width.get() {
        return LineKind::Short;
    }
    if let Some((prefix, text)) = split_prefix(&HEADING, line) {
        return LineKind::Heading { prefix, text };
    }
    if let Some((prefix, text)) = split_prefix(&LIST_ITEM, line) {
        return LineKind::ListItem { prefix, text };
    }
    LineKind::Paragraph
}

pub fn is_fence(line: &str) -> bool {
    line.trim().starts_with(FENCE_MARKER)
}

/// Indented code, table rows, HTML, blank lines and comments.
pub fn is_protected(line: &str) -> bool {
    let trimmed = line.trim();
    line.starts_with("    ")
        || line.starts_with('\t')
        || TABLE_ROW.is_match(line)
        || HTML_BLOCK.is_match(line)
        || trimmed.is_empty()
        || trimmed.starts_with("<!--")
        || trimmed.ends_with("-->")
}

pub fn contains_link(text: &str) -> bool {
    LINK.is_match(text)
}

/// Length in columns.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn split_prefix<'a>(pattern: &Regex, line: &'a str) -> Option<(&'a str, &'a str)> {
    let caps = pattern.captures(line)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}
