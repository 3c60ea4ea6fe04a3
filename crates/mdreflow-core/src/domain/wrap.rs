//! Wrapping strategies for the three reflowable line shapes.
//!
//! All positions are `char` indices. Handlers return `None` when the line
//! must be emitted unchanged.

use super::line::{LINK, char_len, contains_link};
use super::value_objects::LineWidth;

/// Headings are hard-cut: the first chunk gets what is left after the
/// prefix, every following chunk gets the full width.
pub fn wrap_heading(prefix: &str, text: &str, width: LineWidth) -> Option<Vec<String>> {
    let text: Vec<char> = text.chars().collect();
    let first = width.budget_after(char_len(prefix));

    // Only the text is compared against the narrowed budget here.
    if text.len() <= first {
        return None;
    }

    let mut lines = vec![format!("{prefix}{}", collect(&text[..first]))];
    lines.extend(text[first..].chunks(width.get()).map(collect));
    Some(lines)
}

/// List items break at word boundaries; continuation lines are indented to
/// line up with the text after the marker.
pub fn wrap_list_item(prefix: &str, text: &str, width: LineWidth) -> Option<Vec<String>> {
    let text: Vec<char> = text.chars().collect();
    let prefix_len = char_len(prefix);
    let first = width.budget_after(prefix_len);

    if text.len() <= first {
        return None;
    }

    let split = break_point(&text, first);
    let mut lines = vec![format!("{prefix}{}", collect(&text[..split]))];

    let indent = " ".repeat(prefix_len);
    lines.extend(greedy_wrap(&indent, trim(&text[split..]), continuation_budget(width, prefix_len)));
    Some(lines)
}

/// Plain paragraph text. Leading whitespace is kept on every produced line;
/// `[text](url)` spans are kept whole whenever they fit.
pub fn wrap_paragraph(line: &str, width: LineWidth) -> Vec<String> {
    let content = line.trim();
    let indent = &line[..line.len() - line.trim_start().len()];
    let budget = continuation_budget(width, char_len(indent));
    let chars: Vec<char> = content.chars().collect();

    if contains_link(content) {
        wrap_around_links(indent, &chars, budget)
    } else {
        greedy_wrap(indent, &chars, budget)
    }
}

/// Repeatedly take the longest prefix ending before a space within `budget`,
/// falling back to a hard cut.
fn greedy_wrap(indent: &str, text: &[char], budget: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        if rest.len() <= budget {
            lines.push(format!("{indent}{}", collect(rest)));
            break;
        }

        let split = break_point(rest, budget);
        lines.push(format!("{indent}{}", collect(&rest[..split])));
        rest = trim(&rest[split..]);
    }

    lines
}

/// Cursor-based wrap that avoids splitting links.
///
/// A link is cut only when it starts at the cursor and is itself wider than
/// the budget.
fn wrap_around_links(indent: &str, text: &[char], budget: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        if text.len() - pos <= budget {
            lines.push(format!("{indent}{}", collect(&text[pos..])));
            break;
        }

        let (end, next) = match next_link(&text[pos..]) {
            Some((start, stop)) if start < budget => {
                if stop <= budget {
                    (pos + stop, pos + stop)
                } else if start > 0 {
                    (pos + start, pos + start)
                } else {
                    (pos + budget, pos + budget)
                }
            }
            _ => match last_space(text, pos + budget) {
                Some(space) if space > pos => (space, space + 1),
                _ => (pos + budget, pos + budget),
            },
        };

        lines.push(format!("{indent}{}", collect(&text[pos..end])));
        pos = next;
    }

    lines
}

/// `(start, end)` of the first link in `text`, as char offsets.
fn next_link(text: &[char]) -> Option<(usize, usize)> {
    let haystack = collect(text);
    let found = LINK.find(&haystack)?;
    let start = char_len(&haystack[..found.start()]);
    Some((start, start + char_len(found.as_str())))
}

/// Last space at or before `limit`, or a hard cut at `limit`.
fn break_point(text: &[char], limit: usize) -> usize {
    last_space(text, limit)
        .filter(|&space| space > 0)
        .unwrap_or(limit)
}

fn last_space(text: &[char], limit: usize) -> Option<usize> {
    let end = limit.min(text.len().checked_sub(1)?);
    text[..=end].iter().rposition(|&c| c == ' ')
}

/// Budgets that would leave no room are clamped so every pass makes progress.
fn continuation_budget(width: LineWidth, indent_len: usize) -> usize {
    width.budget_after(indent_len).max(1)
}

fn trim(text: &[char]) -> &[char] {
    let start = text.iter().position(|c| !c.is_whitespace()).unwrap_or(text.len());
    let end = text
        .iter()
        .rposition(|c| !c.is_whitespace())
        .map_or(start, |i| i + 1);
    &text[start..end]
}

fn collect(chars: &[char]) -> String {
    chars.iter().collect()
}
