//! The line reflow engine.
//!
//! A single pass over a document's lines. The only state carried from one
//! line to the next is whether the scan is inside a fenced code block.

use super::line::{LineKind, classify};
use super::value_objects::LineWidth;
use super::wrap::{wrap_heading, wrap_list_item, wrap_paragraph};

/// Result of reflowing one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflowOutcome {
    /// The document text, rejoined with `\n`.
    pub text: String,
    /// `true` iff at least one line was rewritten.
    pub modified: bool,
    /// Number of input lines that were rewritten.
    pub wrapped_lines: usize,
}

/// Reflow a whole document.
///
/// Lines are split on `\n` so a trailing newline survives as a final empty
/// line.
pub fn reflow(text: &str, width: LineWidth) -> ReflowOutcome {
    let lines: Vec<&str> = text.split('\n').collect();
    let (lines, wrapped_lines) = reflow_lines(&lines, width);

    ReflowOutcome {
        text: lines.join("\n"),
        modified: wrapped_lines > 0,
        wrapped_lines,
    }
}

/// Reflow a sequence of lines. Returns the output lines and the number of
/// input lines that were rewritten.
pub fn reflow_lines(lines: &[&str], width: LineWidth) -> (Vec<String>, usize) {
    let mut output = Vec::with_capacity(lines.len());
    let mut in_fence = false;
    let mut wrapped = 0;

    for &line in lines {
        let kind = classify(line, in_fence, width);

        let replacement = match kind {
            LineKind::Fence => {
                in_fence = !in_fence;
                None
            }
            LineKind::Protected | LineKind::Short => None,
            LineKind::Heading { prefix, text } => wrap_heading(prefix, text, width),
            LineKind::ListItem { prefix, text } => wrap_list_item(prefix, text, width),
            LineKind::Paragraph => Some(wrap_paragraph(line, width)),
        };

        match replacement {
            Some(lines) if !is_identity(&lines, line) => {
                wrapped += 1;
                output.extend(lines);
            }
            _ => output.push(line.to_owned()),
        }
    }

    (output, wrapped)
}

fn is_identity(lines: &[String], original: &str) -> bool {
    matches!(lines, [only] if only == original)
}
