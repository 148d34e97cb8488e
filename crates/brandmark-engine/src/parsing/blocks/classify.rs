use crate::parsing::rope::{lines::LineRef, span::Span};

use super::open::{BlockOpen, try_open};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope.
    pub line: Span,
    /// Line text with surrounding whitespace and the newline removed.
    pub text: String,
    pub is_blank: bool,
    /// False only for the last line of a buffer that is still growing.
    pub terminated: bool,
    /// The block this line would open, if any.
    pub open: Option<BlockOpen>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let trimmed = lr.text.trim();
        LineClass {
            line: lr.span,
            text: trimmed.to_string(),
            is_blank: trimmed.is_empty(),
            terminated: lr.is_terminated(),
            open: try_open(trimmed),
        }
    }
}
