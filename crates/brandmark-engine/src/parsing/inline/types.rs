use crate::parsing::rope::span::Span;

/// A parsed inline node with byte spans into the source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text outside any emphasis marker.
    Text(Span),
    /// `**strong**` text.
    Strong {
        /// Full span including both `**` delimiters.
        full: Span,
        /// Text between the delimiters.
        inner: Span,
    },
    /// `*emphasis*` text.
    Emphasis { full: Span, inner: Span },
}

impl InlineNode {
    /// The span holding visible text (delimiters excluded).
    pub fn inner(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::Strong { inner, .. } | InlineNode::Emphasis { inner, .. } => *inner,
        }
    }
}
