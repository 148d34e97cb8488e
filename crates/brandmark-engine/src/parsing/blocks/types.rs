use serde::Serialize;

use crate::{model::Block, parsing::rope::span::Span};

/// A scanned block with the byte span of the source lines that produced it.
///
/// Synthesized blocks (the `PageBreak` in front of a section heading) share
/// the span of the line that triggered them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockNode {
    pub block: Block,
    pub span: Span,
}
