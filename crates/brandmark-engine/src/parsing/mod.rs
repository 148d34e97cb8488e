//! # Parsing
//!
//! Turns report markdown into the flat [`Block`] list.
//!
//! A scan is a pure function of the input text: every call starts from byte
//! zero with fresh scanner state. [`ParsedDoc::settled`] marks how many of
//! the leading blocks are final, which is what progressive rendering relies
//! on when the input is still growing.

pub mod blocks;
pub mod inline;
pub mod rope;
pub mod snapshot;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use crate::model::Block;
use blocks::{BlockBuilder, BlockNode, MarkdownLineClassifier};
use rope::lines_with_spans;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
    /// Number of leading blocks that appending text can never change.
    /// Blocks past this index belong to an open run or an unterminated line.
    pub settled: usize,
}

impl ParsedDoc {
    pub fn settled_blocks(&self) -> &[BlockNode] {
        &self.blocks[..self.settled]
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks.into_iter().map(|n| n.block).collect()
    }
}

pub fn parse_document(rope: &Rope) -> ParsedDoc {
    parse_document_prefix(rope, rope.len())
}

/// Scans only the lines that end at or before `end`.
///
/// `end` is expected to sit on a line boundary; a line straddling it is
/// skipped entirely.
pub fn parse_document_prefix(rope: &Rope, end: usize) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(rope).take_while(|lr| lr.span.end <= end) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    builder.finish()
}

pub fn parse_str(markdown: &str) -> ParsedDoc {
    parse_document(&Rope::from(markdown))
}

/// Scans a complete document into blocks.
pub fn scan(markdown: &str) -> Vec<Block> {
    parse_str(markdown).into_blocks()
}
