use crate::{model::Block, parsing::ParsedDoc};

/// Validates scanner output invariants.
///
/// Asserts that:
/// - All block spans are within bounds and in source order
/// - `settled` does not exceed the block count
/// - No two page breaks or two spacers are adjacent
/// - At most one cover title, and no heading or page break before it
/// - The output never starts with a page break or spacer
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(source_len: usize, doc: &ParsedDoc) {
    assert!(
        doc.settled <= doc.blocks.len(),
        "settled {} exceeds block count {}",
        doc.settled,
        doc.blocks.len()
    );

    let mut prev_start = 0;
    for b in &doc.blocks {
        assert!(
            b.span.start <= b.span.end && b.span.end <= source_len,
            "block span out of bounds: {:?} (source len: {})",
            b.span,
            source_len
        );
        assert!(
            b.span.start >= prev_start,
            "block spans out of order at {:?}",
            b.span
        );
        prev_start = b.span.start;
    }

    for pair in doc.blocks.windows(2) {
        let (a, b) = (&pair[0].block, &pair[1].block);
        assert!(
            !(matches!(a, Block::PageBreak) && matches!(b, Block::PageBreak)),
            "adjacent page breaks at {:?}",
            pair[1].span
        );
        assert!(
            !(matches!(a, Block::Spacer) && matches!(b, Block::Spacer)),
            "adjacent spacers at {:?}",
            pair[1].span
        );
    }

    let mut body_started = false;
    let mut covers = 0;
    for b in &doc.blocks {
        match b.block {
            Block::CoverTitle(_) => {
                covers += 1;
                assert!(covers == 1, "second cover title at {:?}", b.span);
                assert!(!body_started, "cover title after body start at {:?}", b.span);
            }
            Block::Heading(_) | Block::PageBreak => body_started = true,
            _ => {}
        }
    }

    if let Some(first) = doc.blocks.first() {
        assert!(
            !matches!(first.block, Block::PageBreak | Block::Spacer),
            "document starts with {}",
            first.block.kind_name()
        );
    }
}
