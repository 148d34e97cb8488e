use crate::model::{Block, StyledLine, StyledSpan};

/// One line per block, e.g. `Heading(1) "Overview"`.
pub fn describe(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(describe_block)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn describe_block(block: &Block) -> String {
    match block {
        Block::Heading(h) => format!("Heading({}) {:?}", h.level, h.text),
        Block::SectionSubtitle { text, style } => {
            format!("SectionSubtitle {text:?} {:?}", style.color)
        }
        Block::Paragraph { spans } => format!("Paragraph {}", spans_text(spans)),
        Block::BulletItem { spans } => format!("BulletItem {}", spans_text(spans)),
        Block::NumberedItem { spans, ordinal } => {
            format!("NumberedItem({ordinal}) {}", spans_text(spans))
        }
        Block::Rule => "Rule".to_string(),
        Block::Table(t) => format!("Table {:?} rows={:?}", t.headers, t.rows),
        Block::InfoTable { rows } => format!("InfoTable {rows:?}"),
        Block::CalloutBox(c) => {
            let body = c.body.iter().map(line_text).collect::<Vec<_>>();
            format!("CalloutBox headline={:?} body={body:?}", c.headline)
        }
        Block::StatCallout {
            value,
            label,
            caption,
        } => format!("StatCallout {value:?} {label:?} caption={caption:?}"),
        Block::CoverTitle(c) => format!("CoverTitle {:?} {:?}", c.line1, c.line2),
        Block::CoverSubtitle { text, .. } => format!("CoverSubtitle {text:?}"),
        Block::PageBreak => "PageBreak".to_string(),
        Block::Spacer => "Spacer".to_string(),
    }
}

fn spans_text(spans: &[StyledSpan]) -> String {
    let text: String = spans.iter().map(|s| s.text.as_str()).collect();
    format!("{text:?}")
}

fn line_text(line: &StyledLine) -> String {
    match line.marker {
        Some(m) => format!("{m} {}", line.text()),
        None => line.text(),
    }
}
