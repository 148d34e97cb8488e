use super::kinds::{AtxHeading, Callout, Directive, ListMarker, StatFields, TableRow, ThematicBreak};

/// Which block a single trimmed line opens, before any document context
/// is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpen {
    CoverEnd,
    Stat(StatFields),
    Quote,
    TableRow,
    Heading { depth: u8, text: String },
    Bullet(String),
    Numbered(String),
    Rule,
}

/// First matching opener in dispatch order, or `None` for plain text.
pub fn try_open(trimmed: &str) -> Option<BlockOpen> {
    if Directive::is_cover_end(trimmed) {
        return Some(BlockOpen::CoverEnd);
    }
    if let Some(stat) = Directive::stat(trimmed) {
        return Some(BlockOpen::Stat(stat));
    }
    if Callout::is_quote_line(trimmed) {
        return Some(BlockOpen::Quote);
    }
    if TableRow::is_table_line(trimmed) {
        return Some(BlockOpen::TableRow);
    }
    if let Some((depth, text)) = AtxHeading::parse(trimmed) {
        return Some(BlockOpen::Heading {
            depth,
            text: text.to_string(),
        });
    }
    if let Some(text) = ListMarker::bullet(trimmed) {
        return Some(BlockOpen::Bullet(text.to_string()));
    }
    if let Some(text) = ListMarker::numbered(trimmed) {
        return Some(BlockOpen::Numbered(text.to_string()));
    }
    if ThematicBreak::is_rule(trimmed) {
        return Some(BlockOpen::Rule);
    }
    None
}
