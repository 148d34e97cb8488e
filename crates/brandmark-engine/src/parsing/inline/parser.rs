use crate::parsing::rope::span::Span;

use super::{
    cursor::Cursor,
    kinds::{Emphasis, Strong},
    types::InlineNode,
};

/// Parses one line fragment into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset where `s` begins (for absolute span positions)
/// - `s`: The text to parse
///
/// # Precedence
/// Strong runs (`**...**`) are split out first, non-greedy and without
/// nesting. Emphasis (`*...*`) is then looked for only inside the text left
/// between strong runs. Unclosed delimiters stay in the surrounding text.
///
/// # Returns
/// Nodes covering the whole input in order; text between constructs is
/// emitted as `InlineNode::Text`.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = 0usize;

    while !cur.eof() {
        let at = cur.i;
        if let Some(node) = try_parse_strong(&mut cur) {
            push_plain(&mut out, s, base, text_start, at);
            text_start = cur.i;
            out.push(node);
            continue;
        }
        cur.bump();
    }

    push_plain(&mut out, s, base, text_start, s.len());
    out
}

/// Emits the text between strong runs, splitting out emphasis.
fn push_plain(out: &mut Vec<InlineNode>, s: &str, base: usize, start: usize, end: usize) {
    if end <= start {
        return;
    }
    let mut cur = Cursor::new(&s[start..end], base + start);
    let mut text_start = cur.pos();

    while !cur.eof() {
        let at = cur.pos();
        if let Some(node) = try_parse_emphasis(&mut cur) {
            flush_text(out, text_start, at);
            text_start = cur.pos();
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(out, text_start, cur.pos());
}

fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
    if end > start {
        out.push(InlineNode::Text(Span { start, end }));
    }
}

/// Attempts to parse `**inner**` at the current position.
///
/// The inner text must be at least one byte long; the closer is the first
/// `**` after that. On failure the cursor is left untouched.
fn try_parse_strong(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.starts_with(Strong::DELIM) {
        return None;
    }

    let open = cur.i;
    let inner_start = open + Strong::DELIM.len();
    let close = cur.find_from(inner_start + 1, Strong::DELIM)?;
    let end = close + Strong::DELIM.len();

    let node = InlineNode::Strong {
        full: Span::new(cur.base + open, cur.base + end),
        inner: Span::new(cur.base + inner_start, cur.base + close),
    };
    cur.seek(end);
    Some(node)
}

/// Attempts to parse `*inner*` at the current position.
fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(Emphasis::DELIM) {
        return None;
    }

    let open = cur.i;
    let inner_start = open + 1;
    let close = cur.find_from(inner_start + 1, &[Emphasis::DELIM])?;
    let end = close + 1;

    let node = InlineNode::Emphasis {
        full: Span::new(cur.base + open, cur.base + end),
        inner: Span::new(cur.base + inner_start, cur.base + close),
    };
    cur.seek(end);
    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(s: &str) -> Vec<(&'static str, String)> {
        parse_inline(0, s)
            .into_iter()
            .map(|n| {
                let kind = match n {
                    InlineNode::Text(_) => "text",
                    InlineNode::Strong { .. } => "strong",
                    InlineNode::Emphasis { .. } => "em",
                };
                let sp = n.inner();
                (kind, s[sp.start..sp.end].to_string())
            })
            .collect()
    }

    #[test]
    fn parse_simple_text() {
        let nodes = parse_inline(0, "hello world");
        assert_eq!(nodes, vec![InlineNode::Text(Span { start: 0, end: 11 })]);
    }

    #[test]
    fn parse_strong_span() {
        let nodes = parse_inline(0, "**bold**");
        assert_eq!(
            nodes,
            vec![InlineNode::Strong {
                full: Span::new(0, 8),
                inner: Span::new(2, 6),
            }]
        );
    }

    #[test]
    fn strong_is_non_greedy() {
        assert_eq!(
            texts("**a** and **b**"),
            vec![
                ("strong", "a".to_string()),
                ("text", " and ".to_string()),
                ("strong", "b".to_string()),
            ]
        );
    }

    #[test]
    fn emphasis_between_strong_runs() {
        assert_eq!(
            texts("**Note:** this is *really* fast"),
            vec![
                ("strong", "Note:".to_string()),
                ("text", " this is ".to_string()),
                ("em", "really".to_string()),
                ("text", " fast".to_string()),
            ]
        );
    }

    #[test]
    fn unclosed_markers_stay_text() {
        assert_eq!(texts("**unclosed"), vec![("text", "**unclosed".to_string())]);
        assert_eq!(texts("2 * 3 = 6"), vec![("text", "2 * 3 = 6".to_string())]);
    }

    #[test]
    fn base_offset_is_applied() {
        let nodes = parse_inline(100, "x *y*");
        assert_eq!(nodes[0], InlineNode::Text(Span::new(100, 102)));
        assert_eq!(
            nodes[1],
            InlineNode::Emphasis {
                full: Span::new(102, 105),
                inner: Span::new(103, 104),
            }
        );
    }

    #[test]
    fn multibyte_text_keeps_char_boundaries() {
        assert_eq!(
            texts("café **über** naïve"),
            vec![
                ("text", "café ".to_string()),
                ("strong", "über".to_string()),
                ("text", " naïve".to_string()),
            ]
        );
    }
}
