use crate::model::{StyledSpan, TextStyle};

use super::{labels, parser::parse_inline, types::InlineNode};

/// Turns a line fragment into styled spans.
///
/// `ambient` is the style plain text inherits. Strong runs are bolded and,
/// when their text is a known label, recolored by label category; emphasis
/// runs are italicized.
pub fn format(text: &str, ambient: TextStyle) -> Vec<StyledSpan> {
    parse_inline(0, text)
        .into_iter()
        .filter_map(|node| {
            let inner = node.inner();
            let content = &text[inner.start..inner.end];
            if content.is_empty() {
                return None;
            }
            let style = match node {
                InlineNode::Text(_) => ambient,
                InlineNode::Strong { .. } => {
                    let color = labels::lookup(content)
                        .map(|c| c.color_role())
                        .unwrap_or(ambient.color);
                    ambient.bold().with_color(color)
                }
                InlineNode::Emphasis { .. } => ambient.italic(),
            };
            Some(StyledSpan::new(content, style))
        })
        .collect()
}

/// Text with emphasis markers removed.
pub fn plain_text(text: &str) -> String {
    parse_inline(0, text)
        .into_iter()
        .map(|node| {
            let inner = node.inner();
            &text[inner.start..inner.end]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColorRole;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_text_inherits_ambient_style() {
        let spans = format("just words", TextStyle::BODY);
        assert_eq!(spans, vec![StyledSpan::new("just words", TextStyle::BODY)]);
    }

    #[test]
    fn known_label_gets_category_color() {
        let spans = format("**Warning** the cache is cold", TextStyle::BODY);
        assert_eq!(spans[0].text, "Warning");
        assert_eq!(spans[0].style.color, ColorRole::Warning);
        assert!(spans[0].style.bold);
        assert_eq!(spans[1].style, TextStyle::BODY);
    }

    #[test]
    fn unknown_bold_keeps_ambient_color() {
        let ambient = TextStyle::CALLOUT;
        let spans = format("**Revenue** grew", ambient);
        assert_eq!(spans[0].style, ambient.bold());
    }

    #[test]
    fn emphasis_is_italic() {
        let spans = format("a *b* c", TextStyle::BODY);
        assert_eq!(spans.len(), 3);
        assert!(spans[1].style.italic);
        assert!(!spans[1].style.bold);
    }

    #[test]
    fn plain_text_strips_markers() {
        assert_eq!(plain_text("**Bold** and *soft*"), "Bold and soft");
        assert_eq!(plain_text("no markers"), "no markers");
        assert_eq!(plain_text("**open"), "**open");
    }

    #[test]
    fn empty_input_yields_no_spans() {
        assert!(format("", TextStyle::BODY).is_empty());
    }
}
