use crate::parsing::inline::kinds::Strong;

/// Blockquote runs, rendered as callout boxes.
///
/// All blockquote-related syntax knowledge lives here: the prefix, the
/// lone-bold headline, bullet markers inside the box and the status-verb
/// lines that never reach the document.
pub struct Callout;

impl Callout {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Glyph drawn in front of bullet lines inside the box.
    pub const CHECK: char = '✓';

    const BULLETS: [&'static str; 3] = ["- ", "* ", "• "];

    /// Progress narration emitted while a report is being generated.
    const STATUS_VERBS: [&'static str; 20] = [
        "Pulling",
        "Fetching",
        "Researching",
        "Building",
        "Loading",
        "Analyzing",
        "Analysing",
        "Computing",
        "Gathering",
        "Checking",
        "Generating",
        "Starting",
        "Running",
        "Searching",
        "Scanning",
        "Crawling",
        "Auditing",
        "Discovering",
        "Designing",
        "Processing",
    ];

    pub fn is_quote_line(trimmed: &str) -> bool {
        trimmed.starts_with(Self::PREFIX)
    }

    /// Strips blockquote prefixes from a line, returning (depth, byte_offset).
    ///
    /// Handles `> text`, `>> nested` and `> > spaced nested`; nesting is
    /// flattened into the same box.
    pub fn strip_prefixes(s: &str) -> (u8, usize) {
        let b = s.as_bytes();
        let mut i = 0usize;
        let mut depth = 0u8;

        loop {
            while i < b.len() && b[i] == b' ' {
                i += 1;
            }
            if i < b.len() && b[i] == (Self::PREFIX as u8) {
                depth = depth.saturating_add(1);
                i += 1;
                if i < b.len() && b[i] == b' ' {
                    i += 1;
                }
            } else {
                break;
            }
        }
        (depth, i)
    }

    /// Line content with every quote prefix removed and whitespace trimmed.
    pub fn content(line: &str) -> &str {
        let (_, idx) = Self::strip_prefixes(line);
        line[idx..].trim()
    }

    /// True when the content starts with a status verb as a whole word.
    pub fn is_status_line(content: &str) -> bool {
        Self::STATUS_VERBS.iter().any(|verb| {
            content.strip_prefix(verb).is_some_and(|rest| {
                rest.chars().next().is_none_or(|c| !c.is_alphabetic())
            })
        })
    }

    /// Headline text when the content is a single `**bold**` run.
    pub fn headline(content: &str) -> Option<&str> {
        let delim = Strong::DELIM_STR;
        let inner = content.strip_prefix(delim)?.strip_suffix(delim)?;
        if inner.contains(delim) {
            return None;
        }
        let inner = inner.trim();
        let inner = inner.strip_suffix(':').unwrap_or(inner).trim_end();
        (!inner.is_empty()).then_some(inner)
    }

    /// Body text of a bullet line inside the box.
    pub fn bullet_body(content: &str) -> Option<&str> {
        Self::BULLETS
            .iter()
            .find_map(|marker| content.strip_prefix(marker))
            .map(str::trim)
    }
}
