/// ATX headings (`#` through `######`) and the two-part cover title.
pub struct AtxHeading;

impl AtxHeading {
    pub const MARK: char = '#';
    pub const MAX_DEPTH: usize = 6;
    /// Splits a cover title into its two lines.
    pub const COVER_JOIN: char = '&';

    /// Depth and text of a heading line, or `None` if the line is not one.
    ///
    /// The marks must be followed by whitespace, so `#hashtag` is text.
    pub fn parse(trimmed: &str) -> Option<(u8, &str)> {
        let depth = trimmed.chars().take_while(|&c| c == Self::MARK).count();
        if depth == 0 || depth > Self::MAX_DEPTH {
            return None;
        }
        let rest = &trimmed[depth..];
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let text = rest.trim();
        (!text.is_empty()).then_some((depth as u8, text))
    }

    /// Splits `Hello & World` into `("Hello", "& World")`.
    ///
    /// Both halves must be non-empty; the second keeps the ampersand.
    pub fn split_cover_title(text: &str) -> Option<(String, String)> {
        let (first, second) = text.split_once(Self::COVER_JOIN)?;
        let first = first.trim();
        let second = second.trim();
        if first.is_empty() || second.is_empty() {
            return None;
        }
        Some((first.to_string(), format!("{} {second}", Self::COVER_JOIN)))
    }
}
