/// Bold delimiter. Strong runs are non-greedy and never nest.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static [u8; 2] = b"**";
    pub const DELIM_STR: &'static str = "**";
}

/// Italic delimiter, matched only in text left over after strong runs.
pub struct Emphasis;

impl Emphasis {
    pub const DELIM: u8 = b'*';

    /// True when the whole (trimmed) line is one `*italic*` run.
    pub fn is_lone_italic_line(s: &str) -> bool {
        let b = s.as_bytes();
        b.len() >= 3
            && b[0] == Self::DELIM
            && b[b.len() - 1] == Self::DELIM
            && !s[1..s.len() - 1].contains(Self::DELIM as char)
            && !s[1..s.len() - 1].trim().is_empty()
    }

    /// Inner text of a lone italic line.
    pub fn strip_lone(s: &str) -> Option<&str> {
        Self::is_lone_italic_line(s).then(|| s[1..s.len() - 1].trim())
    }
}
