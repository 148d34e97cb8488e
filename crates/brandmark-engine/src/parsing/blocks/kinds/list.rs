use std::sync::OnceLock;

use regex::Regex;

/// Bullet and numbered list markers.
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: [&'static str; 2] = ["- ", "* "];

    /// Text after a `- ` or `* ` marker.
    pub fn bullet(trimmed: &str) -> Option<&str> {
        Self::BULLETS
            .iter()
            .find_map(|marker| trimmed.strip_prefix(marker))
            .map(str::trim)
    }

    /// Text after a `12. ` marker. The number itself is discarded.
    pub fn numbered(trimmed: &str) -> Option<&str> {
        static NUMBERED: OnceLock<Regex> = OnceLock::new();
        let re = NUMBERED.get_or_init(|| Regex::new(r"^\d+\.\s+(.*)$").expect("Invalid list regex"));
        re.captures(trimmed)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullets() {
        assert_eq!(ListMarker::bullet("- item"), Some("item"));
        assert_eq!(ListMarker::bullet("* item"), Some("item"));
        assert_eq!(ListMarker::bullet("**bold** text"), None);
        assert_eq!(ListMarker::bullet("---"), None);
        assert_eq!(ListMarker::bullet("-item"), None);
    }

    #[test]
    fn numbered_ignores_declared_number() {
        assert_eq!(ListMarker::numbered("1. First"), Some("First"));
        assert_eq!(ListMarker::numbered("42. Answer"), Some("Answer"));
        assert_eq!(ListMarker::numbered("3.14 is pi"), None);
        assert_eq!(ListMarker::numbered("1."), None);
    }
}
