use std::sync::OnceLock;

use regex::Regex;

/// Fields of a `[STAT:value:label:caption]` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatFields {
    pub value: String,
    pub label: String,
    pub caption: Option<String>,
}

/// Bracketed single-line directives.
pub struct Directive;

impl Directive {
    pub const COVER_END: &'static str = "[COVER_END]";

    pub fn is_cover_end(trimmed: &str) -> bool {
        trimmed == Self::COVER_END
    }

    /// Parses a stat directive. Value and label are required; an empty or
    /// missing caption is `None`. Anything malformed returns `None` and the
    /// line is treated as ordinary text.
    pub fn stat(trimmed: &str) -> Option<StatFields> {
        static STAT: OnceLock<Regex> = OnceLock::new();
        let re = STAT.get_or_init(|| {
            Regex::new(r"^\[STAT:([^:\]]*):([^:\]]*)(?::([^\]]*))?\]$").expect("Invalid stat regex")
        });
        let caps = re.captures(trimmed)?;
        let value = caps.get(1)?.as_str().trim();
        let label = caps.get(2)?.as_str().trim();
        if value.is_empty() || label.is_empty() {
            return None;
        }
        let caption = caps
            .get(3)
            .map(|m| m.as_str().trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string);
        Some(StatFields {
            value: value.to_string(),
            label: label.to_string(),
            caption,
        })
    }
}

/// Horizontal rule. Only the exact three-dash line qualifies.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const RULE: &'static str = "---";

    pub fn is_rule(trimmed: &str) -> bool {
        trimmed == Self::RULE
    }
}
