//! Closed vocabulary of bold labels that get semantic colors.

use crate::model::ColorRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelCategory {
    Positive,
    Warning,
    Analysis,
}

impl LabelCategory {
    pub fn color_role(self) -> ColorRole {
        match self {
            LabelCategory::Positive => ColorRole::Positive,
            LabelCategory::Warning => ColorRole::Warning,
            LabelCategory::Analysis => ColorRole::Analysis,
        }
    }
}

const LABELS: &[(&str, LabelCategory)] = &[
    ("key insight", LabelCategory::Positive),
    ("insight", LabelCategory::Positive),
    ("opportunity", LabelCategory::Positive),
    ("quick win", LabelCategory::Positive),
    ("win", LabelCategory::Positive),
    ("strength", LabelCategory::Positive),
    ("pro tip", LabelCategory::Positive),
    ("tip", LabelCategory::Positive),
    ("recommendation", LabelCategory::Positive),
    ("good news", LabelCategory::Positive),
    ("warning", LabelCategory::Warning),
    ("critical", LabelCategory::Warning),
    ("risk", LabelCategory::Warning),
    ("issue", LabelCategory::Warning),
    ("problem", LabelCategory::Warning),
    ("weakness", LabelCategory::Warning),
    ("threat", LabelCategory::Warning),
    ("urgent", LabelCategory::Warning),
    ("caution", LabelCategory::Warning),
    ("red flag", LabelCategory::Warning),
    ("analysis", LabelCategory::Analysis),
    ("key takeaway", LabelCategory::Analysis),
    ("takeaway", LabelCategory::Analysis),
    ("bottom line", LabelCategory::Analysis),
    ("why it matters", LabelCategory::Analysis),
    ("summary", LabelCategory::Analysis),
    ("verdict", LabelCategory::Analysis),
    ("what this means", LabelCategory::Analysis),
];

/// Looks up a label, ignoring case, surrounding whitespace and one trailing colon.
pub fn lookup(label: &str) -> Option<LabelCategory> {
    let trimmed = label.trim();
    let trimmed = trimmed.strip_suffix(':').unwrap_or(trimmed).trim_end();
    LABELS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
        .map(|&(_, category)| category)
}

/// Label color for a whole phrase or, failing that, for the part before its first colon.
pub fn lookup_prefixed(text: &str) -> Option<LabelCategory> {
    lookup(text).or_else(|| {
        let (head, _) = text.split_once(':')?;
        lookup(head)
    })
}
