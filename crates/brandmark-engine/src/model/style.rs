use serde::{Deserialize, Serialize};

/// Semantic color slot. Backends map each role to a concrete brand color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    /// Ordinary body copy.
    Text,
    Heading,
    Accent,
    /// Positive labels such as "Key Insight" or "Quick Win".
    Positive,
    /// Warning labels such as "Warning" or "Critical".
    Warning,
    /// Analysis labels such as "Key Takeaway" or "Bottom Line".
    Analysis,
    Muted,
    CoverPrimary,
    CoverSecondary,
    CalloutBackground,
    CalloutHeadline,
    CalloutText,
    TableHeaderFill,
    TableHeaderText,
    /// Light background for even data rows of a table.
    BandedRow,
    StatValue,
}

impl ColorRole {
    pub const ALL: [ColorRole; 16] = [
        ColorRole::Text,
        ColorRole::Heading,
        ColorRole::Accent,
        ColorRole::Positive,
        ColorRole::Warning,
        ColorRole::Analysis,
        ColorRole::Muted,
        ColorRole::CoverPrimary,
        ColorRole::CoverSecondary,
        ColorRole::CalloutBackground,
        ColorRole::CalloutHeadline,
        ColorRole::CalloutText,
        ColorRole::TableHeaderFill,
        ColorRole::TableHeaderText,
        ColorRole::BandedRow,
        ColorRole::StatValue,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontRole {
    Heading,
    Body,
    /// Large display face used for cover titles and stat values.
    Display,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeRole {
    Cover,
    CoverSecondary,
    H1,
    H2,
    Subtitle,
    Body,
    Stat,
}

/// Fully resolved style for a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    pub color: ColorRole,
    pub font: FontRole,
    pub size: SizeRole,
    pub bold: bool,
    pub italic: bool,
}

impl TextStyle {
    pub const fn new(color: ColorRole, font: FontRole, size: SizeRole) -> Self {
        Self {
            color,
            font,
            size,
            bold: false,
            italic: false,
        }
    }

    /// Ambient style for body copy.
    pub const BODY: TextStyle = TextStyle::new(ColorRole::Text, FontRole::Body, SizeRole::Body);

    /// Ambient style for text inside callout boxes.
    pub const CALLOUT: TextStyle = TextStyle::BODY.with_color(ColorRole::CalloutText);

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub const fn with_color(mut self, color: ColorRole) -> Self {
        self.color = color;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::BODY
    }
}

/// A run of text with one resolved style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledSpan {
    pub text: String,
    pub style: TextStyle,
}

impl StyledSpan {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// One line inside a callout box. Bullet lines carry a marker glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledLine {
    pub marker: Option<char>,
    pub spans: Vec<StyledSpan>,
}

impl StyledLine {
    /// Concatenated text of every span, without the marker.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}
