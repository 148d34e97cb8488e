use serde::{Deserialize, Serialize};

use super::style::{ColorRole, StyledLine, StyledSpan, TextStyle};

/// One node of the scanned document, in reading order.
///
/// A scan returns a flat `Vec<Block>`; pages are implied by `PageBreak`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading(Heading),
    /// Lone italic line directly under a heading.
    SectionSubtitle {
        text: String,
        style: TextStyle,
    },
    Paragraph {
        spans: Vec<StyledSpan>,
    },
    BulletItem {
        spans: Vec<StyledSpan>,
    },
    /// Numbered list entry. `ordinal` counts from 1 within a run and ignores
    /// whatever number the source line declared.
    NumberedItem {
        spans: Vec<StyledSpan>,
        ordinal: u32,
    },
    /// Horizontal divider, drawn as a border by the backend.
    Rule,
    Table(Table),
    /// Label/value table detected from an all-empty header row.
    InfoTable {
        rows: Vec<(String, String)>,
    },
    CalloutBox(CalloutBox),
    StatCallout {
        value: String,
        label: String,
        caption: Option<String>,
    },
    CoverTitle(CoverTitle),
    CoverSubtitle {
        text: String,
        style: TextStyle,
    },
    PageBreak,
    /// Collapsed run of blank lines.
    Spacer,
}

impl Block {
    /// Short variant name, used by logs and test descriptions.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading(_) => "Heading",
            Block::SectionSubtitle { .. } => "SectionSubtitle",
            Block::Paragraph { .. } => "Paragraph",
            Block::BulletItem { .. } => "BulletItem",
            Block::NumberedItem { .. } => "NumberedItem",
            Block::Rule => "Rule",
            Block::Table(_) => "Table",
            Block::InfoTable { .. } => "InfoTable",
            Block::CalloutBox(_) => "CalloutBox",
            Block::StatCallout { .. } => "StatCallout",
            Block::CoverTitle(_) => "CoverTitle",
            Block::CoverSubtitle { .. } => "CoverSubtitle",
            Block::PageBreak => "PageBreak",
            Block::Spacer => "Spacer",
        }
    }

    /// Styled spans for the span-carrying variants.
    pub fn spans(&self) -> Option<&[StyledSpan]> {
        match self {
            Block::Paragraph { spans }
            | Block::BulletItem { spans }
            | Block::NumberedItem { spans, .. } => Some(spans),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// 1 = major section, 2 = sub-section.
    pub level: u8,
    pub text: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    /// Data rows, each exactly `headers.len()` cells wide.
    pub rows: Vec<Vec<String>>,
    pub header_fill: ColorRole,
    /// Background for even (1-based) data rows.
    pub banded_row: ColorRole,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalloutBox {
    pub headline: Option<String>,
    pub body: Vec<StyledLine>,
    pub background: ColorRole,
    pub headline_style: TextStyle,
}

/// Two-line cover banner split from an `A & B` title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverTitle {
    pub line1: String,
    /// Second half, keeping its leading `& `.
    pub line2: String,
    pub line1_style: TextStyle,
    pub line2_style: TextStyle,
}
