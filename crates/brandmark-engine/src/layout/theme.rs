use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::model::{ColorRole, FontRole, SizeRole};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Invalid color {0:?}: expected #RRGGBB or #RGB")]
    InvalidColor(String),
}

/// An sRGB color written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: HexColor = HexColor::rgb(0xff, 0xff, 0xff);
}

impl FromStr for HexColor {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ThemeError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        // `from_str_radix` alone would also take a sign
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            // #abc is shorthand for #aabbcc
            3 => {
                let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 0x11);
                Ok(Self::rgb(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for HexColor {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

impl Alignment {
    pub fn as_css(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
        }
    }
}

/// One concrete color per [`ColorRole`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub text: HexColor,
    pub heading: HexColor,
    pub accent: HexColor,
    pub positive: HexColor,
    pub warning: HexColor,
    pub analysis: HexColor,
    pub muted: HexColor,
    pub cover_primary: HexColor,
    pub cover_secondary: HexColor,
    pub callout_background: HexColor,
    pub callout_headline: HexColor,
    pub callout_text: HexColor,
    pub table_header_fill: HexColor,
    pub table_header_text: HexColor,
    pub banded_row: HexColor,
    pub stat_value: HexColor,
}

impl Default for Palette {
    fn default() -> Self {
        let navy = HexColor::rgb(0x1e, 0x3a, 0x5f);
        let gold = HexColor::rgb(0xd4, 0xa9, 0x44);
        let ink = HexColor::rgb(0x1a, 0x1a, 0x2e);
        Self {
            text: ink,
            heading: navy,
            accent: gold,
            positive: HexColor::rgb(0x16, 0xa3, 0x4a),
            warning: HexColor::rgb(0xdc, 0x26, 0x26),
            analysis: HexColor::rgb(0x25, 0x63, 0xeb),
            muted: HexColor::rgb(0x4a, 0x4a, 0x5a),
            cover_primary: navy,
            cover_secondary: gold,
            callout_background: ink,
            callout_headline: gold,
            callout_text: HexColor::rgb(0xf0, 0xf0, 0xf0),
            table_header_fill: navy,
            table_header_text: HexColor::WHITE,
            banded_row: HexColor::rgb(0xf5, 0xf5, 0xf5),
            stat_value: gold,
        }
    }
}

impl Palette {
    pub fn get(&self, role: ColorRole) -> HexColor {
        match role {
            ColorRole::Text => self.text,
            ColorRole::Heading => self.heading,
            ColorRole::Accent => self.accent,
            ColorRole::Positive => self.positive,
            ColorRole::Warning => self.warning,
            ColorRole::Analysis => self.analysis,
            ColorRole::Muted => self.muted,
            ColorRole::CoverPrimary => self.cover_primary,
            ColorRole::CoverSecondary => self.cover_secondary,
            ColorRole::CalloutBackground => self.callout_background,
            ColorRole::CalloutHeadline => self.callout_headline,
            ColorRole::CalloutText => self.callout_text,
            ColorRole::TableHeaderFill => self.table_header_fill,
            ColorRole::TableHeaderText => self.table_header_text,
            ColorRole::BandedRow => self.banded_row,
            ColorRole::StatValue => self.stat_value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fonts {
    pub heading: String,
    pub body: String,
    pub display: String,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            heading: "Georgia".to_string(),
            body: "Calibri".to_string(),
            display: "Georgia".to_string(),
        }
    }
}

/// Point sizes per [`SizeRole`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sizes {
    pub cover: f32,
    pub cover_secondary: f32,
    pub h1: f32,
    pub h2: f32,
    pub subtitle: f32,
    pub body: f32,
    pub stat: f32,
}

impl Default for Sizes {
    fn default() -> Self {
        Self {
            cover: 36.0,
            cover_secondary: 28.0,
            h1: 22.0,
            h2: 15.0,
            subtitle: 12.0,
            body: 11.0,
            stat: 32.0,
        }
    }
}

/// Brand styling that resolves the abstract roles carried by blocks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub colors: Palette,
    pub fonts: Fonts,
    pub sizes: Sizes,
    pub cover_alignment: Alignment,
}

impl Theme {
    pub fn color(&self, role: ColorRole) -> HexColor {
        self.colors.get(role)
    }

    pub fn font(&self, role: FontRole) -> &str {
        match role {
            FontRole::Heading => &self.fonts.heading,
            FontRole::Body => &self.fonts.body,
            FontRole::Display => &self.fonts.display,
        }
    }

    pub fn size(&self, role: SizeRole) -> f32 {
        let s = &self.sizes;
        match role {
            SizeRole::Cover => s.cover,
            SizeRole::CoverSecondary => s.cover_secondary,
            SizeRole::H1 => s.h1,
            SizeRole::H2 => s.h2,
            SizeRole::Subtitle => s.subtitle,
            SizeRole::Body => s.body,
            SizeRole::Stat => s.stat,
        }
    }
}
