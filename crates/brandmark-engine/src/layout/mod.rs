//! # Page Layout
//!
//! Backends turn a scanned block list into a concrete document. Blocks carry
//! only style roles; a [`Theme`] decides what those roles look like.
//!
//! - **`theme`**: brand palette, fonts, point sizes and cover alignment
//! - **`html`**: `HtmlBackend`, a paginated HTML page for live preview

pub mod html;
pub mod theme;

pub use html::HtmlBackend;
pub use theme::{Alignment, Fonts, HexColor, Palette, Sizes, Theme, ThemeError};

use crate::model::Block;

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("Failed to write output: {0}")]
    Write(#[from] std::fmt::Error),
}

/// Lays out a block list as one output document.
pub trait LayoutBackend {
    type Output;

    fn layout(&mut self, blocks: &[Block]) -> Result<Self::Output, LayoutError>;
}
