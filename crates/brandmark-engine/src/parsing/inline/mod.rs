//! # Inline Formatting
//!
//! Cursor-based emphasis parsing followed by style resolution.
//!
//! ## Architecture
//!
//! - **`parser`**: `parse_inline()` splits a fragment into `InlineNode`s
//!   (text, strong, emphasis) with byte spans
//! - **`format`**: `format()` resolves nodes against an ambient `TextStyle`
//!   into `StyledSpan`s; `plain_text()` drops the markers
//! - **`labels`**: the closed label vocabulary that recolors bold labels
//! - **`kinds`**: delimiter constants
//! - **`cursor`**: byte cursor with absolute position tracking
//!
//! ## Limits
//!
//! There is no escaping, so a literal `*` pair always becomes emphasis, and
//! nested emphasis such as `***both***` is unsupported.

pub mod cursor;
pub mod format;
pub mod kinds;
pub mod labels;
pub mod parser;
pub mod types;

pub use format::{format, plain_text};
pub use labels::LabelCategory;
pub use parser::parse_inline;
pub use types::InlineNode;
