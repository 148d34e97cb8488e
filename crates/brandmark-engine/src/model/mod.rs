//! # Document Block Model
//!
//! The typed, style-resolved intermediate representation that sits between
//! the block scanner and a page-layout backend.
//!
//! Blocks never carry markdown: every piece of text is already split into
//! styled spans or plain strings, and every visual decision is expressed as a
//! role (`ColorRole`, `FontRole`, `SizeRole`) that a backend resolves against
//! its theme.
//!
//! ## Modules
//!
//! - **`style`**: role enums plus `TextStyle`, `StyledSpan` and `StyledLine`
//! - **`block`**: the `Block` enum and its payload structs

pub mod block;
pub mod style;

pub use block::{Block, CalloutBox, CoverTitle, Heading, Table};
pub use style::{ColorRole, FontRole, SizeRole, StyledLine, StyledSpan, TextStyle};
