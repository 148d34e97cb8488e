//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Strong`**: `DELIM = b"**"`, split out first
//! - **`Emphasis`**: `DELIM = b'*'`, only looked for outside strong runs
//!
//! The parser calls these constants; it never hardcodes `**` or `*`.

pub mod emphasis;

pub use emphasis::{Emphasis, Strong};
