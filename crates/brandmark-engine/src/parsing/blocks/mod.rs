//! # Block Scanning
//!
//! Two-phase, line-oriented scan of the report dialect.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    holding local facts (trimmed text, blank, terminated, which opener matches)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` runs the cover /
//!    section / run state machine and emits `BlockNode`s
//!
//! ## Modules
//!
//! - **`types`**: `BlockNode`
//! - **`kinds`**: per-syntax helpers owning their delimiters (callout, table,
//!   heading, list, directive)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`open`**: `try_open` checks openers in dispatch order
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Every line lands somewhere; plain paragraph is the fallback
//! - A cover sequence can only appear at the very start
//! - Callout and table runs are greedy and end at the first foreign line
//! - All block nodes store byte spans into the rope

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use open::{BlockOpen, try_open};
pub use types::BlockNode;
