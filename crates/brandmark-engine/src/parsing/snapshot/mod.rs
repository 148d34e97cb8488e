//! # Snapshot Testing Support
//!
//! Utilities for testing the scanner via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`describe`**: renders a block list as one stable line per block, for
//!   `insta` inline snapshots
//! - **`invariants`**: runtime checks for scanner correctness (spans in bounds
//!   and ordered, no doubled breaks or spacers, cover only at the start)

pub mod describe;
pub mod invariants;

pub use describe::{describe, describe_block};
pub use invariants::check as invariants;
