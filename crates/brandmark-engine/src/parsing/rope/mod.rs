pub mod lines;
pub mod slice;
pub mod span;

pub use lines::{LineRef, lines_with_spans};
pub use slice::complete_prefix_len;
pub use span::Span;
