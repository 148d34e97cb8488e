//! # Progressive Rendering
//!
//! Keeps a live preview in step with a markdown buffer that is still being
//! generated.
//!
//! ## Model
//!
//! - **`buffer`**: `StreamBuffer`, an append-only rope fed token by token
//! - **`scheduler`**: `RenderSession` re-scans the buffer from byte zero on a
//!   bounded cadence and performs one final full scan when the stream ends
//! - **`sink`**: `RenderSink`, the consumer of `RenderFrame`s
//! - **`shared`**: `SharedSession` for drivers that push and tick from
//!   different threads
//!
//! ## Contract
//!
//! - Previews only scan up to the last newline; a half-written line waits
//!   for the next tick
//! - A tick renders only if the complete prefix grew and the interval has
//!   elapsed since the previous render
//! - After an abort nothing is rendered again, including the final frame

pub mod buffer;
pub mod scheduler;
pub mod shared;
pub mod sink;

pub use buffer::StreamBuffer;
pub use scheduler::{
    DEFAULT_INTERVAL, RenderSession, ScheduleConfig, SessionError, StreamEvent, TickOutcome,
};
pub use shared::SharedSession;
pub use sink::{RenderFrame, RenderSink, SinkError};
