pub mod io;
pub mod layout;
pub mod model;
pub mod parsing;
pub mod progressive;

// Re-export key types for easier usage
pub use io::*;
pub use layout::{HtmlBackend, LayoutBackend, LayoutError, Theme};
pub use model::*;
pub use parsing::{ParsedDoc, parse_document, parse_str, scan};
pub use progressive::{
    RenderFrame, RenderSession, RenderSink, ScheduleConfig, SessionError, SharedSession,
    StreamEvent, TickOutcome,
};
