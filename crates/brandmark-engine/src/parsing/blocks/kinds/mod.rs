pub mod callout;
pub mod directive;
pub mod heading;
pub mod list;
pub mod table;

pub use callout::Callout;
pub use directive::{Directive, StatFields, ThematicBreak};
pub use heading::AtxHeading;
pub use list::ListMarker;
pub use table::{ParsedTable, TableRow, parse_table};
