// File: ./src/model/mod.rs
pub mod date;
pub mod display;
pub mod item;
pub mod matcher;
pub mod parser;
pub mod recurrence;
pub mod template;

pub use item::{Event, PalTime};
pub use parser::{ParseError, ParsedSpec};
pub use recurrence::{KindTag, RecurrenceKind};
