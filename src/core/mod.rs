//! Core checking engine.
//!
//! Data flows one way:
//!
//! ```text
//! files -> parser -> records -> context -> warnings
//! ```
//!
//! ## Module Structure
//!
//! - `checker`: Walks locale directories, base locale first
//! - `context`: Base table, per-locale state and warning log
//! - `encoding`: Locale text encodings
//! - `ignore`: Global and per-record suppression sets
//! - `parser`: Line reconstructor for the string-table format
//! - `substitution`: Placeholder counting

pub mod checker;
pub mod context;
pub mod encoding;
pub mod ignore;
pub mod parser;
pub mod substitution;

pub use checker::{CheckOutcome, Checker};
pub use context::CheckContext;
