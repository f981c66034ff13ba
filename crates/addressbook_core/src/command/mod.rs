//! Line-oriented command layer over the address book.
//!
//! # Responsibility
//! - Split user input into a command word and arguments.
//! - Dispatch to model operations and turn every error kind into one
//!   human-readable reply line.
//!
//! # Invariants
//! - Argument counts are checked before any field validation.
//! - No error is fatal; only `close`/`exit` end the session.
//! - Persistence is left to the caller (see `CommandOutcome::Exit`).

mod handlers;
mod parser;

pub use handlers::{execute, CommandError, CommandOutcome};
pub use parser::parse_input;
