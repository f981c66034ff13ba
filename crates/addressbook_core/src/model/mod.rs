//! Address book domain model.
//!
//! # Responsibility
//! - Define validated contact fields, records and the keyed collection.
//! - Compute upcoming birthday celebrations.
//!
//! # Invariants
//! - Model code performs no I/O and never logs.
//! - Every failed mutation leaves prior state untouched.

pub mod address_book;
pub mod birthday_window;
pub mod field;
pub mod record;
