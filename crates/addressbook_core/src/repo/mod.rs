//! Repository layer for address book persistence.
//!
//! # Responsibility
//! - Define the load/save snapshot contract.
//! - Keep SQL details out of the model and command layers.

pub mod book_repo;
