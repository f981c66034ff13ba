//! Core domain logic for the address book assistant.
//! This crate is the single source of truth for contact invariants.

pub mod command;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use command::{execute, parse_input, CommandError, CommandOutcome};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::address_book::AddressBook;
pub use model::birthday_window::{UpcomingBirthday, DEFAULT_WINDOW_DAYS};
pub use model::field::{Birthday, Name, Phone, ValidationError};
pub use model::record::{Record, RecordError};
pub use repo::book_repo::{
    AddressBookRepository, RepoError, RepoResult, SqliteAddressBookRepository,
};
pub use service::snapshot_service::SnapshotService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
