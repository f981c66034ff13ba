//! Snapshot use-case service.
//!
//! # Responsibility
//! - Provide the startup load / shutdown save pair for the whole book.
//! - Emit metadata-only diagnostics for each snapshot operation.
//!
//! # Invariants
//! - The service never bypasses repository validation.
//! - Log lines carry counts and durations, never contact data.

use crate::model::address_book::AddressBook;
use crate::repo::book_repo::{AddressBookRepository, RepoResult};
use log::{error, info};
use std::time::Instant;

/// Wraps a repository with logged load/save entry points.
pub struct SnapshotService<R: AddressBookRepository> {
    repo: R,
}

impl<R: AddressBookRepository> SnapshotService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Loads the persisted book (empty when nothing was saved yet).
    pub fn load(&self) -> RepoResult<AddressBook> {
        let started_at = Instant::now();
        match self.repo.load_book() {
            Ok(book) => {
                info!(
                    "event=snapshot_load module=service status=ok contacts={} duration_ms={}",
                    book.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(book)
            }
            Err(err) => {
                error!(
                    "event=snapshot_load module=service status=error duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                Err(err)
            }
        }
    }

    /// Persists the full book, replacing the previous snapshot.
    pub fn save(&self, book: &AddressBook) -> RepoResult<()> {
        let started_at = Instant::now();
        match self.repo.save_book(book) {
            Ok(()) => {
                info!(
                    "event=snapshot_save module=service status=ok contacts={} duration_ms={}",
                    book.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=snapshot_save module=service status=error duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                Err(err)
            }
        }
    }
}
