//! Address book snapshot repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Replace the persisted snapshot with the full in-memory book.
//! - Restore the book with contact and phone order intact.
//!
//! # Invariants
//! - `save_book` is all-or-nothing: one transaction per snapshot.
//! - Read paths re-validate every field and reject invalid persisted state
//!   instead of masking it.

use crate::db::DbError;
use crate::model::address_book::AddressBook;
use crate::model::record::Record;
use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Snapshot persistence error.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted contact data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Load/save contract for whole-book snapshots.
pub trait AddressBookRepository {
    /// Returns the persisted book, or an empty book when nothing was saved.
    fn load_book(&self) -> RepoResult<AddressBook>;
    /// Replaces the persisted snapshot with `book`.
    fn save_book(&self, book: &AddressBook) -> RepoResult<()>;
}

/// SQLite-backed snapshot repository.
pub struct SqliteAddressBookRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAddressBookRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AddressBookRepository for SqliteAddressBookRepository<'_> {
    fn load_book(&self) -> RepoResult<AddressBook> {
        let mut contact_stmt = self
            .conn
            .prepare("SELECT name, birthday FROM contacts ORDER BY position ASC;")?;
        let mut phone_stmt = self.conn.prepare(
            "SELECT phone FROM contact_phones
             WHERE contact_name = ?1
             ORDER BY position ASC;",
        )?;

        let mut book = AddressBook::new();
        let mut rows = contact_stmt.query([])?;
        while let Some(row) = rows.next()? {
            let name: String = row.get("name")?;
            let birthday: Option<String> = row.get("birthday")?;

            let mut record = Record::new(name.as_str()).map_err(|err| {
                RepoError::InvalidData(format!("contacts.name: {err}"))
            })?;

            let mut phones = phone_stmt.query([name.as_str()])?;
            while let Some(phone_row) = phones.next()? {
                let phone: String = phone_row.get("phone")?;
                record.add_phone(phone).map_err(|err| {
                    RepoError::InvalidData(format!("contact_phones.phone: {err}"))
                })?;
            }

            if let Some(value) = birthday {
                record.add_birthday(&value).map_err(|err| {
                    RepoError::InvalidData(format!("contacts.birthday `{value}`: {err}"))
                })?;
            }

            book.add_record(record);
        }

        Ok(book)
    }

    fn save_book(&self, book: &AddressBook) -> RepoResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute_batch("DELETE FROM contact_phones; DELETE FROM contacts;")?;

        {
            let mut insert_contact = tx.prepare(
                "INSERT INTO contacts (name, position, birthday) VALUES (?1, ?2, ?3);",
            )?;
            let mut insert_phone = tx.prepare(
                "INSERT INTO contact_phones (contact_name, position, phone)
                 VALUES (?1, ?2, ?3);",
            )?;

            for (position, record) in (0_i64..).zip(book.iter()) {
                let name = record.name().as_str();
                insert_contact.execute(params![
                    name,
                    position,
                    record.birthday().map(|birthday| birthday.to_string()),
                ])?;
                for (phone_position, phone) in (0_i64..).zip(record.phones()) {
                    insert_phone.execute(params![name, phone_position, phone.as_str()])?;
                }
            }
        }

        tx.commit()?;
        Ok(())
    }
}
