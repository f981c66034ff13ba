//! Address book collection.
//!
//! # Responsibility
//! - Own contact records keyed by name.
//! - Answer the upcoming-birthdays query.
//!
//! # Invariants
//! - Every key equals its record's name.
//! - Iteration follows first-insertion order; overwriting a key keeps its slot.

use crate::model::birthday_window::{celebration_within, UpcomingBirthday};
use crate::model::record::Record;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Name-keyed collection of contact records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record` under its name, replacing any record with that name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Removes the record for `name`, returning it. Absent names are a no-op.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name)?;
        self.order.retain(|key| key != name);
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Lists contacts whose next birthday falls within `window_days` of
    /// `today`, with weekend dates moved to Monday.
    ///
    /// Output follows insertion order, not date order. Contacts without a
    /// birthday are skipped.
    pub fn get_upcoming_birthdays(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        self.iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let celebration_date = celebration_within(birthday, today, window_days)?;
                Some(UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    celebration_date,
                })
            })
            .collect()
    }
}

impl Display for AddressBook {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, record) in self.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{record}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::AddressBook;
    use crate::model::record::Record;

    #[test]
    fn overwrite_keeps_original_position() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("A").unwrap());
        book.add_record(Record::new("B").unwrap());

        let mut replacement = Record::new("A").unwrap();
        replacement.add_phone("5555555555").unwrap();
        book.add_record(replacement);

        let names: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(book.find("A").unwrap().phones().len(), 1);
    }

    #[test]
    fn delete_then_reinsert_moves_to_end() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("A").unwrap());
        book.add_record(Record::new("B").unwrap());
        book.delete("A");
        book.add_record(Record::new("A").unwrap());

        let names: Vec<&str> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn empty_book_renders_empty_text() {
        assert_eq!(AddressBook::new().to_string(), "");
    }
}
