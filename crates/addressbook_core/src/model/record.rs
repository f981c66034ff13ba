//! Contact record model.
//!
//! # Responsibility
//! - Hold one contact's name, ordered phones and optional birthday.
//! - Delegate every field write to the validators in `model::field`.
//!
//! # Invariants
//! - `name` is fixed at construction.
//! - Phones keep insertion order; duplicates are allowed.
//! - A failed write leaves the record exactly as it was.

use crate::model::field::{Birthday, Name, Phone, ValidationError};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for record-level mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    Validation(ValidationError),
    /// `edit_phone` target is not among the record's phones.
    PhoneNotFound(String),
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::PhoneNotFound(_) => write!(f, "Phone number not found"),
        }
    }
}

impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::PhoneNotFound(_) => None,
        }
    }
}

impl From<ValidationError> for RecordError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// One contact in the address book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Creates a contact with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::parse(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Appends a validated phone. Duplicates are kept.
    pub fn add_phone(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        self.phones.push(Phone::parse(value)?);
        Ok(())
    }

    /// Removes every phone equal to `value`. Missing values are a no-op.
    pub fn remove_phone(&mut self, value: &str) {
        self.phones.retain(|phone| phone.as_str() != value);
    }

    /// Returns the first phone equal to `value`.
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == value)
    }

    /// Replaces the first phone equal to `old_value` in place.
    ///
    /// # Errors
    /// - `RecordError::PhoneNotFound` when `old_value` is absent.
    /// - `RecordError::Validation` when `new_value` is not a valid phone; the
    ///   old phone is kept.
    pub fn edit_phone(&mut self, old_value: &str, new_value: &str) -> Result<(), RecordError> {
        let slot = self
            .phones
            .iter_mut()
            .find(|phone| phone.as_str() == old_value)
            .ok_or_else(|| RecordError::PhoneNotFound(old_value.to_string()))?;
        *slot = Phone::parse(new_value)?;
        Ok(())
    }

    /// Sets the birthday, overwriting any previous value.
    pub fn add_birthday(&mut self, value: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(value)?);
        Ok(())
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = self
            .birthday
            .map_or_else(|| "None".to_string(), |birthday| birthday.to_string());
        write!(
            f,
            "Contact name: {}, phones: {phones}, birthday: {birthday}",
            self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Record, RecordError};
    use crate::model::field::ValidationError;

    #[test]
    fn edit_phone_checks_presence_before_validating_replacement() {
        let mut record = Record::new("Ann").unwrap();
        record.add_phone("1234567890").unwrap();

        let err = record.edit_phone("0000000000", "bad").unwrap_err();
        assert_eq!(err, RecordError::PhoneNotFound("0000000000".to_string()));
    }

    #[test]
    fn edit_phone_replaces_only_first_match() {
        let mut record = Record::new("Ann").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("1111111111").unwrap();

        record.edit_phone("1111111111", "2222222222").unwrap();
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["2222222222", "1111111111"]);
    }

    #[test]
    fn failed_add_birthday_keeps_previous_value() {
        let mut record = Record::new("Ann").unwrap();
        record.add_birthday("01.02.2000").unwrap();

        let err = record.add_birthday("31.02.2000").unwrap_err();
        assert_eq!(err, ValidationError::InvalidBirthday);
        assert_eq!(record.birthday().unwrap().to_string(), "01.02.2000");
    }

    #[test]
    fn record_error_displays_field_message() {
        let err = RecordError::from(ValidationError::InvalidPhone);
        assert_eq!(err.to_string(), "Phone number must be 10 digits");
    }
}
