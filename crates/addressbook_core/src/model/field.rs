//! Validated contact fields.
//!
//! # Responsibility
//! - Own the validation rules for contact name, phone and birthday text.
//! - Render every field back to the text form users type.
//!
//! # Invariants
//! - `Name` is never empty.
//! - `Phone` is exactly ten ASCII decimal digits.
//! - `Birthday` is a real calendar date parsed from strict `DD.MM.YYYY`.
//! - Fields are immutable; edits replace the whole value.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Text layout accepted and produced for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

const PHONE_DIGITS: usize = 10;

static BIRTHDAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2})\.([0-9]{2})\.([0-9]{4})$").expect("valid birthday regex")
});

/// Field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyName,
    InvalidPhone,
    InvalidBirthday,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name can not be empty"),
            Self::InvalidPhone => write!(f, "Phone number must be {PHONE_DIGITS} digits"),
            Self::InvalidBirthday => write!(f, "Invalid date format. Use DD.MM.YYYY"),
        }
    }
}

impl Error for ValidationError {}

/// Contact display name and address book key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Validates a contact name. Any non-empty text is accepted as typed.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Ten-digit phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    /// Validates a phone number.
    ///
    /// # Errors
    /// - `ValidationError::InvalidPhone` unless the value is exactly ten
    ///   ASCII digits. No trimming or separator stripping is applied.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let valid =
            value.len() == PHONE_DIGITS && value.chars().all(|ch| ch.is_ascii_digit());
        if !valid {
            return Err(ValidationError::InvalidPhone);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Calendar birthday without time-of-day or timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parses strict `DD.MM.YYYY` text.
    ///
    /// Day and month must be zero-padded, the year must have four digits, and
    /// the triple must name a real date (`29.02` only in leap years). Year
    /// `0000` is rejected.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let captures = BIRTHDAY_RE
            .captures(value)
            .ok_or(ValidationError::InvalidBirthday)?;

        let day = parse_component::<u32>(captures.get(1).map(|m| m.as_str()))?;
        let month = parse_component::<u32>(captures.get(2).map(|m| m.as_str()))?;
        let year = parse_component::<i32>(captures.get(3).map(|m| m.as_str()))?;
        if year < 1 {
            return Err(ValidationError::InvalidBirthday);
        }

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(ValidationError::InvalidBirthday)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }
}

fn parse_component<T: std::str::FromStr>(text: Option<&str>) -> Result<T, ValidationError> {
    text.and_then(|digits| digits.parse::<T>().ok())
        .ok_or(ValidationError::InvalidBirthday)
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Display for Phone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Display for Birthday {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl TryFrom<String> for Name {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Phone {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Birthday {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Name> for String {
    fn from(value: Name) -> Self {
        value.0
    }
}

impl From<Phone> for String {
    fn from(value: Phone) -> Self {
        value.0
    }
}

impl From<Birthday> for String {
    fn from(value: Birthday) -> Self {
        value.to_string()
    }
}
