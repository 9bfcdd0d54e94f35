use crate::validation::{validate_patron_id, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Catalog identifier, assigned by the store on insertion. Stores hand out
/// positive ids only, so a negative id never matches a book.
pub type BookId = i64;

/// Free-form patron report. Keys are stable field names.
pub type PatronStatus = BTreeMap<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub total_copies: u32,
    pub available_copies: u32,
}

impl Book {
    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }

    /// Takes one copy off the shelf. Returns `false` when none are left.
    pub fn check_out(&mut self) -> bool {
        match self.available_copies.checked_sub(1) {
            Some(left) => {
                self.available_copies = left;
                true
            }
            None => false,
        }
    }
}

/// A validated book that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub copies: u32,
}

impl NewBook {
    pub fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            total_copies: self.copies,
            available_copies: self.copies,
        }
    }
}

/// A patron identifier: exactly six ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PatronId(String);

impl PatronId {
    pub fn parse(raw: Option<&str>) -> Result<Self, ValidationError> {
        validate_patron_id(raw)?;
        Ok(Self(raw.unwrap_or_default().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PatronId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(Some(s))
    }
}

impl TryFrom<String> for PatronId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_patron_id(Some(&value))?;
        Ok(Self(value))
    }
}

impl From<PatronId> for String {
    fn from(value: PatronId) -> Self {
        value.0
    }
}

impl fmt::Display for PatronId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One loan of one copy. Active while `returned_at` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowRecord {
    pub patron_id: PatronId,
    pub book_id: BookId,
    pub borrowed_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
}

impl BorrowRecord {
    pub fn new(
        patron_id: PatronId,
        book_id: BookId,
        borrowed_at: DateTime<Utc>,
        due_at: DateTime<Utc>,
    ) -> Self {
        Self {
            patron_id,
            book_id,
            borrowed_at,
            due_at,
            returned_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.returned_at.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LateFee {
    pub fee_amount: f64,
    pub status: String,
}
