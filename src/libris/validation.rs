//! Field validation for catalog and circulation input.
//!
//! Rules:
//! - Title: required, at most 200 characters
//! - Author: required, at most 100 characters
//! - ISBN: exactly 13 ASCII digits
//! - Copies: a positive integer that fits in `u32`
//! - Patron ID: exactly 6 ASCII digits
//!
//! Lengths are counted in characters, not bytes. Messages are stable: callers
//! match on substrings such as "required", "13 digits" and "6 digits".

use thiserror::Error;

pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_AUTHOR_CHARS: usize = 100;
pub const ISBN_LEN: usize = 13;
pub const PATRON_ID_LEN: usize = 6;

/// Error type for field validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required.")]
    TitleRequired,

    #[error("Author is required.")]
    AuthorRequired,

    #[error("Title must be at most {max} characters (got {0}).", max = MAX_TITLE_CHARS)]
    TitleTooLong(usize),

    #[error("Author must be at most {max} characters (got {0}).", max = MAX_AUTHOR_CHARS)]
    AuthorTooLong(usize),

    #[error("ISBN must be exactly 13 digits (got {0} characters).")]
    IsbnLength(usize),

    #[error("ISBN must contain only digits.")]
    IsbnNotNumeric,

    #[error("Total copies must be a positive integer (got {0}).")]
    CopiesNotPositive(i64),

    #[error("Total copies must be a positive integer no greater than {max} (got {0}).", max = u32::MAX)]
    CopiesTooLarge(i64),

    #[error("Invalid patron ID. Must be exactly 6 digits.")]
    PatronIdMissing,

    #[error("Invalid patron ID. Must be exactly 6 digits (got {0} characters).")]
    PatronIdLength(usize),

    #[error("Invalid patron ID. Must be exactly 6 digits, letters and symbols are not allowed.")]
    PatronIdNotNumeric,
}

/// Checks that title and author are present before checking their lengths,
/// so a blank title is reported as missing even when the author is too long.
pub fn validate_title_and_author(title: &str, author: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if author.trim().is_empty() {
        return Err(ValidationError::AuthorRequired);
    }

    let title_len = title.chars().count();
    if title_len > MAX_TITLE_CHARS {
        return Err(ValidationError::TitleTooLong(title_len));
    }

    let author_len = author.chars().count();
    if author_len > MAX_AUTHOR_CHARS {
        return Err(ValidationError::AuthorTooLong(author_len));
    }

    Ok(())
}

/// Validates an ISBN-13 string.
///
/// Only the shape is checked. The check digit is not verified.
///
/// # Examples
/// ```
/// use libris::validation::validate_isbn;
///
/// assert!(validate_isbn("9780441013593").is_ok());
/// assert!(validate_isbn("978044101359").is_err());
/// assert!(validate_isbn("97804410135X3").is_err());
/// ```
pub fn validate_isbn(isbn: &str) -> Result<(), ValidationError> {
    let len = isbn.chars().count();
    if len != ISBN_LEN {
        return Err(ValidationError::IsbnLength(len));
    }
    if !is_all_digits(isbn) {
        return Err(ValidationError::IsbnNotNumeric);
    }
    Ok(())
}

/// Validates a requested copy count and narrows it to the stored width.
pub fn validate_copies(copies: i64) -> Result<u32, ValidationError> {
    if copies <= 0 {
        return Err(ValidationError::CopiesNotPositive(copies));
    }
    u32::try_from(copies).map_err(|_| ValidationError::CopiesTooLarge(copies))
}

/// Validates a patron ID. `None` and the empty string count as missing.
pub fn validate_patron_id(patron_id: Option<&str>) -> Result<(), ValidationError> {
    let id = match patron_id {
        Some(id) if !id.is_empty() => id,
        _ => return Err(ValidationError::PatronIdMissing),
    };

    let len = id.chars().count();
    if len != PATRON_ID_LEN {
        return Err(ValidationError::PatronIdLength(len));
    }
    if !is_all_digits(id) {
        return Err(ValidationError::PatronIdNotNumeric);
    }
    Ok(())
}

fn is_all_digits(s: &str) -> bool {
    s.chars().all(|ch| ch.is_ascii_digit())
}
