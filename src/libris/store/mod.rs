//! # Storage Layer
//!
//! This module defines the storage abstraction for the catalog. The
//! [`CatalogStore`] trait lets the command layer work against any backend.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the catalog lives for the lifetime of the
//!   process and is never persisted.
//!
//! ## Identity
//!
//! Stores assign [`BookId`]s on insertion. Ids start at 1, only grow, and are
//! never handed out twice, even if a book were later removed.
//!
//! ## Copy counts
//!
//! `save_book` refuses records whose `available_copies` exceeds
//! `total_copies`, so a buggy command cannot persist a broken invariant.

use crate::error::Result;
use crate::model::{Book, BookId, BorrowRecord, NewBook, PatronId};

pub mod memory;

/// Abstract interface for catalog storage.
pub trait CatalogStore {
    /// Insert a validated book and return it with its assigned id
    fn insert_book(&mut self, book: NewBook) -> Result<Book>;

    /// Get a book by id
    fn get_book(&self, id: BookId) -> Result<Book>;

    /// Find a book by exact ISBN
    fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>>;

    /// Overwrite an existing book record
    fn save_book(&mut self, book: &Book) -> Result<()>;

    /// List all books, in id order
    fn list_books(&self) -> Result<Vec<Book>>;

    /// Append a loan to the circulation history
    fn record_borrow(&mut self, record: BorrowRecord) -> Result<()>;

    /// Loans held by a patron that have not been returned
    fn active_loans(&self, patron_id: &PatronId) -> Result<Vec<BorrowRecord>>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.list_books()?.is_empty())
    }
}
