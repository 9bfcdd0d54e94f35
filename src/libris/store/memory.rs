use super::CatalogStore;
use crate::error::{LibrisError, Result};
use crate::model::{Book, BookId, BorrowRecord, NewBook, PatronId};
use std::collections::BTreeMap;

/// In-memory catalog. Does NOT persist data.
#[derive(Debug)]
pub struct InMemoryStore {
    books: BTreeMap<BookId, Book>,
    loans: Vec<BorrowRecord>,
    next_id: BookId,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            books: BTreeMap::new(),
            loans: Vec::new(),
            next_id: 1,
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogStore for InMemoryStore {
    fn insert_book(&mut self, book: NewBook) -> Result<Book> {
        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or_else(|| LibrisError::Store("book id space exhausted".to_string()))?;

        let book = book.into_book(id);
        self.books.insert(id, book.clone());
        Ok(book)
    }

    fn get_book(&self, id: BookId) -> Result<Book> {
        self.books
            .get(&id)
            .cloned()
            .ok_or(LibrisError::BookNotFound(id))
    }

    fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>> {
        Ok(self.books.values().find(|b| b.isbn == isbn).cloned())
    }

    fn save_book(&mut self, book: &Book) -> Result<()> {
        if book.available_copies > book.total_copies {
            return Err(LibrisError::Store(format!(
                "book {} would have {} of {} copies available",
                book.id, book.available_copies, book.total_copies
            )));
        }
        match self.books.get_mut(&book.id) {
            Some(existing) => {
                *existing = book.clone();
                Ok(())
            }
            None => Err(LibrisError::BookNotFound(book.id)),
        }
    }

    fn list_books(&self) -> Result<Vec<Book>> {
        Ok(self.books.values().cloned().collect())
    }

    fn record_borrow(&mut self, record: BorrowRecord) -> Result<()> {
        if !self.books.contains_key(&record.book_id) {
            return Err(LibrisError::BookNotFound(record.book_id));
        }
        self.loans.push(record);
        Ok(())
    }

    fn active_loans(&self, patron_id: &PatronId) -> Result<Vec<BorrowRecord>> {
        Ok(self
            .loans
            .iter()
            .filter(|r| &r.patron_id == patron_id && r.is_active())
            .cloned()
            .collect())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::{Duration, Utc};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds `count` books with distinct, well-formed ISBNs.
        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                let book = NewBook {
                    title: format!("Test Book {}", i + 1),
                    author: format!("Test Author {}", i + 1),
                    isbn: format!("{:013}", 9_780_000_000_000u64 + i as u64),
                    copies: 1,
                };
                self.store.insert_book(book).unwrap();
            }
            self
        }

        pub fn with_book(mut self, title: &str, isbn: &str, copies: u32) -> Self {
            let book = NewBook {
                title: title.to_string(),
                author: "Some Author".to_string(),
                isbn: isbn.to_string(),
                copies,
            };
            self.store.insert_book(book).unwrap();
            self
        }

        /// Adds a single-copy book whose only copy is out with `patron`.
        pub fn with_unavailable_book(mut self, title: &str, isbn: &str, patron: &str) -> Self {
            let mut book = self
                .store
                .insert_book(NewBook {
                    title: title.to_string(),
                    author: "Some Author".to_string(),
                    isbn: isbn.to_string(),
                    copies: 1,
                })
                .unwrap();
            book.check_out();
            self.store.save_book(&book).unwrap();
            self.store
                .record_borrow(BorrowRecord::new(
                    patron.parse().unwrap(),
                    book.id,
                    Utc::now(),
                    Utc::now() + Duration::days(14),
                ))
                .unwrap();
            self
        }
    }
}
