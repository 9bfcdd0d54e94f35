//! Sample catalog used when the process starts with an empty store.

use crate::commands::add;
use crate::config::CirculationPolicy;
use crate::error::{LibrisError, Result};
use crate::model::{BorrowRecord, PatronId};
use crate::store::CatalogStore;
use chrono::Utc;

const SAMPLE_BOOKS: &[(&str, &str, &str, i64)] = &[
    ("The Great Gatsby", "F. Scott Fitzgerald", "9780743273565", 3),
    ("To Kill a Mockingbird", "Harper Lee", "9780061120084", 2),
    ("1984", "George Orwell", "9780451524935", 1),
];

/// Patron holding the only copy of "1984" in the sample catalog.
pub const SAMPLE_PATRON: &str = "123456";

/// Seeds an empty store with the sample books and one outstanding loan.
/// Does nothing if the store already holds books.
///
/// The sample loan is written straight to the store, so the patron loan
/// limit does not apply to it. Only the loan period is taken from `policy`.
pub fn seed_sample_catalog<S: CatalogStore>(store: &mut S, policy: &CirculationPolicy) -> Result<()> {
    if !store.is_empty()? {
        tracing::debug!("catalog not empty, skipping sample seed");
        return Ok(());
    }

    let borrowed_at = Utc::now();
    let due_at = policy.due_date(borrowed_at)?;
    let patron = PatronId::parse(Some(SAMPLE_PATRON))?;

    let mut last_id = None;
    for (title, author, isbn, copies) in SAMPLE_BOOKS {
        let added = add::run(store, title, author, isbn, *copies)?;
        last_id = added.affected_books.first().map(|b| b.id);
    }

    if let Some(id) = last_id {
        let mut book = store.get_book(id)?;
        if !book.check_out() {
            return Err(LibrisError::NoCopiesAvailable {
                book_id: id,
                title: book.title,
            });
        }
        store.save_book(&book)?;
        store.record_borrow(BorrowRecord::new(patron, id, borrowed_at, due_at))?;
    }

    tracing::info!(books = SAMPLE_BOOKS.len(), "seeded sample catalog");
    Ok(())
}
