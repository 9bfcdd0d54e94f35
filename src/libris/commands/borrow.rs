use crate::commands::{CmdMessage, CmdResult};
use crate::config::CirculationPolicy;
use crate::error::{LibrisError, Result};
use crate::model::{BookId, BorrowRecord, PatronId};
use crate::store::CatalogStore;
use chrono::Utc;

/// Lends one copy of `book_id` to a patron.
///
/// Fails, in this order, on a malformed patron id, an unknown book, a book
/// with no copies on the shelf, or a patron already at the loan limit.
pub fn run<S: CatalogStore>(
    store: &mut S,
    policy: &CirculationPolicy,
    patron_id: Option<&str>,
    book_id: BookId,
) -> Result<CmdResult> {
    let patron = PatronId::parse(patron_id).inspect_err(|e| {
        tracing::debug!(book_id, error = %e, "rejected patron id");
    })?;

    let mut book = store.get_book(book_id)?;
    if !book.check_out() {
        tracing::debug!(book_id, patron_id = %patron, "no copies available");
        return Err(LibrisError::NoCopiesAvailable {
            book_id,
            title: book.title,
        });
    }

    let held = store.active_loans(&patron)?.len();
    if held >= policy.max_loans_per_patron {
        tracing::debug!(patron_id = %patron, held, "borrowing limit reached");
        return Err(LibrisError::BorrowLimitReached(policy.max_loans_per_patron));
    }

    let borrowed_at = Utc::now();
    let due_at = policy.due_date(borrowed_at)?;
    let record = BorrowRecord::new(patron, book_id, borrowed_at, due_at);
    store.save_book(&book)?;
    store.record_borrow(record.clone())?;
    tracing::info!(
        book_id,
        patron_id = %record.patron_id,
        available = book.available_copies,
        "book borrowed"
    );

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Successfully borrowed \"{}\". Due date: {}.",
        book.title,
        record.due_at.format("%Y-%m-%d")
    )));
    result.affected_books.push(book);
    result.loans.push(record);
    Ok(result)
}
