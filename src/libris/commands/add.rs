use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LibrisError, Result};
use crate::model::NewBook;
use crate::store::CatalogStore;
use crate::validation::{validate_copies, validate_isbn, validate_title_and_author};

/// Adds a book to the catalog.
///
/// Checks run in a fixed order (title and author presence, their lengths,
/// ISBN shape, copy count, then ISBN uniqueness) and the first failure wins.
pub fn run<S: CatalogStore>(
    store: &mut S,
    title: &str,
    author: &str,
    isbn: &str,
    copies: i64,
) -> Result<CmdResult> {
    let new_book = validate(title, author, isbn, copies).inspect_err(|e| {
        tracing::debug!(isbn, copies, error = %e, "rejected new book");
    })?;

    if store.find_by_isbn(&new_book.isbn)?.is_some() {
        tracing::debug!(isbn, "rejected duplicate isbn");
        return Err(LibrisError::DuplicateIsbn(new_book.isbn));
    }

    let book = store.insert_book(new_book)?;
    tracing::info!(book_id = book.id, isbn = %book.isbn, copies = book.total_copies, "book added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book \"{}\" has been successfully added to the catalog.",
        book.title
    )));
    result.affected_books.push(book);
    Ok(result)
}

fn validate(title: &str, author: &str, isbn: &str, copies: i64) -> Result<NewBook> {
    validate_title_and_author(title, author)?;
    validate_isbn(isbn)?;
    let copies = validate_copies(copies)?;

    Ok(NewBook {
        title: title.trim().to_string(),
        author: author.trim().to_string(),
        isbn: isbn.to_string(),
        copies,
    })
}
