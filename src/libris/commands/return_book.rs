use crate::commands::CmdResult;
use crate::error::{LibrisError, Result};
use crate::model::BookId;
use crate::store::CatalogStore;

/// Returns a borrowed copy.
///
/// Not implemented yet: always fails with [`LibrisError::NotImplemented`],
/// whatever the input. Once built it should close the patron's active loan
/// and put the copy back, never raising `available_copies` above
/// `total_copies`.
pub fn run<S: CatalogStore>(
    _store: &mut S,
    patron_id: Option<&str>,
    book_id: BookId,
) -> Result<CmdResult> {
    tracing::debug!(?patron_id, book_id, "return requested");
    Err(LibrisError::NotImplemented("Book return"))
}
