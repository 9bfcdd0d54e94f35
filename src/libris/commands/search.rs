use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

/// Searches the catalog by `field` ("title", "author" or "isbn").
///
/// Not implemented yet: never lists any books.
pub fn run<S: CatalogStore>(_store: &S, query: &str, field: &str) -> Result<CmdResult> {
    tracing::debug!(query, field, "catalog search requested");
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::warning("Catalog search is not implemented."));
    Ok(result)
}
