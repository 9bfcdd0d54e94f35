use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::PatronStatus;
use crate::store::CatalogStore;

/// Reports a patron's loans and fees. Not implemented yet: the report is
/// always empty.
pub fn run<S: CatalogStore>(_store: &S, patron_id: &str) -> Result<CmdResult> {
    tracing::debug!(patron_id, "patron status requested");
    let mut result = CmdResult::default().with_patron_status(PatronStatus::new());
    result.add_message(CmdMessage::warning("Patron status report is not implemented."));
    Ok(result)
}
