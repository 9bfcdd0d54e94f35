use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{BookId, LateFee};
use crate::store::CatalogStore;

/// Computes the late fee owed on a loan. Not implemented yet: the fee is
/// always zero and the status says so.
pub fn run<S: CatalogStore>(_store: &S, patron_id: &str, book_id: BookId) -> Result<CmdResult> {
    tracing::debug!(patron_id, book_id, "late fee requested");
    let fee = LateFee {
        fee_amount: 0.0,
        status: "Late fee calculation not implemented".to_string(),
    };
    Ok(CmdResult::default().with_late_fee(fee))
}
