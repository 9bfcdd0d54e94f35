//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for catalog operations, whatever the UI.
//!
//! It dispatches to `commands/*.rs`, owns the store and the circulation
//! policy, and returns structured types (`Result<CmdResult>`). It holds no
//! business logic and does no I/O.
//!
//! ## Generic Over CatalogStore
//!
//! `LibraryApi<S: CatalogStore>` is generic over the storage backend, so the
//! same facade runs against `InMemoryStore` in tests and in the binary.
//!
//! ## Mutation
//!
//! Operations that change the catalog take `&mut self`. Holding the API
//! exclusively is what keeps `available_copies` within `0..=total_copies`;
//! anything sharing it across threads must wrap it in a lock.

use crate::commands;
use crate::config::CirculationPolicy;
use crate::error::Result;
use crate::model::BookId;
use crate::store::CatalogStore;

/// The main API facade for catalog operations.
pub struct LibraryApi<S: CatalogStore> {
    store: S,
    policy: CirculationPolicy,
}

impl<S: CatalogStore> LibraryApi<S> {
    pub fn new(store: S, policy: CirculationPolicy) -> Self {
        Self { store, policy }
    }

    pub fn add_book(
        &mut self,
        title: &str,
        author: &str,
        isbn: &str,
        copies: i64,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, title, author, isbn, copies)
    }

    pub fn borrow_book(
        &mut self,
        patron_id: Option<&str>,
        book_id: BookId,
    ) -> Result<commands::CmdResult> {
        commands::borrow::run(&mut self.store, &self.policy, patron_id, book_id)
    }

    pub fn return_book(
        &mut self,
        patron_id: Option<&str>,
        book_id: BookId,
    ) -> Result<commands::CmdResult> {
        commands::return_book::run(&mut self.store, patron_id, book_id)
    }

    pub fn calculate_late_fee(
        &self,
        patron_id: &str,
        book_id: BookId,
    ) -> Result<commands::CmdResult> {
        commands::late_fee::run(&self.store, patron_id, book_id)
    }

    pub fn search_books(&self, query: &str, field: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, query, field)
    }

    pub fn get_patron_status(&self, patron_id: &str) -> Result<commands::CmdResult> {
        commands::patron_status::run(&self.store, patron_id)
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn seed_sample_catalog(&mut self) -> Result<()> {
        crate::seed::seed_sample_catalog(&mut self.store, &self.policy)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn policy(&self) -> &CirculationPolicy {
        &self.policy
    }
}

/// Collapses a command result into a `(success, message)` pair for callers
/// that only show a status line.
pub fn outcome(result: Result<commands::CmdResult>) -> (bool, String) {
    match result {
        Ok(result) => (true, result.message_text()),
        Err(e) => (false, e.to_string()),
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::store::memory::InMemoryStore;

    fn api() -> LibraryApi<InMemoryStore> {
        LibraryApi::new(InMemoryStore::new(), CirculationPolicy::default())
    }

    #[test]
    fn add_then_borrow() {
        let mut api = api();
        let (ok, message) = outcome(api.add_book("Dune", "Frank Herbert", "9780441013593", 3));
        assert!(ok);
        assert!(message.contains("Dune"));

        let id = api.list_books().unwrap().listed_books[0].id;
        let (ok, _) = outcome(api.borrow_book(Some("654321"), id));
        assert!(ok);
        assert_eq!(api.store().get_book(id).unwrap().available_copies, 2);
    }

    #[test]
    fn outcome_of_a_failure_carries_the_error_text() {
        let mut api = api();
        let (ok, message) = outcome(api.add_book(&"A".repeat(201), "Author", "1234567890123", 1));
        assert!(!ok);
        assert!(message.contains("200 characters"));

        let (ok, message) = outcome(api.borrow_book(Some("abcdef"), 1));
        assert!(!ok);
        assert!(message.contains("digits"));
    }

    #[test]
    fn stubs_dispatch() {
        let mut api = api();

        let err = api.return_book(Some("123456"), 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotImplemented);

        let fee = api.calculate_late_fee("123456", 1).unwrap().late_fee.unwrap();
        assert_eq!(fee.fee_amount, 0.0);

        assert!(api
            .search_books("test", "title")
            .unwrap()
            .listed_books
            .is_empty());
        assert!(api
            .get_patron_status("123456")
            .unwrap()
            .patron_status
            .unwrap()
            .is_empty());
    }

    #[test]
    fn policy_is_passed_to_borrow() {
        let policy = CirculationPolicy {
            loan_period_days: 14,
            max_loans_per_patron: 0,
        };
        let mut api = LibraryApi::new(InMemoryStore::new(), policy);
        api.add_book("Dune", "Frank Herbert", "9780441013593", 3)
            .unwrap();

        let err = api.borrow_book(Some("654321"), 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LimitReached);
        assert_eq!(api.policy().max_loans_per_patron, 0);
    }

    #[test]
    fn seeding_through_the_api() {
        let mut api = api();
        api.seed_sample_catalog().unwrap();
        assert_eq!(api.list_books().unwrap().listed_books.len(), 3);
    }

    #[test]
    fn huge_loan_period_is_an_error_not_a_panic() {
        let policy = CirculationPolicy {
            loan_period_days: u32::MAX,
            max_loans_per_patron: 5,
        };
        let mut api = LibraryApi::new(InMemoryStore::new(), policy);
        assert_eq!(
            api.seed_sample_catalog().unwrap_err().kind(),
            ErrorKind::Config
        );

        api.add_book("Dune", "Frank Herbert", "9780441013593", 1)
            .unwrap();
        let (ok, message) = outcome(api.borrow_book(Some("654321"), 1));
        assert!(!ok);
        assert!(message.starts_with("Config error"));
        assert_eq!(api.store().get_book(1).unwrap().available_copies, 1);
    }
}
