//! # Command Layer
//!
//! This module contains the **core business logic** of libris. Each command
//! lives in its own submodule as a plain `run` function over a
//! [`CatalogStore`](crate::store::CatalogStore).
//!
//! Commands validate their input, mutate the store, and return a structured
//! [`CmdResult`]. They do no I/O: no stdout, no exit codes, no prompts.
//! Failures come back as [`LibrisError`](crate::error::LibrisError) values.
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! `InMemoryStore` and the `StoreFixture` builder.
//!
//! ## Command Modules
//!
//! - [`add`]: Add a book to the catalog
//! - [`borrow`]: Lend a copy to a patron
//! - [`list`]: List the catalog
//! - [`return_book`]: Return a copy (not implemented)
//! - [`late_fee`]: Late fee for a loan (not implemented)
//! - [`search`]: Search the catalog (not implemented)
//! - [`patron_status`]: Patron report (not implemented)

use crate::model::{Book, BorrowRecord, LateFee, PatronStatus};

pub mod add;
pub mod borrow;
pub mod late_fee;
pub mod list;
pub mod patron_status;
pub mod return_book;
pub mod search;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Books changed by the command, as stored after the change
    pub affected_books: Vec<Book>,
    /// Books to display
    pub listed_books: Vec<Book>,
    /// Loans created by the command
    pub loans: Vec<BorrowRecord>,
    pub late_fee: Option<LateFee>,
    pub patron_status: Option<PatronStatus>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_late_fee(mut self, fee: LateFee) -> Self {
        self.late_fee = Some(fee);
        self
    }

    pub fn with_patron_status(mut self, status: PatronStatus) -> Self {
        self.patron_status = Some(status);
        self
    }

    /// All message texts, one per line.
    pub fn message_text(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
