//! # Libris Architecture
//!
//! Libris is a **UI-agnostic library catalog**: add books, lend them to
//! patrons, and a stable surface for returns, late fees, search and patron
//! reports, which are not built yet. The `libris` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, cli/)                         │
//! │  - Parses arguments, prints results, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns store and policy         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation and catalog mutation                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CatalogStore trait, InMemoryStore                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no global catalog. A store is built explicitly and handed to the
//! API, so every test gets its own.
//!
//! ## Errors
//!
//! Every operation returns [`error::Result`]. Failures carry a
//! machine-readable [`error::ErrorKind`] and a human-readable message whose
//! wording is stable ("required", "13 digits", "6 digits", "not found",
//! "not implemented", ...). [`api::outcome`] folds a result into a
//! `(success, message)` pair.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: Core data types (`Book`, `PatronId`, `BorrowRecord`)
//! - [`validation`]: Field validation rules
//! - [`config`]: Configuration and circulation policy
//! - [`seed`]: Sample catalog
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod seed;
pub mod store;
pub mod validation;
