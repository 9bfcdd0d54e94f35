//! Terminal output for the `libris` binary. Not part of the library API.

pub(crate) mod print;
