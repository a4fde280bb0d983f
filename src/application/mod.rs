//! Application layer orchestrating requests against the ledger.
//!
//! `AccountsService` is the single entry point used by every interface
//! (API boundary, CSV batch runner). It receives already-validated value
//! objects and delegates to whichever `AccountRepository` it was built with.

pub mod service;
