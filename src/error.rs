use thiserror::Error;

/// Errors surfaced by the ledger and its boundaries.
///
/// The `Display` text of the three ledger variants is part of the external
/// contract and is returned verbatim to API clients.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Account id {0} already exists!")]
    DuplicateAccount(String),
    #[error("account does not exist! account id = {0}")]
    AccountNotFound(String),
    #[error("balance is not sufficient in account id = {0}")]
    InsufficientBalance(String),
    #[error("{0}")]
    Validation(String),
    #[error("Notification error: {0}")]
    Notification(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
