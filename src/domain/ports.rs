use super::account::Account;
use super::transfer::TransferRequest;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// The ledger contract: owns every account and enforces transfer invariants.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Inserts `account`, failing with `DuplicateAccount` if its id is taken.
    async fn create_account(&self, account: Account) -> Result<()>;
    /// Returns a snapshot of the account, or `None` if the id is unknown.
    async fn get_account(&self, account_id: &str) -> Result<Option<Account>>;
    /// Returns a snapshot of every account, ordered by id.
    async fn all_accounts(&self) -> Result<Vec<Account>>;
    /// Removes every account. Not coordinated with in-flight transfers.
    async fn clear_accounts(&self) -> Result<()>;
    /// Moves funds from one account to another, notifying each leg.
    async fn transfer(&self, request: &TransferRequest) -> Result<()>;
}

/// Receives one call per committed balance change.
///
/// Errors are logged by the caller and never undo the change.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn notify_about_transfer(&self, account: &Account, message: &str) -> Result<()>;
}

pub type AccountRepositoryBox = Box<dyn AccountRepository>;
pub type NotificationSinkArc = Arc<dyn NotificationSink>;
