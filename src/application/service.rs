use crate::domain::account::Account;
use crate::domain::ports::AccountRepositoryBox;
use crate::domain::transfer::TransferRequest;
use crate::error::Result;
use tracing::info;

/// The main entry point for account operations.
///
/// `AccountsService` owns the ledger behind the `AccountRepository` port, so
/// callers never touch account state directly.
pub struct AccountsService {
    repository: AccountRepositoryBox,
}

impl AccountsService {
    /// Creates a new `AccountsService` backed by `repository`.
    pub fn new(repository: AccountRepositoryBox) -> Self {
        Self { repository }
    }

    pub async fn create_account(&self, account: Account) -> Result<()> {
        info!(
            account_id = account.account_id(),
            balance = %account.balance(),
            "creating account"
        );
        self.repository.create_account(account).await
    }

    pub async fn get_account(&self, account_id: &str) -> Result<Option<Account>> {
        info!(account_id, "retrieving account");
        self.repository.get_account(account_id).await
    }

    /// Returns the current state of all accounts, ordered by id.
    pub async fn all_accounts(&self) -> Result<Vec<Account>> {
        self.repository.all_accounts().await
    }

    /// Empties the ledger. Intended for resets between test scenarios.
    pub async fn clear_accounts(&self) -> Result<()> {
        self.repository.clear_accounts().await
    }

    /// Moves funds as described by `request`.
    ///
    /// The request is valid by construction; ledger errors are returned as-is.
    pub async fn transfer(&self, request: &TransferRequest) -> Result<()> {
        info!(
            from = request.account_from_id(),
            to = request.account_to_id(),
            amount = %request.amount(),
            "transferring money"
        );
        self.repository.transfer(request).await
    }
}
