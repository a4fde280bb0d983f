use crate::config::{CreditFailurePolicy, LedgerConfig};
use crate::domain::account::{Account, Amount};
use crate::domain::ports::{AccountRepository, NotificationSinkArc};
use crate::domain::transfer::TransferRequest;
use crate::error::{LedgerError, Result};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::{debug, error, warn};

/// The in-memory ledger.
///
/// Accounts live in a `DashMap`. Every balance change runs while holding the
/// entry guard of that one account, so the sufficiency check and the debit
/// can never be split by another writer. Guards are always released before a
/// notification is sent, so a sink may call back into the ledger.
///
/// Transfers are not atomic across the two accounts: the source is debited
/// and notified before the destination is credited. Readers can observe that
/// intermediate state.
pub struct InMemoryAccountRepository {
    accounts: DashMap<String, Account>,
    notifier: NotificationSinkArc,
    config: LedgerConfig,
}

impl InMemoryAccountRepository {
    /// Creates an empty ledger with the default configuration.
    pub fn new(notifier: NotificationSinkArc) -> Self {
        Self::with_config(notifier, LedgerConfig::default())
    }

    pub fn with_config(notifier: NotificationSinkArc, config: LedgerConfig) -> Self {
        Self {
            accounts: DashMap::new(),
            notifier,
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn debit(&self, account_id: &str, amount: Amount) -> Result<Account> {
        let mut entry = self
            .accounts
            .get_mut(account_id)
            .ok_or_else(|| LedgerError::AccountNotFound(account_id.to_string()))?;
        entry.value_mut().debit(amount)?;
        Ok(entry.value().clone())
    }

    fn credit(&self, account_id: &str, amount: Amount) -> Option<Account> {
        self.accounts.get_mut(account_id).map(|mut entry| {
            entry.value_mut().credit(amount);
            entry.value().clone()
        })
    }

    async fn notify(&self, account: &Account, message: &str) {
        if let Err(e) = self.notifier.notify_about_transfer(account, message).await {
            warn!(account_id = account.account_id(), error = %e, "notification failed");
        }
    }

    async fn handle_failed_credit(&self, from_id: &str, to_id: &str, amount: Amount) -> Result<()> {
        match self.config.credit_failure {
            CreditFailurePolicy::Ignore => {
                error!(
                    from = from_id,
                    to = to_id,
                    %amount,
                    "destination vanished after debit, credit not applied"
                );
                Ok(())
            }
            CreditFailurePolicy::Compensate => {
                match self.credit(from_id, amount) {
                    Some(refunded) => {
                        self.notify(
                            &refunded,
                            &format!("your account has been refunded with amount {amount}"),
                        )
                        .await;
                    }
                    None => error!(
                        from = from_id,
                        to = to_id,
                        %amount,
                        "source vanished as well, refund not applied"
                    ),
                }
                Err(LedgerError::AccountNotFound(to_id.to_string()))
            }
        }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create_account(&self, account: Account) -> Result<()> {
        match self.accounts.entry(account.account_id().to_string()) {
            Entry::Occupied(occupied) => Err(LedgerError::DuplicateAccount(occupied.key().clone())),
            Entry::Vacant(vacant) => {
                vacant.insert(account);
                Ok(())
            }
        }
    }

    async fn get_account(&self, account_id: &str) -> Result<Option<Account>> {
        Ok(self.accounts.get(account_id).map(|entry| entry.value().clone()))
    }

    async fn all_accounts(&self) -> Result<Vec<Account>> {
        let mut accounts: Vec<Account> = self
            .accounts
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        accounts.sort_by(|a, b| a.account_id().cmp(b.account_id()));
        Ok(accounts)
    }

    async fn clear_accounts(&self) -> Result<()> {
        self.accounts.clear();
        Ok(())
    }

    async fn transfer(&self, request: &TransferRequest) -> Result<()> {
        let from_id = request.account_from_id();
        let to_id = request.account_to_id();
        let amount = request.amount();

        if !self.accounts.contains_key(from_id) {
            return Err(LedgerError::AccountNotFound(from_id.to_string()));
        }
        if !self.accounts.contains_key(to_id) {
            return Err(LedgerError::AccountNotFound(to_id.to_string()));
        }

        let debited = self.debit(from_id, amount)?;
        debug!(account_id = from_id, %amount, balance = %debited.balance(), "debit committed");
        self.notify(
            &debited,
            &format!("your account has been debited with amount {amount}"),
        )
        .await;

        let Some(credited) = self.credit(to_id, amount) else {
            return self.handle_failed_credit(from_id, to_id, amount).await;
        };
        debug!(account_id = to_id, %amount, balance = %credited.balance(), "credit committed");
        self.notify(
            &credited,
            &format!("your account has been credited with amount {amount}"),
        )
        .await;

        Ok(())
    }
}
