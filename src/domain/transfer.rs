use super::account::Amount;
use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;

/// A request to move `amount` from one account to another.
///
/// Valid by construction: both ids are non-empty and the amount is not
/// negative. The two ids may be equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    account_from_id: String,
    account_to_id: String,
    amount: Amount,
}

impl TransferRequest {
    pub fn new(
        account_from_id: impl Into<String>,
        account_to_id: impl Into<String>,
        amount: Decimal,
    ) -> Result<Self> {
        let account_from_id = account_from_id.into();
        let account_to_id = account_to_id.into();
        if account_from_id.is_empty() {
            return Err(LedgerError::Validation(
                "accountFromId must not be empty".to_string(),
            ));
        }
        if account_to_id.is_empty() {
            return Err(LedgerError::Validation(
                "accountToId must not be empty".to_string(),
            ));
        }
        Ok(Self {
            account_from_id,
            account_to_id,
            amount: Amount::new(amount)?,
        })
    }

    pub fn account_from_id(&self) -> &str {
        &self.account_from_id
    }

    pub fn account_to_id(&self) -> &str {
        &self.account_to_id
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}
