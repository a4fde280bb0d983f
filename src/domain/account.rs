use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A monetary value held by an account.
///
/// Wraps `rust_decimal::Decimal` so balances never pass through floating point.
/// Serialized as an exact JSON number (`500`, `123.45`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Balance(#[serde(with = "rust_decimal::serde::arbitrary_precision")] pub Decimal);

/// A non-negative amount to move between accounts.
///
/// Zero is accepted; a zero transfer still runs both legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            Err(LedgerError::Validation(
                "Requested transaction amount can't be negative".to_string(),
            ))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = LedgerError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl From<Amount> for Balance {
    fn from(amount: Amount) -> Self {
        Self(amount.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Add for Balance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Balance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Balance {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Balance {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// A ledger entry: an immutable identifier and a non-negative balance.
///
/// Fields are private so the only way to change a balance is through
/// [`Account::debit`] and [`Account::credit`], which keep `balance >= 0`.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    account_id: String,
    balance: Balance,
}

impl Account {
    /// Builds an account, rejecting an empty id or a negative opening balance.
    pub fn new(account_id: impl Into<String>, balance: Decimal) -> Result<Self> {
        let account_id = account_id.into();
        if account_id.is_empty() {
            return Err(LedgerError::Validation(
                "accountId must not be empty".to_string(),
            ));
        }
        if balance.is_sign_negative() && !balance.is_zero() {
            return Err(LedgerError::Validation(
                "Initial balance must not be negative".to_string(),
            ));
        }
        Ok(Self {
            account_id,
            balance: Balance(balance),
        })
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn balance(&self) -> Balance {
        self.balance
    }

    /// Subtracts `amount` if the balance covers it.
    pub fn debit(&mut self, amount: Amount) -> Result<()> {
        let amount = Balance::from(amount);
        if self.balance >= amount {
            self.balance -= amount;
            Ok(())
        } else {
            Err(LedgerError::InsufficientBalance(self.account_id.clone()))
        }
    }

    pub fn credit(&mut self, amount: Amount) {
        self.balance += Balance::from(amount);
    }
}
