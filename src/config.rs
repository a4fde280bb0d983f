//! Ledger configuration.

/// What the ledger does when the destination account disappears after the
/// source has already been debited (only possible if `clear_accounts` races
/// a transfer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreditFailurePolicy {
    /// Log the lost credit and report the transfer as successful.
    #[default]
    Ignore,
    /// Credit the amount back to the source and fail with `AccountNotFound`.
    Compensate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedgerConfig {
    pub credit_failure: CreditFailurePolicy,
}

impl LedgerConfig {
    pub fn compensating() -> Self {
        Self {
            credit_failure: CreditFailurePolicy::Compensate,
        }
    }
}
