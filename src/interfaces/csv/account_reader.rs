use crate::domain::account::Account;
use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountRecord {
    account_id: String,
    #[serde(with = "rust_decimal::serde::str")]
    balance: Decimal,
}

/// Reads opening accounts from a CSV source with the header `accountId,balance`.
pub struct AccountReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> AccountReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn accounts(self) -> impl Iterator<Item = Result<Account>> {
        self.reader
            .into_deserialize::<AccountRecord>()
            .map(|result| {
                let record = result.map_err(LedgerError::from)?;
                Account::new(record.account_id, record.balance)
            })
    }
}
