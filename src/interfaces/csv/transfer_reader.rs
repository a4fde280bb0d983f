use crate::domain::transfer::TransferRequest;
use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransferRecord {
    account_from_id: String,
    account_to_id: String,
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
}

/// Reads transfer requests from a CSV source with the header
/// `accountFromId,accountToId,amount`.
///
/// Rows are validated as they are read, so every `Ok` item is a well-formed
/// `TransferRequest`.
pub struct TransferReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> TransferReader<R> {
    /// Creates a new `TransferReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and validates transfers.
    pub fn transfers(self) -> impl Iterator<Item = Result<TransferRequest>> {
        self.reader
            .into_deserialize::<TransferRecord>()
            .map(|result| {
                let record = result.map_err(LedgerError::from)?;
                TransferRequest::new(record.account_from_id, record.account_to_id, record.amount)
            })
    }
}
