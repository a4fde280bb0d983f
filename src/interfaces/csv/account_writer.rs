use crate::domain::account::Account;
use crate::error::Result;
use std::io::Write;

/// Writes final account balances as CSV (`accountId,balance`).
pub struct AccountWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> AccountWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_accounts(&mut self, accounts: impl IntoIterator<Item = Account>) -> Result<()> {
        self.writer.write_record(["accountId", "balance"])?;
        for account in accounts {
            let balance = account.balance().to_string();
            self.writer
                .write_record([account.account_id(), balance.as_str()])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
