#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use transfer_ledger::domain::account::Account;
use transfer_ledger::domain::ports::NotificationSink;
use transfer_ledger::error::{LedgerError, Result};
use transfer_ledger::infrastructure::in_memory::InMemoryAccountRepository;

/// Records every notification it receives.
#[derive(Default)]
pub struct RecordingSink {
    calls: Mutex<Vec<(String, String)>>,
}

impl RecordingSink {
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count_for(&self, account_id: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, _)| id == account_id)
            .count()
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn notify_about_transfer(&self, account: &Account, message: &str) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((account.account_id().to_string(), message.to_string()));
        Ok(())
    }
}

/// Always fails, like an unreachable mail server.
pub struct FailingSink;

#[async_trait]
impl NotificationSink for FailingSink {
    async fn notify_about_transfer(&self, _account: &Account, _message: &str) -> Result<()> {
        Err(LedgerError::Notification("connection refused".to_string()))
    }
}

pub fn recording_ledger() -> (Arc<InMemoryAccountRepository>, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let ledger = Arc::new(InMemoryAccountRepository::new(sink.clone()));
    (ledger, sink)
}
