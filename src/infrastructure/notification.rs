use crate::domain::account::Account;
use crate::domain::ports::NotificationSink;
use crate::error::Result;
use async_trait::async_trait;
use tracing::info;

/// Writes every notification to the log instead of delivering it.
#[derive(Debug, Default, Clone)]
pub struct LoggingNotificationSink;

impl LoggingNotificationSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationSink for LoggingNotificationSink {
    async fn notify_about_transfer(&self, account: &Account, message: &str) -> Result<()> {
        info!(
            account_id = account.account_id(),
            balance = %account.balance(),
            "{message}"
        );
        Ok(())
    }
}
