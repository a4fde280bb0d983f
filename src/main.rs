use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};
use transfer_ledger::application::service::AccountsService;
use transfer_ledger::config::LedgerConfig;
use transfer_ledger::infrastructure::in_memory::InMemoryAccountRepository;
use transfer_ledger::infrastructure::notification::LoggingNotificationSink;
use transfer_ledger::interfaces::csv::account_reader::AccountReader;
use transfer_ledger::interfaces::csv::account_writer::AccountWriter;
use transfer_ledger::interfaces::csv::transfer_reader::TransferReader;
use transfer_ledger::logging::{LogFormat, init_logging};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Opening accounts CSV file (accountId,balance)
    #[arg(long)]
    accounts: Option<PathBuf>,

    /// Transfers CSV file (accountFromId,accountToId,amount)
    #[arg(long)]
    transfers: Option<PathBuf>,

    /// Maximum number of transfers in flight at once. 1 processes them in file order.
    #[arg(long, default_value_t = 8)]
    concurrency: usize,

    /// Refund the source if the destination disappears before it is credited.
    #[arg(long)]
    compensate_failed_credit: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format, &cli.log_level);

    let config = if cli.compensate_failed_credit {
        LedgerConfig::compensating()
    } else {
        LedgerConfig::default()
    };
    let repository =
        InMemoryAccountRepository::with_config(Arc::new(LoggingNotificationSink::new()), config);
    let service = Arc::new(AccountsService::new(Box::new(repository)));

    if let Some(path) = cli.accounts {
        let file = File::open(path).into_diagnostic()?;
        for account in AccountReader::new(file).accounts() {
            match account {
                Ok(account) => {
                    if let Err(e) = service.create_account(account).await {
                        eprintln!("Error creating account: {}", e);
                    }
                }
                Err(e) => eprintln!("Error reading account: {}", e),
            }
        }
    }

    if let Some(path) = cli.transfers {
        let file = File::open(path).into_diagnostic()?;
        let permits = Arc::new(Semaphore::new(cli.concurrency.max(1)));
        let mut tasks = JoinSet::new();

        for request in TransferReader::new(file).transfers() {
            match request {
                Ok(request) => {
                    let permit = permits.clone().acquire_owned().await.into_diagnostic()?;
                    let service = service.clone();
                    tasks.spawn(async move {
                        let result = service.transfer(&request).await;
                        drop(permit);
                        result
                    });
                }
                Err(e) => eprintln!("Error reading transfer: {}", e),
            }
            while let Some(joined) = tasks.try_join_next() {
                report_transfer(joined)?;
            }
        }

        while let Some(joined) = tasks.join_next().await {
            report_transfer(joined)?;
        }
    }

    let accounts = service.all_accounts().await.into_diagnostic()?;
    let stdout = io::stdout();
    let mut writer = AccountWriter::new(stdout.lock());
    writer.write_accounts(accounts).into_diagnostic()?;

    Ok(())
}

fn report_transfer(
    joined: std::result::Result<transfer_ledger::error::Result<()>, JoinError>,
) -> Result<()> {
    if let Err(e) = joined.into_diagnostic()? {
        eprintln!("Error processing transfer: {}", e);
    }
    Ok(())
}
