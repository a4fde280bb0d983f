//! Request/response boundary for the accounts API.
//!
//! Framework-agnostic: an HTTP adapter passes raw JSON bodies and path
//! segments in and writes the returned [`ApiResponse`] back out. Route shape:
//!
//! | route                          | method                            |
//! |--------------------------------|-----------------------------------|
//! | `POST /v1/accounts`            | [`AccountsController::create_account`] |
//! | `GET /v1/accounts/{accountId}` | [`AccountsController::get_account`]    |
//! | `POST /v1/accounts/transaction`| [`AccountsController::transfer_money`] |

use crate::application::service::AccountsService;
use crate::domain::account::Account;
use crate::domain::transfer::TransferRequest;
use crate::error::LedgerError;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Created,
    BadRequest,
    NotFound,
    InternalServerError,
}

impl Status {
    pub fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::Created => 201,
            Status::BadRequest => 400,
            Status::NotFound => 404,
            Status::InternalServerError => 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: Status,
    pub body: Option<String>,
}

impl ApiResponse {
    fn empty(status: Status) -> Self {
        Self { status, body: None }
    }

    fn with_body(status: Status, body: impl Into<String>) -> Self {
        Self {
            status,
            body: Some(body.into()),
        }
    }
}

impl From<LedgerError> for ApiResponse {
    fn from(err: LedgerError) -> Self {
        let status = match err {
            LedgerError::DuplicateAccount(_)
            | LedgerError::AccountNotFound(_)
            | LedgerError::InsufficientBalance(_)
            | LedgerError::Validation(_)
            | LedgerError::Json(_) => Status::BadRequest,
            _ => Status::InternalServerError,
        };
        Self::with_body(status, err.to_string())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateAccountBody {
    account_id: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    balance: Decimal,
}

impl TryFrom<CreateAccountBody> for Account {
    type Error = LedgerError;

    fn try_from(body: CreateAccountBody) -> Result<Self, Self::Error> {
        Account::new(body.account_id, body.balance)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransferBody {
    account_from_id: String,
    account_to_id: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    amount: Decimal,
}

impl TryFrom<TransferBody> for TransferRequest {
    type Error = LedgerError;

    fn try_from(body: TransferBody) -> Result<Self, Self::Error> {
        TransferRequest::new(body.account_from_id, body.account_to_id, body.amount)
    }
}

fn parse<T, U>(body: &str) -> Result<U, LedgerError>
where
    T: for<'de> Deserialize<'de>,
    U: TryFrom<T, Error = LedgerError>,
{
    let raw: T = serde_json::from_str(body)?;
    U::try_from(raw)
}

pub struct AccountsController {
    service: Arc<AccountsService>,
}

impl AccountsController {
    pub fn new(service: Arc<AccountsService>) -> Self {
        Self { service }
    }

    /// `POST /v1/accounts`
    pub async fn create_account(&self, body: &str) -> ApiResponse {
        let account: Account = match parse::<CreateAccountBody, _>(body) {
            Ok(account) => account,
            Err(e) => return e.into(),
        };
        info!(account_id = account.account_id(), "create account request");

        match self.service.create_account(account).await {
            Ok(()) => ApiResponse::empty(Status::Created),
            Err(e) => e.into(),
        }
    }

    /// `GET /v1/accounts/{accountId}`
    pub async fn get_account(&self, account_id: &str) -> ApiResponse {
        match self.service.get_account(account_id).await {
            Ok(Some(account)) => match serde_json::to_string(&account) {
                Ok(json) => ApiResponse::with_body(Status::Ok, json),
                Err(e) => ApiResponse::with_body(Status::InternalServerError, e.to_string()),
            },
            Ok(None) => ApiResponse::empty(Status::NotFound),
            Err(e) => e.into(),
        }
    }

    /// `POST /v1/accounts/transaction`
    pub async fn transfer_money(&self, body: &str) -> ApiResponse {
        let request: TransferRequest = match parse::<TransferBody, _>(body) {
            Ok(request) => request,
            Err(e) => return e.into(),
        };

        match self.service.transfer(&request).await {
            Ok(()) => ApiResponse::empty(Status::Ok),
            Err(e) => {
                warn!(error = %e, "transfer rejected");
                e.into()
            }
        }
    }
}
