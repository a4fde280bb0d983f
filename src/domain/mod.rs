//! Domain layer: account and transfer value objects plus the ports the
//! ledger is built around.

pub mod account;
pub mod ports;
pub mod transfer;
