//! Inbound and outbound adapters: the JSON API boundary and CSV batch files.

pub mod api;
pub mod csv;
