//! Wallet snapshots and transaction lookups.
//!
//! Wallets and transactions are read-only collections; the interesting part
//! is the validation pipeline in front of the transaction scan.

pub mod handlers;
pub mod types;

pub use types::{Transaction, Wallet};
