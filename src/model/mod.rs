//! Snapshot records: accounts, ledger transactions and investments

mod data;
mod timestamp;

pub use data::{Account, AccountRef, Investment, Transaction, TransactionType, MAX_DURATION_MONTHS};
pub use timestamp::Timestamp;
