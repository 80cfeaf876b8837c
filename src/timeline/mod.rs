//! Chronological ordering of ledger movements and running-balance curves

mod running_balance;

pub use running_balance::{chronological, running_balance, BalancePoint};
