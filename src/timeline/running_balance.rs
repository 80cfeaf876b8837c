//! Running balance over an account's transactions
//!
//! The curve is derived from the ledger alone. It is not reconciled against the account's
//! stored balance; the two may legitimately diverge on a stale snapshot.

use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{Timestamp, Transaction};
use crate::money::round_currency;

/// One point of the balance curve, one per transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalancePoint {
    /// Timestamp of the transaction that produced this point
    pub label: Timestamp,

    /// Cumulative balance after the transaction, rounded to cents
    pub balance: Decimal,
}

/// Order transactions chronologically.
///
/// The sort is stable, so equal timestamps keep their input order. Entries whose timestamp
/// can't be parsed stay in the slot they occupied in the input; the datable entries are
/// sorted among the remaining slots.
pub fn chronological(transactions: &[Transaction]) -> Vec<&Transaction> {
    let mut dated: Vec<(usize, &Transaction)> = transactions
        .iter()
        .enumerate()
        .filter(|(_, tx)| tx.timestamp.is_valid())
        .collect();

    let undated = transactions.len() - dated.len();
    if undated > 0 {
        warn!("{} transaction(s) with unparseable timestamps kept in input order", undated);
    }

    dated.sort_by_key(|(_, tx)| tx.timestamp.as_datetime());

    let mut dated = dated.into_iter().map(|(_, tx)| tx);
    transactions
        .iter()
        .map(|tx| {
            if tx.timestamp.is_valid() {
                // Same count of dated slots as dated entries
                dated.next().unwrap_or(tx)
            } else {
                tx
            }
        })
        .collect()
}

/// Fold transactions into a cumulative balance curve.
///
/// Starts at zero; deposits add, withdrawals subtract. Empty input yields an empty curve.
/// Amounts are expected within the bounds `Transaction::validate` enforces.
pub fn running_balance(transactions: &[Transaction]) -> Vec<BalancePoint> {
    debug!("Computing running balance over {} transactions", transactions.len());

    let mut balance = Decimal::ZERO;
    chronological(transactions)
        .into_iter()
        .map(|tx| {
            balance += tx.signed_amount();
            BalancePoint {
                label: tx.timestamp.clone(),
                balance: round_currency(balance),
            }
        })
        .collect()
}
