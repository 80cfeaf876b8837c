//! Text formatting for amounts, dates and ledger rows

use std::fmt::Write;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PresentationConfig;
use crate::model::{Timestamp, Transaction, TransactionType};
use crate::money::round_currency;

/// `1234.50€`
pub fn format_currency(value: Decimal, cfg: &PresentationConfig) -> String {
    format!("{}{}", round_currency(value), cfg.currency_symbol)
}

/// `+12.00€`, the expected-gain style
pub fn format_gain(value: Decimal, cfg: &PresentationConfig) -> String {
    let sign = if value.is_sign_negative() && !value.is_zero() { "" } else { "+" };
    format!("{}{}", sign, format_currency(value, cfg))
}

/// `+€12.00` / `-€12.00`, the ledger-row style
pub fn format_signed(kind: TransactionType, amount: Decimal, cfg: &PresentationConfig) -> String {
    let sign = if kind.is_deposit() { '+' } else { '-' };
    format!("{}{}{}", sign, cfg.currency_symbol, round_currency(amount.abs()))
}

/// Axis label for a chart point
pub fn format_chart_date(ts: &Timestamp, cfg: &PresentationConfig) -> String {
    format_with(ts.as_datetime(), &cfg.chart_date_format, cfg)
}

/// Date shown on a ledger row
pub fn format_transaction_date(ts: &Timestamp, cfg: &PresentationConfig) -> String {
    format_with(ts.as_datetime(), &cfg.transaction_date_format, cfg)
}

pub fn format_datetime(value: Option<NaiveDateTime>, format: &str, cfg: &PresentationConfig) -> String {
    format_with(value, format, cfg)
}

fn format_with(value: Option<NaiveDateTime>, format: &str, cfg: &PresentationConfig) -> String {
    let Some(dt) = value else {
        return cfg.invalid_date_label.clone();
    };

    // A bad format string from config must not panic
    let mut out = String::new();
    match write!(out, "{}", dt.format(format)) {
        Ok(()) => out,
        Err(_) => {
            log::warn!("Invalid date format '{}', using placeholder", format);
            cfg.invalid_date_label.clone()
        }
    }
}

/// One line of the transaction list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRow {
    pub id: u64,
    pub kind_label: String,
    pub date: String,
    pub amount: String,
    pub is_positive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub fn transaction_row(tx: &Transaction, cfg: &PresentationConfig) -> TransactionRow {
    let kind_label = match tx.kind {
        TransactionType::Deposit => cfg.deposit_label.clone(),
        TransactionType::Withdrawal => cfg.withdrawal_label.clone(),
    };

    TransactionRow {
        id: tx.id,
        kind_label,
        date: format_transaction_date(&tx.timestamp, cfg),
        amount: format_signed(tx.kind, tx.amount, cfg),
        is_positive: tx.kind.is_deposit(),
        description: tx.description.clone(),
    }
}
