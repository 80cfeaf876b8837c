//! File-backed snapshot source
//!
//! Reads a data directory laid out like the API's collections:
//! `accounts`, `transactions`, `investments` and `investment_transactions`, each as a
//! `.json` array or a `.csv` file with a header row. Every record is validated on load and
//! its currency fields are brought to two decimal places.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::PathBuf;

use super::loader::load_records;
use super::SnapshotSource;
use crate::errors::{Error, Result};
use crate::model::{Account, AccountRef, Investment, Timestamp, Transaction, TransactionType};

const ACCOUNTS: &str = "accounts";
const TRANSACTIONS: &str = "transactions";
const INVESTMENTS: &str = "investments";
const INVESTMENT_TRANSACTIONS: &str = "investment_transactions";

/// Default data directory
pub const DEFAULT_DATA_PATH: &str = "data";

/// Ledger row of an investment, keyed by the investment it belongs to
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InvestmentLedgerRow {
    investment_id: u64,
    id: u64,
    #[serde(rename = "type")]
    kind: TransactionType,
    amount: Decimal,
    timestamp: Timestamp,
    #[serde(default)]
    description: Option<String>,
}

impl InvestmentLedgerRow {
    fn into_transaction(self) -> Transaction {
        Transaction {
            id: self.id,
            account_id: None,
            kind: self.kind,
            amount: self.amount,
            timestamp: self.timestamp,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    fn all_transactions(&self) -> Result<Vec<Transaction>> {
        let txs: Vec<Transaction> = load_records(&self.root, TRANSACTIONS)?;
        txs.iter().try_for_each(Transaction::validate)?;
        Ok(txs.iter().map(Transaction::normalized).collect())
    }
}

impl SnapshotSource for DirectorySource {
    fn accounts(&self) -> Result<Vec<Account>> {
        let accounts: Vec<Account> = load_records(&self.root, ACCOUNTS)?;
        accounts.iter().try_for_each(Account::validate)?;
        Ok(accounts.iter().map(Account::normalized).collect())
    }

    fn account(&self, account_id: u64) -> Result<Account> {
        self.accounts()?
            .into_iter()
            .find(|a| a.id == account_id)
            .ok_or(Error::NotFound { entity: "account", id: account_id })
    }

    fn account_transactions(&self, account_id: u64) -> Result<Vec<Transaction>> {
        Ok(self
            .all_transactions()?
            .into_iter()
            .filter(|tx| tx.account_id == Some(account_id))
            .collect())
    }

    fn account_investments(&self, account_id: u64) -> Result<Vec<Investment>> {
        let all = self.investments()?;
        Ok(crate::portfolio::investments_for_account(&all, account_id))
    }

    fn investments(&self) -> Result<Vec<Investment>> {
        let investments: Vec<Investment> = load_records(&self.root, INVESTMENTS)?;
        investments.iter().try_for_each(Investment::validate)?;
        Ok(investments.iter().map(Investment::normalized).collect())
    }

    fn investment(&self, investment_id: u64) -> Result<Investment> {
        let mut investment = self
            .investments()?
            .into_iter()
            .find(|i| i.id == investment_id)
            .ok_or(Error::NotFound { entity: "investment", id: investment_id })?;

        // The API embeds {id, name} of the owning account
        if investment.account.is_none() {
            if let Some(account_id) = investment.account_id {
                let account = self.account(account_id)?;
                investment.account = Some(AccountRef { id: account.id, name: account.name });
            }
        }

        Ok(investment)
    }

    fn investment_transactions(&self, investment_id: u64) -> Result<Vec<Transaction>> {
        let rows: Vec<InvestmentLedgerRow> = load_records(&self.root, INVESTMENT_TRANSACTIONS)?;
        let txs: Vec<Transaction> = rows
            .into_iter()
            .filter(|row| row.investment_id == investment_id)
            .map(InvestmentLedgerRow::into_transaction)
            .collect();
        txs.iter().try_for_each(Transaction::validate)?;
        Ok(txs.iter().map(Transaction::normalized).collect())
    }
}
