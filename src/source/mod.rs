//! Read side of the dashboard API and snapshot assembly
//!
//! A view needs several reads. They run in parallel and are joined all-or-nothing: if any
//! read fails the whole snapshot fails with [`Error::Fetch`], so a view is never built from
//! partial data. Nothing is retried here, and after any mutation the caller fetches a fresh
//! snapshot.

mod directory;
pub mod loader;

pub use directory::{DirectorySource, DEFAULT_DATA_PATH};

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::model::{Account, Investment, Transaction};

/// Read contract of the ledger API
pub trait SnapshotSource: Sync {
    fn accounts(&self) -> Result<Vec<Account>>;

    fn account(&self, account_id: u64) -> Result<Account>;

    fn account_transactions(&self, account_id: u64) -> Result<Vec<Transaction>>;

    fn account_investments(&self, account_id: u64) -> Result<Vec<Investment>>;

    /// Every investment across all accounts
    fn investments(&self) -> Result<Vec<Investment>>;

    /// Single investment with its owning account embedded
    fn investment(&self, investment_id: u64) -> Result<Investment>;

    fn investment_transactions(&self, investment_id: u64) -> Result<Vec<Transaction>>;
}

/// Data behind the dashboard
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub accounts: Vec<Account>,
    pub investments: Vec<Investment>,
}

/// Data behind one account page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub account: Account,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub investments: Vec<Investment>,
}

/// Data behind one investment page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentSnapshot {
    pub investment: Investment,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl DashboardSnapshot {
    /// Check every record against the model bounds
    pub fn validate(&self) -> Result<()> {
        self.accounts.iter().try_for_each(Account::validate)?;
        self.investments.iter().try_for_each(Investment::validate)
    }
}

impl AccountSnapshot {
    pub fn validate(&self) -> Result<()> {
        self.account.validate()?;
        self.transactions.iter().try_for_each(Transaction::validate)?;
        self.investments.iter().try_for_each(Investment::validate)
    }
}

impl InvestmentSnapshot {
    pub fn validate(&self) -> Result<()> {
        self.investment.validate()?;
        self.transactions.iter().try_for_each(Transaction::validate)
    }
}

pub fn fetch_dashboard<S: SnapshotSource + ?Sized>(source: &S) -> Result<DashboardSnapshot> {
    let (accounts, investments) = rayon::join(|| source.accounts(), || source.investments());

    Ok(DashboardSnapshot {
        accounts: accounts.map_err(Error::fetch)?,
        investments: investments.map_err(Error::fetch)?,
    })
}

pub fn fetch_account<S: SnapshotSource + ?Sized>(source: &S, account_id: u64) -> Result<AccountSnapshot> {
    let (account, (transactions, investments)) = rayon::join(
        || source.account(account_id),
        || {
            rayon::join(
                || source.account_transactions(account_id),
                || source.account_investments(account_id),
            )
        },
    );

    Ok(AccountSnapshot {
        account: account.map_err(Error::fetch)?,
        transactions: transactions.map_err(Error::fetch)?,
        investments: investments.map_err(Error::fetch)?,
    })
}

pub fn fetch_investment<S: SnapshotSource + ?Sized>(
    source: &S,
    investment_id: u64,
) -> Result<InvestmentSnapshot> {
    let (investment, transactions) = rayon::join(
        || source.investment(investment_id),
        || source.investment_transactions(investment_id),
    );

    Ok(InvestmentSnapshot {
        investment: investment.map_err(Error::fetch)?,
        transactions: transactions.map_err(Error::fetch)?,
    })
}
