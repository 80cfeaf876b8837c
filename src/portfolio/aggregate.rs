//! Totals and confirmation partition for the dashboard

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{Account, Investment};
use crate::money::sum_currency;

/// Portfolio roll-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Sum of the stored account balances
    pub total_balance: Decimal,

    /// Principal across every investment, confirmed or pending
    pub total_invested: Decimal,

    /// Upstream expected return across every investment
    pub total_expected_return: Decimal,

    /// Confirmed investments, in input order, with currency fields at two places
    pub confirmed_investments: Vec<Investment>,

    /// Simulations not yet confirmed, in input order
    pub pending_investments: Vec<Investment>,
}

/// Reduce accounts and investments into the dashboard roll-up.
///
/// Totals include pending simulations; only the two lists are split by confirmation.
/// Inputs are expected within the bounds checked by `Investment::validate`.
pub fn aggregate(accounts: &[Account], investments: &[Investment]) -> PortfolioSummary {
    let total_balance = sum_currency(accounts.iter().map(|a| a.balance));
    let total_invested = sum_currency(investments.iter().map(|i| i.amount));
    let total_expected_return = sum_currency(investments.iter().map(|i| i.expected_return));

    let (confirmed_investments, pending_investments): (Vec<_>, Vec<_>) =
        investments.iter().map(Investment::normalized).partition(|i| i.confirmed);

    debug!(
        "Aggregated {} accounts, {} investments ({} confirmed)",
        accounts.len(),
        investments.len(),
        confirmed_investments.len()
    );

    PortfolioSummary {
        total_balance,
        total_invested,
        total_expected_return,
        confirmed_investments,
        pending_investments,
    }
}

/// Investments owned by one account, in input order
pub fn investments_for_account(investments: &[Investment], account_id: u64) -> Vec<Investment> {
    investments
        .iter()
        .filter(|i| i.owner_account_id() == Some(account_id))
        .cloned()
        .collect()
}
