//! View models for the dashboard, account and investment pages
//!
//! Each `derive_*` call is a pure function of one snapshot and the presentation config.
//! Nothing is carried over from earlier snapshots; callers simply derive again when a
//! fresh snapshot arrives.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{Account, Investment};
use crate::portfolio::{aggregate, PortfolioSummary};
use crate::presentation::format::{format_chart_date, format_datetime};
use crate::presentation::{
    balance_chart, format_currency, format_gain, portfolio_chart, projection_chart, transaction_row,
    ChartData, PresentationConfig, TransactionRow,
};
use crate::projection::{maturity_date, project, InvestmentTerms, ProjectionCache, ProjectionSummary, YearSeries};
use crate::source::{AccountSnapshot, DashboardSnapshot, InvestmentSnapshot};
use crate::timeline::{chronological, running_balance, BalancePoint};

/// Headline figures, already formatted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTotals {
    pub total_balance: String,
    pub total_invested: String,
    pub total_expected_return: String,
}

/// Card for one investment on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentCard {
    pub id: u64,
    pub asset: String,
    pub confirmed: bool,
    pub invested: String,
    pub expected_gain: String,
    pub outlook: ProjectionSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub summary: PortfolioSummary,
    pub totals: DashboardTotals,
    pub chart: ChartData,
    pub confirmed: Vec<InvestmentCard>,
    pub pending: Vec<InvestmentCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub account: Account,
    pub balance: String,
    pub balance_curve: Vec<BalancePoint>,
    pub chart: ChartData,
    /// Ledger rows in chronological order
    pub transactions: Vec<TransactionRow>,
    pub investments: Vec<InvestmentCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentView {
    pub investment: Investment,
    pub amount: String,
    pub monthly_contribution: String,
    pub expected_return: String,
    pub start_date: String,
    pub maturity_date: String,
    pub projection: YearSeries,
    pub outlook: ProjectionSummary,
    pub chart: ChartData,
    pub transactions: Vec<TransactionRow>,
}

/// Dashboard: roll-ups, doughnut chart and one card per investment
pub fn derive_dashboard(snapshot: &DashboardSnapshot, cfg: &PresentationConfig) -> DashboardView {
    let summary = aggregate(&snapshot.accounts, &snapshot.investments);

    // Re-simulated investments often share identical terms
    let mut cache = ProjectionCache::new();
    let confirmed = cards(&summary.confirmed_investments, &mut cache, cfg);
    let pending = cards(&summary.pending_investments, &mut cache, cfg);

    let totals = DashboardTotals {
        total_balance: format_currency(summary.total_balance, cfg),
        total_invested: format_currency(summary.total_invested, cfg),
        total_expected_return: format_currency(summary.total_expected_return, cfg),
    };

    DashboardView {
        chart: portfolio_chart(&summary, cfg),
        totals,
        confirmed,
        pending,
        summary,
    }
}

/// Account page: balance curve, ledger and the account's investments
pub fn derive_account(snapshot: &AccountSnapshot, cfg: &PresentationConfig) -> AccountView {
    let balance_curve = running_balance(&snapshot.transactions);
    let transactions = chronological(&snapshot.transactions)
        .into_iter()
        .map(|tx| transaction_row(tx, cfg))
        .collect();

    let mut cache = ProjectionCache::new();

    AccountView {
        account: snapshot.account.normalized(),
        balance: format_currency(snapshot.account.balance, cfg),
        chart: balance_chart(&balance_curve, cfg),
        balance_curve,
        transactions,
        investments: cards(&snapshot.investments, &mut cache, cfg),
    }
}

/// Investment page: terms, dates, projection chart and ledger
pub fn derive_investment(snapshot: &InvestmentSnapshot, cfg: &PresentationConfig) -> InvestmentView {
    let inv = &snapshot.investment;
    let projection = project(&InvestmentTerms::from(inv));

    InvestmentView {
        investment: inv.normalized(),
        amount: format_currency(inv.amount, cfg),
        monthly_contribution: format_currency(inv.contribution_or_zero(), cfg),
        expected_return: format_gain(inv.expected_return, cfg),
        start_date: format_chart_date(&inv.simulated_at, cfg),
        maturity_date: format_datetime(
            maturity_date(&inv.simulated_at, inv.duration_months),
            &cfg.chart_date_format,
            cfg,
        ),
        outlook: projection.summary(),
        chart: projection_chart(&projection, cfg),
        projection,
        transactions: snapshot.transactions.iter().map(|tx| transaction_row(tx, cfg)).collect(),
    }
}

fn cards(
    investments: &[Investment],
    cache: &mut ProjectionCache,
    cfg: &PresentationConfig,
) -> Vec<InvestmentCard> {
    investments
        .iter()
        .map(|inv| InvestmentCard {
            id: inv.id,
            asset: inv.asset.clone(),
            confirmed: inv.confirmed,
            invested: format_currency(inv.amount, cfg),
            expected_gain: format_gain(inv.expected_return, cfg),
            outlook: cache.get_or_project(&InvestmentTerms::from(inv)).summary(),
        })
        .collect()
}

/// Final balance of a derived curve, zero when there are no movements
pub fn curve_terminus(curve: &[BalancePoint]) -> Decimal {
    curve
        .last()
        .map(|p| p.balance)
        .unwrap_or_else(crate::money::zero)
}
