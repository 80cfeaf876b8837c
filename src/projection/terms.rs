//! Contract terms that drive a growth projection

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::Investment;

/// Inputs of a projection, detached from the investment record.
///
/// Hashable so projections can be memoized on the exact inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvestmentTerms {
    /// Principal
    pub principal: Decimal,

    /// Annual rate in percent
    pub annual_rate_percent: Decimal,

    pub duration_months: u32,

    /// Monthly PAC contribution, if any
    pub monthly_contribution: Option<Decimal>,

    /// Total gain over the whole duration, as computed upstream
    pub expected_return: Decimal,
}

impl InvestmentTerms {
    pub fn new(
        principal: Decimal,
        annual_rate_percent: Decimal,
        duration_months: u32,
        monthly_contribution: Option<Decimal>,
        expected_return: Decimal,
    ) -> Self {
        Self {
            principal,
            annual_rate_percent,
            duration_months,
            monthly_contribution,
            expected_return,
        }
    }

    /// Whole years covered by the duration (partial years are dropped)
    pub fn whole_years(&self) -> u32 {
        self.duration_months / 12
    }
}

impl From<&Investment> for InvestmentTerms {
    fn from(inv: &Investment) -> Self {
        Self {
            principal: inv.amount,
            annual_rate_percent: inv.interest_rate,
            duration_months: inv.duration_months,
            monthly_contribution: inv.monthly_contribution,
            expected_return: inv.expected_return,
        }
    }
}
