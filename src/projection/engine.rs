//! Year-by-year growth projection for a single investment
//!
//! The gain curve spreads the upstream expected return evenly over whole years; it does
//! not re-derive compound interest. Each point is computed from its year index alone and
//! rounded on its own, so no rounding error is carried from one year to the next.

use log::debug;
use rust_decimal::Decimal;

use super::series::{YearPoint, YearSeries};
use super::terms::InvestmentTerms;
use crate::money::round_currency;

const MONTHS_PER_YEAR: u32 = 12;

/// Project an investment over its whole years.
///
/// Durations under a year produce a single starting point instead of dividing by zero.
/// Terms are expected to come from a validated `Investment` or a successful simulation.
pub fn project(terms: &InvestmentTerms) -> YearSeries {
    let years = terms.whole_years();
    let mut series = YearSeries::new(years);

    if years == 0 {
        debug!(
            "Duration of {} months is under a year, emitting start point only",
            terms.duration_months
        );
        series.add_point(YearPoint {
            year: 0,
            gain: round_currency(Decimal::ZERO),
            principal: round_currency(terms.principal),
            contribution: round_currency(terms.principal),
        });
        return series;
    }

    let annual_gain = terms.expected_return / Decimal::from(years);
    let yearly_contribution =
        terms.monthly_contribution.unwrap_or(Decimal::ZERO) * Decimal::from(MONTHS_PER_YEAR);

    for year in 0..=years {
        series.add_point(year_point(terms, year, annual_gain, yearly_contribution));
    }

    debug!("Projected {} years ({} points)", years, series.len());
    series
}

fn year_point(
    terms: &InvestmentTerms,
    year: u32,
    annual_gain: Decimal,
    yearly_contribution: Decimal,
) -> YearPoint {
    let i = Decimal::from(year);
    YearPoint {
        year,
        gain: round_currency(annual_gain * i),
        principal: round_currency(terms.principal),
        contribution: round_currency(terms.principal + yearly_contribution * i),
    }
}
