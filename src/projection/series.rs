//! Year-indexed projection output

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::MAX_DURATION_MONTHS;

const MAX_YEARS: u32 = MAX_DURATION_MONTHS / 12;

/// One year of the projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearPoint {
    /// Year index, 0 = start
    pub year: u32,

    /// Cumulative gain reference curve
    pub gain: Decimal,

    /// Flat principal reference curve
    pub principal: Decimal,

    /// Principal plus the PAC contributions paid so far
    pub contribution: Decimal,
}

/// Complete projection for one investment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSeries {
    /// Whole years covered by the projection (0 for sub-year durations)
    pub years: u32,

    /// `years + 1` points, or a single point when `years` is 0
    pub points: Vec<YearPoint>,
}

impl YearSeries {
    pub fn new(years: u32) -> Self {
        Self {
            years,
            points: Vec::with_capacity(years.min(MAX_YEARS) as usize + 1),
        }
    }

    pub fn add_point(&mut self, point: YearPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn gains(&self) -> Vec<Decimal> {
        self.points.iter().map(|p| p.gain).collect()
    }

    pub fn principals(&self) -> Vec<Decimal> {
        self.points.iter().map(|p| p.principal).collect()
    }

    pub fn contributions(&self) -> Vec<Decimal> {
        self.points.iter().map(|p| p.contribution).collect()
    }

    pub fn final_point(&self) -> Option<&YearPoint> {
        self.points.last()
    }

    /// End-of-projection figures
    pub fn summary(&self) -> ProjectionSummary {
        let zero = crate::money::zero();
        let (final_gain, final_principal, final_contribution) = self
            .final_point()
            .map(|p| (p.gain, p.principal, p.contribution))
            .unwrap_or((zero, zero, zero));

        ProjectionSummary {
            years: self.years,
            final_gain,
            final_principal,
            final_contribution,
            projected_value: crate::money::round_currency(final_contribution + final_gain),
        }
    }
}

/// End-of-projection figures for display next to the chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub years: u32,
    pub final_gain: Decimal,
    pub final_principal: Decimal,
    pub final_contribution: Decimal,
    /// Paid-in capital plus gain at the last whole year
    pub projected_value: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn point(year: u32, gain: Decimal, contribution: Decimal) -> YearPoint {
        YearPoint {
            year,
            gain,
            principal: dec!(1000.00),
            contribution,
        }
    }

    #[test]
    fn test_summary_uses_last_point() {
        let mut series = YearSeries::new(2);
        series.add_point(point(0, dec!(0.00), dec!(1000.00)));
        series.add_point(point(1, dec!(100.00), dec!(2200.00)));
        series.add_point(point(2, dec!(200.00), dec!(3400.00)));

        let summary = series.summary();
        assert_eq!(summary.final_gain, dec!(200.00));
        assert_eq!(summary.final_contribution, dec!(3400.00));
        assert_eq!(summary.projected_value, dec!(3600.00));
        assert_eq!(series.gains(), vec![dec!(0), dec!(100), dec!(200)]);
    }

    #[test]
    fn test_empty_summary_is_zero() {
        let series = YearSeries::new(0);
        assert!(series.is_empty());

        let summary = series.summary();
        assert!(summary.projected_value.is_zero());
        assert_eq!(summary.projected_value.scale(), 2);
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let mut series = YearSeries::new(0);
        series.add_point(point(0, dec!(0.00), dec!(1000.00)));

        let json = serde_json::to_value(series.summary()).unwrap();
        assert_eq!(json["projectedValue"], "1000.00");
        assert_eq!(json["finalContribution"], "1000.00");
    }
}
