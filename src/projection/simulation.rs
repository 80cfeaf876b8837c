//! Expected return of a simulated investment
//!
//! Monthly compounding on the principal plus an ordinary annuity for the PAC contributions.
//! The result is the gain only: paid-in capital is subtracted.

use chrono::{Months, NaiveDateTime};
use rust_decimal::{Decimal, MathematicalOps};

use crate::errors::{Error, Result};
use crate::model::{Timestamp, MAX_DURATION_MONTHS};
use crate::money::{round_currency, within_bounds, zero};

/// Expected gain at maturity.
///
/// # Arguments
/// * `principal` - Initial amount
/// * `monthly_contribution` - PAC paid at the end of every month (zero for none)
/// * `annual_rate_percent` - Nominal annual rate in percent, compounded monthly
/// * `duration_months` - Number of compounding periods
///
/// # Returns
/// Future value minus principal minus contributions, rounded to cents. Negative or
/// oversized amounts and durations over [`MAX_DURATION_MONTHS`] are rejected.
pub fn expected_return(
    principal: Decimal,
    monthly_contribution: Decimal,
    annual_rate_percent: Decimal,
    duration_months: u32,
) -> Result<Decimal> {
    for (name, value) in [("principal", principal), ("monthly contribution", monthly_contribution)] {
        if (value.is_sign_negative() && !value.is_zero()) || !within_bounds(value) {
            return Err(Error::validation(format!("{} {} is out of range", name, value)));
        }
    }
    if duration_months > MAX_DURATION_MONTHS {
        return Err(Error::validation(format!(
            "duration of {} months exceeds {}",
            duration_months, MAX_DURATION_MONTHS
        )));
    }

    let monthly_rate = annual_rate_percent / Decimal::from(12) / Decimal::ONE_HUNDRED;

    // Without interest the future value is exactly what was paid in
    if monthly_rate.is_zero() {
        return Ok(zero());
    }

    let periods = Decimal::from(duration_months);
    let growth = (Decimal::ONE + monthly_rate)
        .checked_powu(u64::from(duration_months))
        .ok_or(Error::Overflow("compound growth factor"))?;

    let fv_principal = principal
        .checked_mul(growth)
        .ok_or(Error::Overflow("future value of principal"))?;
    let fv_contributions = monthly_contribution
        .checked_mul(growth - Decimal::ONE)
        .and_then(|v| v.checked_div(monthly_rate))
        .ok_or(Error::Overflow("future value of contributions"))?;

    let paid_in = principal + monthly_contribution * periods;
    let gain = fv_principal
        .checked_add(fv_contributions)
        .and_then(|fv| fv.checked_sub(paid_in))
        .ok_or(Error::Overflow("future value"))?;
    if !within_bounds(gain) {
        return Err(Error::Overflow("expected return"));
    }
    Ok(round_currency(gain))
}

/// Maturity date: start date plus the duration in calendar months.
///
/// Month-end dates clamp to the last day of the target month. `None` when the start date
/// is unreadable.
pub fn maturity_date(simulated_at: &Timestamp, duration_months: u32) -> Option<NaiveDateTime> {
    simulated_at
        .as_datetime()
        .and_then(|start| start.checked_add_months(Months::new(duration_months)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::Datelike;
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal_macros::dec;

    fn reference(p: f64, c: f64, rate: f64, n: i32) -> f64 {
        let r = rate / 12.0 / 100.0;
        let g = (1.0 + r).powi(n);
        p * g + c * (g - 1.0) / r - p - c * n as f64
    }

    #[test]
    fn test_principal_only() {
        let gain = expected_return(dec!(1000), dec!(0), dec!(5), 12).unwrap();
        assert_relative_eq!(gain.to_f64().unwrap(), reference(1000.0, 0.0, 5.0, 12), epsilon = 0.01);
        assert_eq!(gain, dec!(51.16));
    }

    #[test]
    fn test_with_pac() {
        let gain = expected_return(dec!(1000), dec!(100), dec!(5), 24).unwrap();
        assert_relative_eq!(
            gain.to_f64().unwrap(),
            reference(1000.0, 100.0, 5.0, 24),
            epsilon = 0.01
        );
        assert_eq!(gain.scale(), 2);
    }

    #[test]
    fn test_zero_rate_has_no_gain() {
        let gain = expected_return(dec!(1000), dec!(50), dec!(0), 36).unwrap();
        assert_eq!(gain.to_string(), "0.00");
    }

    #[test]
    fn test_rejects_out_of_range_inputs() {
        let huge = Decimal::MAX / dec!(2) + dec!(1);
        assert!(matches!(expected_return(huge, dec!(0), dec!(5), 12), Err(Error::Validation(_))));
        assert!(matches!(expected_return(dec!(1000), dec!(-1), dec!(5), 12), Err(Error::Validation(_))));
        assert!(matches!(expected_return(dec!(1000), dec!(0), dec!(5), u32::MAX), Err(Error::Validation(_))));
    }

    #[test]
    fn test_runaway_growth_is_an_error() {
        let result = expected_return(dec!(1000000), dec!(0), dec!(100000), MAX_DURATION_MONTHS);
        assert!(matches!(result, Err(Error::Overflow(_))));
    }

    #[test]
    fn test_maturity_date() {
        let start = Timestamp::parse("2024-01-31T09:00:00");
        let end = maturity_date(&start, 1).unwrap();
        assert_eq!((end.year(), end.month(), end.day()), (2024, 2, 29));

        let end = maturity_date(&start, 24).unwrap();
        assert_eq!((end.year(), end.month()), (2026, 1));

        assert!(maturity_date(&Timestamp::parse("??"), 12).is_none());
    }
}
