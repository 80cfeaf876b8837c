//! Property-based tests for the derivation functions.
//!
//! These check invariants that must hold for any snapshot: curve length and terminus,
//! projection shape, roll-up totals, determinism and two-decimal precision.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

use siminvest_engine::portfolio::aggregate;
use siminvest_engine::presentation::{balance_chart, projection_chart, PresentationConfig};
use siminvest_engine::source::{AccountSnapshot, InvestmentSnapshot};
use siminvest_engine::view::{derive_account, derive_investment};
use siminvest_engine::projection::{project, InvestmentTerms};
use siminvest_engine::timeline::{chronological, running_balance};
use siminvest_engine::{Account, Investment, Transaction, TransactionType};

/// Independent cent rounding, half away from zero
fn cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

// =============================================================================
// Generators
// =============================================================================

/// Currency amounts with up to four decimals, so rounding is exercised
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000).prop_map(|units| Decimal::new(units, 4))
}

fn arb_timestamp() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => (0i64..2_000, 0u32..86_400).prop_map(|(days, secs)| {
            let base = NaiveDate::from_ymd_opt(2020, 1, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .unwrap();
            (base + Duration::days(days) + Duration::seconds(i64::from(secs)))
                .format("%Y-%m-%dT%H:%M:%S")
                .to_string()
        }),
        1 => "[a-z]{0,8}",
    ]
}

fn arb_transaction() -> impl Strategy<Value = Transaction> {
    (any::<bool>(), arb_amount(), arb_timestamp()).prop_map(|(deposit, amount, ts)| {
        let kind = if deposit { TransactionType::Deposit } else { TransactionType::Withdrawal };
        Transaction::new(0, kind, amount, ts)
    })
}

fn arb_transactions(max: usize) -> impl Strategy<Value = Vec<Transaction>> {
    proptest::collection::vec(arb_transaction(), 0..=max).prop_map(|mut txs| {
        for (i, tx) in txs.iter_mut().enumerate() {
            tx.id = i as u64;
        }
        txs
    })
}

fn arb_terms() -> impl Strategy<Value = InvestmentTerms> {
    (
        arb_amount(),
        0i64..2_000,
        1u32..=480,
        proptest::option::of(arb_amount()),
        (-1_000_000i64..100_000_000).prop_map(|v| Decimal::new(v, 3)),
    )
        .prop_map(|(principal, rate, months, contribution, expected)| {
            InvestmentTerms::new(principal, Decimal::new(rate, 2), months, contribution, expected)
        })
}

fn arb_investments(max: usize) -> impl Strategy<Value = Vec<Investment>> {
    proptest::collection::vec((arb_amount(), arb_amount(), any::<bool>()), 0..=max).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (amount, expected, confirmed))| {
                Investment::new(i as u64, "ETF", amount, Decimal::new(5, 0), 12)
                    .with_expected_return(expected)
                    .confirmed(confirmed)
            })
            .collect()
    })
}

fn arb_accounts(max: usize) -> impl Strategy<Value = Vec<Account>> {
    proptest::collection::vec(arb_amount(), 0..=max).prop_map(|balances| {
        balances
            .into_iter()
            .enumerate()
            .map(|(i, b)| Account::new(i as u64, "Conto", b))
            .collect()
    })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// One point per transaction; the last point equals deposits minus withdrawals.
    #[test]
    fn prop_running_balance_length_and_terminus(txs in arb_transactions(60)) {
        let curve = running_balance(&txs);
        prop_assert_eq!(curve.len(), txs.len());

        let deposits: Decimal = txs.iter().filter(|t| t.kind.is_deposit()).map(|t| t.amount).sum();
        let withdrawals: Decimal = txs.iter().filter(|t| !t.kind.is_deposit()).map(|t| t.amount).sum();
        let expected = cents(deposits - withdrawals);

        match curve.last() {
            Some(last) => prop_assert_eq!(last.balance, expected),
            None => prop_assert!(txs.is_empty()),
        }
    }

    /// Datable entries come out in non-decreasing time order; undated ones keep their slot.
    #[test]
    fn prop_chronological_order(txs in arb_transactions(60)) {
        let ordered = chronological(&txs);
        prop_assert_eq!(ordered.len(), txs.len());

        let dated: Vec<_> = ordered.iter().filter_map(|t| t.timestamp.as_datetime()).collect();
        prop_assert!(dated.windows(2).all(|w| w[0] <= w[1]));

        for (i, tx) in txs.iter().enumerate() {
            if !tx.timestamp.is_valid() {
                prop_assert_eq!(ordered[i].id, tx.id);
            }
        }
    }

    /// Projections have years + 1 points (or one), a flat principal, and per-point values
    /// that depend only on the year index.
    #[test]
    fn prop_projection_shape(terms in arb_terms()) {
        let series = project(&terms);
        let years = terms.duration_months / 12;
        prop_assert_eq!(series.years, years);
        prop_assert_eq!(series.len(), if years == 0 { 1 } else { years as usize + 1 });

        let principal = cents(terms.principal);
        prop_assert!(series.principals().iter().all(|p| *p == principal));
        prop_assert!(series.points[0].gain.is_zero());
        prop_assert_eq!(series.points[0].contribution, principal);

        if years > 0 {
            let annual = terms.expected_return / Decimal::from(years);
            let monthly = terms.monthly_contribution.unwrap_or(Decimal::ZERO);
            for p in &series.points {
                let i = Decimal::from(p.year);
                prop_assert_eq!(p.gain, cents(annual * i));
                prop_assert_eq!(p.contribution, cents(terms.principal + monthly * Decimal::from(12) * i));
            }
        }
    }

    /// Totals cover every investment and the partition keeps input order.
    #[test]
    fn prop_aggregate_totals_and_partition(
        accounts in arb_accounts(20),
        investments in arb_investments(30),
    ) {
        let summary = aggregate(&accounts, &investments);

        let balance: Decimal = accounts.iter().map(|a| a.balance).sum();
        let invested: Decimal = investments.iter().map(|i| i.amount).sum();
        prop_assert_eq!(summary.total_balance, cents(balance));
        prop_assert_eq!(summary.total_invested, cents(invested));

        prop_assert_eq!(
            summary.confirmed_investments.len() + summary.pending_investments.len(),
            investments.len()
        );
        prop_assert!(summary.confirmed_investments.iter().all(|i| i.confirmed));
        prop_assert!(summary.pending_investments.iter().all(|i| !i.confirmed));
        prop_assert!(summary.confirmed_investments.windows(2).all(|w| w[0].id < w[1].id));
        prop_assert!(summary.pending_investments.windows(2).all(|w| w[0].id < w[1].id));
    }

    /// Every emitted currency value has exactly two decimals.
    #[test]
    fn prop_two_decimal_precision(
        txs in arb_transactions(30),
        terms in arb_terms(),
        accounts in arb_accounts(10),
        investments in arb_investments(10),
    ) {
        prop_assert!(running_balance(&txs).iter().all(|p| p.balance.scale() == 2));

        for p in &project(&terms).points {
            prop_assert_eq!(p.gain.scale(), 2);
            prop_assert_eq!(p.principal.scale(), 2);
            prop_assert_eq!(p.contribution.scale(), 2);
        }

        let summary = aggregate(&accounts, &investments);
        prop_assert_eq!(summary.total_balance.scale(), 2);
        prop_assert_eq!(summary.total_invested.scale(), 2);
        prop_assert_eq!(summary.total_expected_return.scale(), 2);
        for inv in summary.confirmed_investments.iter().chain(&summary.pending_investments) {
            prop_assert_eq!(inv.amount.scale(), 2);
            prop_assert_eq!(inv.expected_return.scale(), 2);
        }

        // Records echoed inside the page views
        let cfg = PresentationConfig::default();
        if let Some(account) = accounts.first() {
            let view = derive_account(
                &AccountSnapshot { account: account.clone(), transactions: txs.clone(), investments: vec![] },
                &cfg,
            );
            prop_assert_eq!(view.account.balance.scale(), 2);
        }
        if let Some(inv) = investments.first() {
            let view = derive_investment(
                &InvestmentSnapshot { investment: inv.clone(), transactions: vec![] },
                &cfg,
            );
            prop_assert_eq!(view.investment.amount.scale(), 2);
            prop_assert_eq!(view.investment.expected_return.scale(), 2);
        }
    }

    /// Identical inputs give identical outputs, down to the serialized bytes.
    #[test]
    fn prop_derivations_are_deterministic(txs in arb_transactions(30), terms in arb_terms()) {
        let cfg = PresentationConfig::default();

        let a = serde_json::to_string(&balance_chart(&running_balance(&txs), &cfg)).unwrap();
        let b = serde_json::to_string(&balance_chart(&running_balance(&txs), &cfg)).unwrap();
        prop_assert_eq!(a, b);

        let a = serde_json::to_string(&projection_chart(&project(&terms), &cfg)).unwrap();
        let b = serde_json::to_string(&projection_chart(&project(&terms), &cfg)).unwrap();
        prop_assert_eq!(a, b);
    }
}
