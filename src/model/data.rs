//! Account, ledger and investment records as read from the dashboard API

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Timestamp;
use crate::errors::{Error, Result};
use crate::money::{round_currency, within_bounds, MAX_CURRENCY_MAGNITUDE};

/// Longest accepted investment duration (100 years)
pub const MAX_DURATION_MONTHS: u32 = 1200;

fn check_currency(entity: &str, id: u64, field: &str, value: Decimal, allow_negative: bool) -> Result<()> {
    if !allow_negative && value.is_sign_negative() && !value.is_zero() {
        return Err(Error::validation(format!("{} {} has negative {} {}", entity, id, field, value)));
    }
    if !within_bounds(value) {
        return Err(Error::validation(format!(
            "{} {} has {} {} beyond the limit of {}",
            entity, id, field, value, MAX_CURRENCY_MAGNITUDE
        )));
    }
    Ok(())
}

/// A cash account. `balance` is maintained by the ledger and is never recomputed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: u64,
    pub name: String,
    pub balance: Decimal,
}

impl Account {
    pub fn new(id: u64, name: impl Into<String>, balance: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            balance,
        }
    }

    /// Overdrawn balances are allowed; only the magnitude is bounded.
    pub fn validate(&self) -> Result<()> {
        check_currency("account", self.id, "balance", self.balance, true)
    }

    /// Copy with the balance at currency scale
    pub fn normalized(&self) -> Self {
        Self {
            balance: round_currency(self.balance),
            ..self.clone()
        }
    }
}

/// Minimal account reference embedded in single-investment reads
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountRef {
    pub id: u64,
    pub name: String,
}

/// Direction of a ledger movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
}

impl TransactionType {
    /// Apply this movement's sign to a non-negative amount
    pub fn signed(&self, amount: Decimal) -> Decimal {
        match self {
            TransactionType::Deposit => amount,
            TransactionType::Withdrawal => -amount,
        }
    }

    pub fn is_deposit(&self) -> bool {
        matches!(self, TransactionType::Deposit)
    }
}

/// A single ledger movement on an account or an investment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: u64,

    /// Owning account; investment ledger rows don't carry one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<u64>,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    pub amount: Decimal,

    pub timestamp: Timestamp,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    pub fn new(id: u64, kind: TransactionType, amount: Decimal, timestamp: impl Into<String>) -> Self {
        Self {
            id,
            account_id: None,
            kind,
            amount,
            timestamp: Timestamp::parse(timestamp),
            description: None,
        }
    }

    pub fn deposit(id: u64, amount: Decimal, timestamp: impl Into<String>) -> Self {
        Self::new(id, TransactionType::Deposit, amount, timestamp)
    }

    pub fn withdrawal(id: u64, amount: Decimal, timestamp: impl Into<String>) -> Self {
        Self::new(id, TransactionType::Withdrawal, amount, timestamp)
    }

    pub fn for_account(mut self, account_id: u64) -> Self {
        self.account_id = Some(account_id);
        self
    }

    /// Signed contribution of this movement to a running balance
    pub fn signed_amount(&self) -> Decimal {
        self.kind.signed(self.amount)
    }

    pub fn validate(&self) -> Result<()> {
        check_currency("transaction", self.id, "amount", self.amount, false)
    }

    /// Copy with the amount at currency scale
    pub fn normalized(&self) -> Self {
        Self {
            amount: round_currency(self.amount),
            ..self.clone()
        }
    }
}

/// A simulated (pending) or confirmed investment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<u64>,

    /// Embedded by the single-investment read
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<AccountRef>,

    pub asset: String,

    /// Principal
    pub amount: Decimal,

    /// Annual rate in percent (5 means 5%/year)
    pub interest_rate: Decimal,

    pub duration_months: u32,

    /// Monthly PAC contribution
    #[serde(default)]
    pub monthly_contribution: Option<Decimal>,

    pub simulated_at: Timestamp,

    #[serde(default)]
    pub confirmed: bool,

    /// Total expected gain over the whole duration, computed upstream
    pub expected_return: Decimal,
}

impl Investment {
    pub fn new(
        id: u64,
        asset: impl Into<String>,
        amount: Decimal,
        interest_rate: Decimal,
        duration_months: u32,
    ) -> Self {
        Self {
            id,
            account_id: None,
            account: None,
            asset: asset.into(),
            amount,
            interest_rate,
            duration_months,
            monthly_contribution: None,
            simulated_at: Timestamp::parse(""),
            confirmed: false,
            expected_return: Decimal::ZERO,
        }
    }

    pub fn with_contribution(mut self, monthly: Decimal) -> Self {
        self.monthly_contribution = Some(monthly);
        self
    }

    pub fn with_expected_return(mut self, expected_return: Decimal) -> Self {
        self.expected_return = expected_return;
        self
    }

    pub fn with_account(mut self, account_id: u64) -> Self {
        self.account_id = Some(account_id);
        self
    }

    pub fn simulated_at(mut self, timestamp: impl Into<String>) -> Self {
        self.simulated_at = Timestamp::parse(timestamp);
        self
    }

    pub fn confirmed(mut self, confirmed: bool) -> Self {
        self.confirmed = confirmed;
        self
    }

    /// Owning account, from either the flat id or the embedded reference
    pub fn owner_account_id(&self) -> Option<u64> {
        self.account_id.or_else(|| self.account.as_ref().map(|a| a.id))
    }

    /// Monthly contribution, absent treated as zero
    pub fn contribution_or_zero(&self) -> Decimal {
        self.monthly_contribution.unwrap_or(Decimal::ZERO)
    }

    pub fn validate(&self) -> Result<()> {
        check_currency("investment", self.id, "principal", self.amount, false)?;
        if self.duration_months < 1 || self.duration_months > MAX_DURATION_MONTHS {
            return Err(Error::validation(format!(
                "investment {} must last between 1 and {} months, got {}",
                self.id, MAX_DURATION_MONTHS, self.duration_months
            )));
        }
        if let Some(c) = self.monthly_contribution {
            check_currency("investment", self.id, "monthly contribution", c, false)?;
        }
        check_currency("investment", self.id, "expected return", self.expected_return, true)
    }

    /// Copy with principal, contribution and expected return at currency scale
    pub fn normalized(&self) -> Self {
        Self {
            amount: round_currency(self.amount),
            monthly_contribution: self.monthly_contribution.map(round_currency),
            expected_return: round_currency(self.expected_return),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_api_investment() {
        let json = r#"{
            "id": 7,
            "asset": "ETF World",
            "amount": 1000.0,
            "interestRate": 5,
            "durationMonths": 24,
            "expectedReturn": 104.94,
            "simulatedAt": "2024-01-15T09:30:00",
            "confirmed": true,
            "monthlyContribution": null,
            "account": { "id": 3, "name": "Conto principale" }
        }"#;

        let inv: Investment = serde_json::from_str(json).unwrap();
        assert_eq!(inv.amount, dec!(1000));
        assert_eq!(inv.expected_return, dec!(104.94));
        assert_eq!(inv.monthly_contribution, None);
        assert_eq!(inv.owner_account_id(), Some(3));
        assert!(inv.simulated_at.is_valid());
        assert!(inv.validate().is_ok());
    }

    #[test]
    fn test_deserialize_transaction_type() {
        let json = r#"{"id": 1, "type": "WITHDRAWAL", "amount": "12.50", "timestamp": "bogus"}"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.kind, TransactionType::Withdrawal);
        assert_eq!(tx.signed_amount(), dec!(-12.50));
        assert!(!tx.timestamp.is_valid());
    }

    #[test]
    fn test_validation_rejects_bad_terms() {
        let inv = Investment::new(1, "BTP", dec!(100), dec!(3), 0);
        assert!(matches!(inv.validate(), Err(Error::Validation(_))));

        let inv = Investment::new(1, "BTP", dec!(100), dec!(3), 12).with_contribution(dec!(-1));
        assert!(inv.validate().is_err());

        let tx = Transaction::deposit(1, dec!(-5), "2024-01-01");
        assert!(tx.validate().is_err());
    }

    #[test]
    fn test_validation_bounds_magnitude_and_duration() {
        let tx = Transaction::deposit(1, Decimal::MAX / dec!(2) + dec!(1), "2024-01-01");
        assert!(matches!(tx.validate(), Err(Error::Validation(_))));

        assert!(Account::new(1, "Conto", dec!(-250)).validate().is_ok());
        assert!(Account::new(1, "Conto", Decimal::from_i128_with_scale(10i128.pow(27), 0)).validate().is_err());

        let inv = Investment::new(1, "BTP", dec!(100), dec!(3), MAX_DURATION_MONTHS);
        assert!(inv.validate().is_ok());
        let inv = Investment::new(1, "BTP", dec!(100), dec!(3), u32::MAX);
        assert!(inv.validate().is_err());

        let inv = Investment::new(1, "BTP", dec!(100), dec!(3), 12).with_expected_return(Decimal::MIN);
        assert!(inv.validate().is_err());
    }

    #[test]
    fn test_normalized_pads_currency_fields() {
        let inv: Investment = serde_json::from_str(
            r#"{"id": 1, "asset": "ETF", "amount": 1000.00, "interestRate": 5,
                "durationMonths": 12, "expectedReturn": 51.1, "monthlyContribution": 25}"#,
        )
        .unwrap();
        let inv = inv.normalized();
        assert_eq!(inv.amount.to_string(), "1000.00");
        assert_eq!(inv.expected_return.to_string(), "51.10");
        assert_eq!(inv.monthly_contribution.map(|c| c.to_string()), Some("25.00".to_string()));
        assert_eq!(inv.interest_rate, dec!(5));

        let account = Account::new(1, "Conto", dec!(12.345)).normalized();
        assert_eq!(account.balance.to_string(), "12.35");

        let tx = Transaction::withdrawal(1, dec!(3), "2024-01-01").normalized();
        assert_eq!(tx.amount.to_string(), "3.00");
    }
}
