//! Display configuration: labels, currency symbol and date formats
//!
//! Defaults reproduce the Italian dashboard. A JSON file may override any subset of
//! fields; missing fields keep their defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PresentationConfig {
    /// Appended to amounts (`12.00€`), prefixed on signed ledger rows (`+€12.00`)
    pub currency_symbol: String,

    /// Shown in place of a date that couldn't be parsed
    pub invalid_date_label: String,

    /// chrono format for chart axis dates
    pub chart_date_format: String,

    /// chrono format for ledger rows
    pub transaction_date_format: String,

    pub deposit_label: String,
    pub withdrawal_label: String,

    pub balance_dataset_label: String,
    pub gain_dataset_label: String,
    pub principal_dataset_label: String,
    pub contribution_dataset_label: String,

    pub accounts_label: String,
    pub invested_label: String,
    pub expected_gain_label: String,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "€".to_string(),
            invalid_date_label: "Data non valida".to_string(),
            chart_date_format: "%-d/%-m/%Y".to_string(),
            transaction_date_format: "%d/%m/%Y %H:%M".to_string(),
            deposit_label: "Deposito".to_string(),
            withdrawal_label: "Prelievo".to_string(),
            balance_dataset_label: "Saldo nel tempo (€)".to_string(),
            gain_dataset_label: "Rendimento cumulato (€)".to_string(),
            principal_dataset_label: "Capitale investito (€)".to_string(),
            contribution_dataset_label: "PAC cumulato su Capitale investito (€)".to_string(),
            accounts_label: "Conti".to_string(),
            invested_label: "Investito".to_string(),
            expected_gain_label: "Guadagno".to_string(),
        }
    }
}

impl PresentationConfig {
    /// Load overrides from a JSON file
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
