//! Chart and text shapes for the dashboard's rendering surface

mod config;
mod chart;
pub mod format;

pub use config::PresentationConfig;
pub use chart::{balance_chart, portfolio_chart, projection_chart, ChartData, Dataset, DatasetStyle, Paint};
pub use format::{format_currency, format_gain, format_signed, transaction_row, TransactionRow};
