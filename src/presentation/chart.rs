//! Chart datasets for the line and doughnut charts
//!
//! Shapes follow what the charting surface consumes: one label per x position and one
//! dataset per curve. Empty inputs give empty label and data vectors, never an error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::format::format_chart_date;
use super::PresentationConfig;
use crate::portfolio::PortfolioSummary;
use crate::projection::YearSeries;
use crate::timeline::BalancePoint;

/// A colour or one colour per slice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Paint {
    Single(String),
    PerPoint(Vec<String>),
}

/// Rendering hints carried alongside the data
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStyle {
    pub fill: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_offset: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<Decimal>,
    #[serde(flatten)]
    pub style: DatasetStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    /// Suffix for y-axis ticks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_tick_suffix: Option<String>,
}

impl ChartData {
    /// Number of x positions
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Balance-over-time line chart
pub fn balance_chart(points: &[BalancePoint], cfg: &PresentationConfig) -> ChartData {
    ChartData {
        labels: points.iter().map(|p| format_chart_date(&p.label, cfg)).collect(),
        datasets: vec![Dataset {
            label: Some(cfg.balance_dataset_label.clone()),
            data: points.iter().map(|p| p.balance).collect(),
            style: DatasetStyle {
                fill: false,
                border_color: Some("#6366F1".to_string()),
                background_color: Some(Paint::Single("#6366F1".to_string())),
                tension: Some(0.3),
                ..Default::default()
            },
        }],
        y_tick_suffix: Some(cfg.currency_symbol.clone()),
    }
}

/// Growth projection line chart: gain, flat principal and principal-plus-PAC curves
pub fn projection_chart(series: &YearSeries, cfg: &PresentationConfig) -> ChartData {
    let labels = series.points.iter().map(|p| p.year.to_string()).collect();

    let gain = Dataset {
        label: Some(cfg.gain_dataset_label.clone()),
        data: series.gains(),
        style: DatasetStyle {
            fill: true,
            border_color: Some("#4ade80".to_string()),
            background_color: Some(Paint::Single("rgba(74, 222, 128, 0.3)".to_string())),
            tension: Some(0.3),
            ..Default::default()
        },
    };
    let principal = Dataset {
        label: Some(cfg.principal_dataset_label.clone()),
        data: series.principals(),
        style: DatasetStyle {
            fill: false,
            border_color: Some("#3b82f6".to_string()),
            background_color: Some(Paint::Single("rgba(59, 130, 246, 0.2)".to_string())),
            border_dash: Some(vec![5, 5]),
            tension: Some(0.1),
            ..Default::default()
        },
    };
    let contribution = Dataset {
        label: Some(cfg.contribution_dataset_label.clone()),
        data: series.contributions(),
        style: DatasetStyle {
            fill: false,
            border_color: Some("#f59e0b".to_string()),
            background_color: Some(Paint::Single("rgba(245, 158, 11, 0.2)".to_string())),
            border_dash: Some(vec![3, 3]),
            tension: Some(0.1),
            ..Default::default()
        },
    };

    ChartData {
        labels,
        datasets: vec![gain, principal, contribution],
        y_tick_suffix: None,
    }
}

/// Doughnut of balance, invested capital and expected gain
pub fn portfolio_chart(summary: &PortfolioSummary, cfg: &PresentationConfig) -> ChartData {
    ChartData {
        labels: vec![
            cfg.accounts_label.clone(),
            cfg.invested_label.clone(),
            cfg.expected_gain_label.clone(),
        ],
        datasets: vec![Dataset {
            label: None,
            data: vec![
                summary.total_balance,
                summary.total_invested,
                summary.total_expected_return,
            ],
            style: DatasetStyle {
                fill: false,
                background_color: Some(Paint::PerPoint(vec![
                    "#6366F1".to_string(),
                    "#3b82f6".to_string(),
                    "#4ade80".to_string(),
                ])),
                border_width: Some(6),
                hover_offset: Some(8),
                ..Default::default()
            },
        }],
        y_tick_suffix: None,
    }
}
