//! SimInvest engine - derived series and roll-ups for an investment-simulation dashboard
//!
//! This library provides:
//! - Running-balance curves over account ledgers
//! - Year-by-year growth projections for simulated investments
//! - Portfolio roll-ups split by confirmation state
//! - Chart datasets and formatted figures for the rendering surface
//! - A file-backed snapshot source with all-or-nothing parallel reads

pub mod errors;
pub mod money;
pub mod model;
pub mod timeline;
pub mod projection;
pub mod portfolio;
pub mod presentation;
pub mod source;
pub mod view;

// Re-export commonly used types
pub use errors::{Error, Result};
pub use model::{Account, Investment, Timestamp, Transaction, TransactionType};
pub use timeline::{running_balance, BalancePoint};
pub use projection::{project, InvestmentTerms, YearSeries};
pub use portfolio::{aggregate, PortfolioSummary};
pub use presentation::{ChartData, PresentationConfig};
pub use view::{derive_account, derive_dashboard, derive_investment};
