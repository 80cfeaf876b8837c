//! Growth projections and expected-return simulation for investments

mod terms;
mod engine;
mod series;
mod cache;
pub mod simulation;

pub use terms::InvestmentTerms;
pub use engine::project;
pub use series::{ProjectionSummary, YearPoint, YearSeries};
pub use cache::{CacheStats, ProjectionCache};
pub use simulation::{expected_return, maturity_date};
