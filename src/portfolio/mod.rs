//! Portfolio-level roll-ups across a user's accounts and investments

mod aggregate;

pub use aggregate::{aggregate, investments_for_account, PortfolioSummary};
