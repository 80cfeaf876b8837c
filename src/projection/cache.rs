//! Memoized projections
//!
//! Entries are keyed by the exact [`InvestmentTerms`], so a hit returns precisely what a
//! fresh projection would. There is no expiry: identical inputs always yield identical
//! series.

use std::collections::HashMap;

use log::trace;

use super::engine::project;
use super::series::YearSeries;
use super::terms::InvestmentTerms;

#[derive(Debug, Clone, Default)]
pub struct ProjectionCache {
    entries: HashMap<InvestmentTerms, YearSeries>,
    hits: u64,
    misses: u64,
}

/// Hit/miss counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

impl ProjectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached projection for these terms, projecting on a miss
    pub fn get_or_project(&mut self, terms: &InvestmentTerms) -> &YearSeries {
        if self.entries.contains_key(terms) {
            self.hits += 1;
            trace!("Projection cache hit");
        } else {
            self.misses += 1;
            self.entries.insert(terms.clone(), project(terms));
        }
        &self.entries[terms]
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}
