use std::collections::HashSet;

use log::debug;

use crate::errors::{Error, Result};

use super::Holding;

/// Authoritative, unfiltered holdings list for one page session.
///
/// Populated wholesale by [`load`](Self::load) after each fetch; individual
/// holdings are never patched in place, so every derived aggregate can be
/// recomputed from this list alone.
#[derive(Debug, Default)]
pub struct HoldingsStore {
    holdings: Vec<Holding>,
}

impl HoldingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire store with a freshly fetched list.
    ///
    /// Symbols must be unique within one load; a duplicate means the
    /// backend payload is unusable as a source of truth.
    pub fn load(&mut self, holdings: Vec<Holding>) -> Result<()> {
        let mut seen = HashSet::with_capacity(holdings.len());
        for holding in &holdings {
            if !seen.insert(holding.symbol.as_str()) {
                return Err(Error::ConstraintViolation(format!(
                    "duplicate symbol in holdings payload: {}",
                    holding.symbol
                )));
            }
        }

        debug!("holdings store loaded with {} positions", holdings.len());
        self.holdings = holdings;
        Ok(())
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}
