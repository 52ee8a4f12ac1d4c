use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::holdings::{sector_label, Holding};

/// The user's cross-filter selection: sector names and stock symbols.
///
/// The two dimensions combine with an inclusive OR: picking a sector and an
/// unrelated stock broadens the view to both, it never narrows to their
/// intersection. An AND here would be a behavioral regression.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    sectors: HashSet<String>,
    stocks: HashSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff any selection is in effect. `false` means every holding
    /// passes [`apply`](Self::apply) untouched.
    pub fn is_active(&self) -> bool {
        !self.sectors.is_empty() || !self.stocks.is_empty()
    }

    /// Inclusive-OR predicate across the two dimensions.
    pub fn matches(&self, holding: &Holding) -> bool {
        if !self.is_active() {
            return true;
        }
        self.sectors.contains(sector_label(holding)) || self.stocks.contains(&holding.symbol)
    }

    /// Filters the authoritative list. Identity when no filter is active.
    pub fn apply(&self, holdings: &[Holding]) -> Vec<Holding> {
        holdings
            .iter()
            .filter(|h| self.matches(h))
            .cloned()
            .collect()
    }

    /// Membership toggle, fired from pill/wedge/bar/legend clicks.
    pub fn toggle_sector(&mut self, name: &str) {
        if !self.sectors.remove(name) {
            self.sectors.insert(name.to_string());
        }
    }

    /// Membership toggle, fired from table-row and bar clicks.
    pub fn toggle_stock(&mut self, symbol: &str) {
        if !self.stocks.remove(symbol) {
            self.stocks.insert(symbol.to_string());
        }
    }

    /// Wholesale replacement of the sector selection (dropdown checklist
    /// semantics, distinct from click toggling).
    pub fn set_sectors<I>(&mut self, names: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.sectors = names.into_iter().collect();
    }

    /// Wholesale replacement of the stock selection.
    pub fn set_stocks<I>(&mut self, symbols: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.stocks = symbols.into_iter().collect();
    }

    /// Empties both dimensions, restoring the identity filter.
    pub fn clear(&mut self) {
        self.sectors.clear();
        self.stocks.clear();
    }

    pub fn selected_sectors(&self) -> &HashSet<String> {
        &self.sectors
    }

    pub fn selected_stocks(&self) -> &HashSet<String> {
        &self.stocks
    }

    /// The drill-down trigger: the selected sector when exactly one is
    /// selected, regardless of any stock selection.
    pub fn single_selected_sector(&self) -> Option<&str> {
        if self.sectors.len() == 1 {
            self.sectors.iter().next().map(String::as_str)
        } else {
            None
        }
    }
}
