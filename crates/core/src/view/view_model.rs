//! View-local state: table sort and per-chart toggles.

use serde::{Deserialize, Serialize};

use crate::aggregation::{ChartDimension, RingMetric};

/// Sortable columns of the holdings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Symbol,
    Sector,
    Quantity,
    AvgBuyPrice,
    CurrentPrice,
    InvestedValue,
    CurrentValue,
    Pnl,
}

impl SortKey {
    /// Direction chosen on the first click of this column: ascending for
    /// the textual keys, descending for the numeric ones.
    pub fn default_direction(&self) -> SortDirection {
        match self {
            SortKey::Symbol | SortKey::Sector => SortDirection::Ascending,
            _ => SortDirection::Descending,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Current table ordering. `key == None` leaves the backend order as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortState {
    /// Column-header click: a repeat click on the active key flips the
    /// direction, a new key starts at its default direction.
    pub fn click(&mut self, key: SortKey) {
        if self.key == Some(key) {
            self.direction = self.direction.flipped();
        } else {
            self.key = Some(key);
            self.direction = key.default_direction();
        }
    }
}

/// Per-chart toggles. Process-wide, untouched by filter changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartViewState {
    pub ring_metric: RingMetric,
    pub pnl_dimension: ChartDimension,
    pub value_compare_dimension: ChartDimension,
}

impl Default for ChartViewState {
    fn default() -> Self {
        Self {
            ring_metric: RingMetric::Current,
            pnl_dimension: ChartDimension::Sector,
            value_compare_dimension: ChartDimension::Sector,
        }
    }
}
