//! Derived datasets produced by the aggregation engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Summed figures for one sector of the currently filtered holding set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorAggregate {
    pub sector: String,
    pub invested_total: Decimal,
    pub current_total: Decimal,
    pub pnl_total: Decimal,
    /// Share of the filtered grand total of current value (0-100).
    pub current_percentage: Decimal,
    /// Share of the filtered grand total of invested value (0-100).
    pub invested_percentage: Decimal,
}

impl SectorAggregate {
    /// Total for the given ring metric.
    pub fn total_for(&self, metric: RingMetric) -> Decimal {
        match metric {
            RingMetric::Current => self.current_total,
            RingMetric::Invested => self.invested_total,
        }
    }

    /// Percentage share for the given ring metric.
    pub fn percentage_for(&self, metric: RingMetric) -> Decimal {
        match metric {
            RingMetric::Current => self.current_percentage,
            RingMetric::Invested => self.invested_percentage,
        }
    }
}

/// Headline figures rendered independently of the detail table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub invested_total: Decimal,
    pub current_total: Decimal,
    pub pnl_total: Decimal,
}

impl KpiSummary {
    pub fn zero() -> Self {
        Self {
            invested_total: Decimal::ZERO,
            current_total: Decimal::ZERO,
            pnl_total: Decimal::ZERO,
        }
    }
}

/// Which metric the nested allocation rings visualize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RingMetric {
    Current,
    Invested,
}

/// Dimension of the ranking charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartDimension {
    Sector,
    Stock,
}

/// One slice of an allocation ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingSlice {
    pub label: String,
    pub value: Decimal,
    /// Hex color; inner slices inherit their sector's color.
    pub color: String,
}

/// Two-ring allocation dataset: sectors outside, member stocks inside.
///
/// Built only for a non-empty filtered set; the renderer disposes its
/// previous drawing when there is nothing to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestedRings {
    /// Sector order shared by both rings, descending by ring-metric total.
    pub sectors: Vec<String>,
    pub outer: Vec<RingSlice>,
    /// Per-stock slices grouped under their sector in outer-ring order,
    /// descending by value within each sector.
    pub inner: Vec<RingSlice>,
}

/// A ranked dataset with the drill-down marker.
///
/// `is_drilldown` is true when a single selected sector overrode the
/// sector dimension with a stock-level view of that sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedDataset<R> {
    pub is_drilldown: bool,
    pub rows: Vec<R>,
}

/// One bar of the P&L ranking chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PnlRow {
    pub label: String,
    pub pnl: Decimal,
    /// Faded by an active same-dimension filter that excludes this row.
    pub dimmed: bool,
}

/// One bar pair of the invested/current comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueCompareRow {
    pub label: String,
    pub invested: Decimal,
    pub current: Decimal,
    pub dimmed: bool,
}
