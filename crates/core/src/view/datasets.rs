//! Translation of engine outputs into renderable chart datasets.

use crate::aggregation::{
    is_dimmed, ChartDimension, NestedRings, PnlRow, RankedDataset, ValueCompareRow,
};
use crate::constants::{CURRENT_SERIES_COLOR, GAIN_COLOR, INVESTED_SERIES_COLOR, LOSS_COLOR};
use crate::filter::FilterState;

use super::{ChartDataset, ChartSeries};

/// Two series: sectors on the outer ring, member stocks on the inner one.
/// Outer slices dim against the sector selection, inner slices against the
/// stock selection.
pub fn ring_chart_dataset(rings: &NestedRings, filter: &FilterState) -> ChartDataset {
    let outer = ChartSeries {
        name: "sectors".to_string(),
        labels: rings.outer.iter().map(|s| s.label.clone()).collect(),
        values: rings.outer.iter().map(|s| s.value).collect(),
        colors: rings.outer.iter().map(|s| s.color.clone()).collect(),
        dimmed: rings
            .outer
            .iter()
            .map(|s| is_dimmed(&s.label, ChartDimension::Sector, filter))
            .collect(),
    };
    let inner = ChartSeries {
        name: "stocks".to_string(),
        labels: rings.inner.iter().map(|s| s.label.clone()).collect(),
        values: rings.inner.iter().map(|s| s.value).collect(),
        colors: rings.inner.iter().map(|s| s.color.clone()).collect(),
        dimmed: rings
            .inner
            .iter()
            .map(|s| is_dimmed(&s.label, ChartDimension::Stock, filter))
            .collect(),
    };

    ChartDataset {
        series: vec![outer, inner],
    }
}

/// Single series colored by P&L sign.
pub fn pnl_chart_dataset(ranking: &RankedDataset<PnlRow>) -> ChartDataset {
    let series = ChartSeries {
        name: "pnl".to_string(),
        labels: ranking.rows.iter().map(|r| r.label.clone()).collect(),
        values: ranking.rows.iter().map(|r| r.pnl).collect(),
        colors: ranking
            .rows
            .iter()
            .map(|r| {
                if r.pnl.is_sign_negative() && !r.pnl.is_zero() {
                    LOSS_COLOR.to_string()
                } else {
                    GAIN_COLOR.to_string()
                }
            })
            .collect(),
        dimmed: ranking.rows.iter().map(|r| r.dimmed).collect(),
    };

    ChartDataset {
        series: vec![series],
    }
}

/// Paired invested/current series sharing one label axis.
pub fn value_compare_dataset(rows: &RankedDataset<ValueCompareRow>) -> ChartDataset {
    let labels: Vec<String> = rows.rows.iter().map(|r| r.label.clone()).collect();
    let dimmed: Vec<bool> = rows.rows.iter().map(|r| r.dimmed).collect();

    let invested = ChartSeries {
        name: "invested".to_string(),
        labels: labels.clone(),
        values: rows.rows.iter().map(|r| r.invested).collect(),
        colors: vec![INVESTED_SERIES_COLOR.to_string(); labels.len()],
        dimmed: dimmed.clone(),
    };
    let current = ChartSeries {
        name: "current".to_string(),
        labels,
        values: rows.rows.iter().map(|r| r.current).collect(),
        colors: vec![CURRENT_SERIES_COLOR.to_string(); rows.rows.len()],
        dimmed,
    };

    ChartDataset {
        series: vec![invested, current],
    }
}
