//! Pure aggregation functions over the filtered holding set.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::constants::CHART_PALETTE;
use crate::filter::FilterState;
use crate::holdings::{sector_label, Holding};

use super::rounding::{percentage_of, round_currency};
use super::{
    ChartDimension, KpiSummary, NestedRings, PnlRow, RankedDataset, RingMetric, RingSlice,
    SectorAggregate, ValueCompareRow,
};

/// Groups the filtered holdings by sector and computes totals and shares.
///
/// Sectors come back in first-appearance order of the filtered list; visual
/// consumers impose their own value-descending sort on top. Percentages are
/// taken against the grand totals of the *filtered* set, so they always sum
/// to 100 within one metric (up to rounding).
pub fn aggregate_by_sector(filtered: &[Holding]) -> Vec<SectorAggregate> {
    let mut order: Vec<&str> = Vec::new();
    let mut sums: HashMap<&str, (Decimal, Decimal, Decimal)> = HashMap::new();

    for holding in filtered {
        let sector = sector_label(holding);
        let entry = sums.entry(sector).or_insert_with(|| {
            order.push(sector);
            (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
        });
        entry.0 += holding.invested_value;
        entry.1 += holding.current_value;
        entry.2 += holding.pnl;
    }

    let invested_grand: Decimal = filtered.iter().map(|h| h.invested_value).sum();
    let current_grand: Decimal = filtered.iter().map(|h| h.current_value).sum();

    order
        .into_iter()
        .map(|sector| {
            let (invested, current, pnl) = sums[sector];
            SectorAggregate {
                sector: sector.to_string(),
                invested_total: round_currency(invested),
                current_total: round_currency(current),
                pnl_total: round_currency(pnl),
                current_percentage: percentage_of(current, current_grand),
                invested_percentage: percentage_of(invested, invested_grand),
            }
        })
        .collect()
}

/// Grand totals across the filtered set. Zero KPIs for an empty set.
pub fn kpi_totals(filtered: &[Holding]) -> KpiSummary {
    let invested: Decimal = filtered.iter().map(|h| h.invested_value).sum();
    let current: Decimal = filtered.iter().map(|h| h.current_value).sum();
    let pnl: Decimal = filtered.iter().map(|h| h.pnl).sum();

    KpiSummary {
        invested_total: round_currency(invested),
        current_total: round_currency(current),
        pnl_total: round_currency(pnl),
    }
}

fn metric_value(holding: &Holding, metric: RingMetric) -> Decimal {
    match metric {
        RingMetric::Current => holding.current_value,
        RingMetric::Invested => holding.invested_value,
    }
}

/// Builds the two-ring allocation dataset for the chosen metric.
///
/// Returns `None` when the filtered set is empty: the renderer must then
/// dispose of any previously drawn visual rather than draw an empty one.
pub fn build_nested_rings(filtered: &[Holding], metric: RingMetric) -> Option<NestedRings> {
    if filtered.is_empty() {
        return None;
    }

    let mut aggregates = aggregate_by_sector(filtered);
    aggregates.sort_by(|a, b| b.total_for(metric).cmp(&a.total_for(metric)));

    let mut sectors = Vec::with_capacity(aggregates.len());
    let mut outer = Vec::with_capacity(aggregates.len());
    let mut inner = Vec::new();

    for (rank, aggregate) in aggregates.iter().enumerate() {
        let color = CHART_PALETTE[rank % CHART_PALETTE.len()].to_string();
        sectors.push(aggregate.sector.clone());
        outer.push(RingSlice {
            label: aggregate.sector.clone(),
            value: aggregate.total_for(metric),
            color: color.clone(),
        });

        let mut members: Vec<&Holding> = filtered
            .iter()
            .filter(|h| sector_label(h) == aggregate.sector)
            .collect();
        members.sort_by(|a, b| metric_value(b, metric).cmp(&metric_value(a, metric)));

        for member in members {
            inner.push(RingSlice {
                label: member.symbol.clone(),
                value: round_currency(metric_value(member, metric)),
                color: color.clone(),
            });
        }
    }

    Some(NestedRings {
        sectors,
        outer,
        inner,
    })
}

/// A row renders faded iff a filter is active on its own dimension and the
/// row is not among the selected members. Cross-dimension selections only
/// change which holdings are aggregated; they never dim a rendered row.
pub fn is_dimmed(label: &str, dimension: ChartDimension, filter: &FilterState) -> bool {
    match dimension {
        ChartDimension::Sector => {
            !filter.selected_sectors().is_empty() && !filter.selected_sectors().contains(label)
        }
        ChartDimension::Stock => {
            !filter.selected_stocks().is_empty() && !filter.selected_stocks().contains(label)
        }
    }
}

/// Ranking rows for the P&L chart, P&L descending with stable ties.
///
/// Selecting exactly one sector overrides the sector dimension with a
/// stock-level drill-down of that sector; this is the auto-narrowing that
/// every sector gesture in the UI relies on.
pub fn build_pnl_ranking(
    filtered: &[Holding],
    filter: &FilterState,
    dimension: ChartDimension,
) -> RankedDataset<PnlRow> {
    if dimension == ChartDimension::Sector {
        if let Some(sector) = filter.single_selected_sector() {
            let mut rows: Vec<PnlRow> = filtered
                .iter()
                .filter(|h| sector_label(h) == sector)
                .map(|h| PnlRow {
                    label: h.symbol.clone(),
                    pnl: round_currency(h.pnl),
                    dimmed: is_dimmed(&h.symbol, ChartDimension::Stock, filter),
                })
                .collect();
            rows.sort_by(|a, b| b.pnl.cmp(&a.pnl));
            return RankedDataset {
                is_drilldown: true,
                rows,
            };
        }
    }

    let mut rows: Vec<PnlRow> = match dimension {
        ChartDimension::Stock => filtered
            .iter()
            .map(|h| PnlRow {
                label: h.symbol.clone(),
                pnl: round_currency(h.pnl),
                dimmed: is_dimmed(&h.symbol, ChartDimension::Stock, filter),
            })
            .collect(),
        ChartDimension::Sector => aggregate_by_sector(filtered)
            .into_iter()
            .map(|aggregate| PnlRow {
                dimmed: is_dimmed(&aggregate.sector, ChartDimension::Sector, filter),
                pnl: aggregate.pnl_total,
                label: aggregate.sector,
            })
            .collect(),
    };
    rows.sort_by(|a, b| b.pnl.cmp(&a.pnl));

    RankedDataset {
        is_drilldown: false,
        rows,
    }
}

/// Rows for the invested/current comparison chart, current value
/// descending with stable ties. Branches exactly like the P&L ranking,
/// including the single-sector drill-down.
pub fn build_value_compare(
    filtered: &[Holding],
    filter: &FilterState,
    dimension: ChartDimension,
) -> RankedDataset<ValueCompareRow> {
    if dimension == ChartDimension::Sector {
        if let Some(sector) = filter.single_selected_sector() {
            let mut rows: Vec<ValueCompareRow> = filtered
                .iter()
                .filter(|h| sector_label(h) == sector)
                .map(|h| ValueCompareRow {
                    label: h.symbol.clone(),
                    invested: round_currency(h.invested_value),
                    current: round_currency(h.current_value),
                    dimmed: is_dimmed(&h.symbol, ChartDimension::Stock, filter),
                })
                .collect();
            rows.sort_by(|a, b| b.current.cmp(&a.current));
            return RankedDataset {
                is_drilldown: true,
                rows,
            };
        }
    }

    let mut rows: Vec<ValueCompareRow> = match dimension {
        ChartDimension::Stock => filtered
            .iter()
            .map(|h| ValueCompareRow {
                label: h.symbol.clone(),
                invested: round_currency(h.invested_value),
                current: round_currency(h.current_value),
                dimmed: is_dimmed(&h.symbol, ChartDimension::Stock, filter),
            })
            .collect(),
        ChartDimension::Sector => aggregate_by_sector(filtered)
            .into_iter()
            .map(|aggregate| ValueCompareRow {
                dimmed: is_dimmed(&aggregate.sector, ChartDimension::Sector, filter),
                invested: aggregate.invested_total,
                current: aggregate.current_total,
                label: aggregate.sector,
            })
            .collect(),
    };
    rows.sort_by(|a, b| b.current.cmp(&a.current));

    RankedDataset {
        is_drilldown: false,
        rows,
    }
}
