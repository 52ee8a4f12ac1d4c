//! Stable table sorting over the filtered holdings.

use std::cmp::Ordering;

use crate::holdings::{sector_label, Holding};

use super::{SortDirection, SortKey, SortState};

/// Sorts the table rows in place per the sort state.
///
/// Sorting never changes membership, so the caller can re-sort the rows of
/// the last pipeline pass without re-aggregating.
pub fn sort_holdings(holdings: &mut [Holding], sort: SortState) {
    let Some(key) = sort.key else {
        return;
    };

    holdings.sort_by(|a, b| {
        let ordering = compare_by(a, b, key);
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn compare_by(a: &Holding, b: &Holding, key: SortKey) -> Ordering {
    match key {
        SortKey::Symbol => a.symbol.cmp(&b.symbol),
        SortKey::Sector => sector_label(a).cmp(sector_label(b)),
        SortKey::Quantity => a.quantity.cmp(&b.quantity),
        SortKey::AvgBuyPrice => a.avg_buy_price.cmp(&b.avg_buy_price),
        SortKey::CurrentPrice => a.current_price.cmp(&b.current_price),
        SortKey::InvestedValue => a.invested_value.cmp(&b.invested_value),
        SortKey::CurrentValue => a.current_value.cmp(&b.current_value),
        SortKey::Pnl => a.pnl.cmp(&b.pnl),
    }
}
