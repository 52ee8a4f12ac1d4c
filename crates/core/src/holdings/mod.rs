//! Holdings store: the authoritative, unfiltered position list.

mod holdings_store;

pub use holdings_store::*;

/// Wire model used directly as the domain model: the dashboard trusts the
/// backend's numeric fields verbatim and only aggregates on top of them.
pub use folioscope_api_client::models::Holding;

use crate::constants::UNKNOWN_SECTOR;

/// Sector label used for grouping and cross-filtering.
///
/// Missing or empty classifications fall into the shared "Unknown" bucket,
/// which participates in filtering like any other sector.
pub fn sector_label(holding: &Holding) -> &str {
    match holding.sector.as_deref() {
        Some(sector) if !sector.is_empty() => sector,
        _ => UNKNOWN_SECTOR,
    }
}
