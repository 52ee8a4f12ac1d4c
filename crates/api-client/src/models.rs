//! Wire models for the backend JSON surface.
//!
//! Field names match the backend payloads verbatim (snake_case). Numeric
//! fields are trusted as-is; the dashboard only applies aggregation
//! arithmetic on top of them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One portfolio position as served by `/portfolio/holdings`.
///
/// Immutable after fetch: the dashboard replaces its holdings list
/// wholesale on reload, never patches individual positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Trading symbol, unique within one holdings load.
    pub symbol: String,
    /// Exchange tag; gates delivery sub-detail availability.
    pub exchange: String,
    /// Sector classification; `None` or empty falls into the "Unknown"
    /// bucket at aggregation time.
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    pub quantity: u64,
    pub avg_buy_price: Decimal,
    pub current_price: Decimal,
    pub invested_value: Decimal,
    pub current_value: Decimal,
    /// `current_value - invested_value`, computed upstream.
    pub pnl: Decimal,
    /// Snapshot metadata attached by the backend.
    #[serde(default)]
    pub last_snapshot_at: Option<String>,
    #[serde(default)]
    pub snapshot_count: Option<u32>,
}

/// Envelope of `/portfolio/holdings`.
#[derive(Debug, Clone, Deserialize)]
pub struct HoldingsResponse {
    pub count: usize,
    pub data: Vec<Holding>,
}

/// One entry of the legacy `/portfolio/sector-allocation` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SectorAllocationEntry {
    pub sector: String,
    pub value: Decimal,
    pub percentage: Decimal,
}

/// Legacy server-side allocation variant. The dashboard computes its own
/// roll-ups client-side; this endpoint is kept for older views.
#[derive(Debug, Clone, Deserialize)]
pub struct SectorAllocationResponse {
    #[serde(default)]
    pub by_current_value: Vec<SectorAllocationEntry>,
    #[serde(default)]
    pub by_invested_value: Vec<SectorAllocationEntry>,
}

/// One trading day of delivery-volume history for a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryPoint {
    /// Backend date string in `DD-Mon-YYYY` form (e.g. `01-Dec-2025`).
    pub date: String,
    pub total_traded_qty: u64,
    pub delivered_qty: u64,
    pub not_delivered_qty: u64,
    pub delivery_pct: Decimal,
    /// Close at or above the previous close; drives bar coloring.
    pub price_up: bool,
}

/// Envelope of `/portfolio/delivery-data`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryResponse {
    pub data: Vec<DeliveryPoint>,
}

/// Realised P&L for one financial-year bucket.
#[derive(Debug, Clone, Deserialize)]
pub struct FyRealisedPnl {
    pub realised_pnl: Decimal,
    /// Display label for the bucket (e.g. `FY 2024-25`), present for the
    /// previous financial year.
    #[serde(default)]
    pub label: Option<String>,
}

/// Response of `/portfolio/realised-pnl`.
#[derive(Debug, Clone, Deserialize)]
pub struct RealisedPnlResponse {
    pub ytd: FyRealisedPnl,
    pub previous_fy: FyRealisedPnl,
}

/// Response of `/portfolio/margins`.
#[derive(Debug, Clone, Deserialize)]
pub struct MarginsResponse {
    pub net: Decimal,
}
