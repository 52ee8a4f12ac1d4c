//! Contracts between the pipeline and the rendering layer.

use rust_decimal::Decimal;

use folioscope_api_client::models::DeliveryPoint;

use crate::aggregation::KpiSummary;
use crate::holdings::Holding;

/// KPI figures including the optional fire-and-forget extras.
///
/// The extras stay `None` when their endpoint failed or has not answered
/// yet; the view keeps the placeholder for those.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiSnapshot {
    pub totals: KpiSummary,
    pub realised_pnl_ytd: Option<Decimal>,
    pub realised_pnl_previous_fy: Option<Decimal>,
    pub previous_fy_label: Option<String>,
    pub margin_net: Option<Decimal>,
}

/// One sector entry of the allocation legend.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub sector: String,
    /// Matches the sector's ring color.
    pub color: String,
    pub percentage: Decimal,
    pub dimmed: bool,
}

/// Holdings table renderer.
pub trait TableView {
    fn render(&mut self, rows: &[Holding]);

    /// Fatal holdings failures surface here as an inline re-login prompt.
    fn render_error(&mut self, message: &str);
}

/// Headline KPI renderer.
pub trait KpiView {
    fn render(&mut self, kpis: &KpiSnapshot);
}

/// Sector legend renderer.
pub trait LegendView {
    fn render(&mut self, entries: &[LegendEntry]);
}

/// Clear-filters affordance, visible only while a filter is active.
pub trait FilterIndicatorView {
    fn render(&mut self, filter_active: bool);
}

/// Delivery-volume widget for one expanded symbol.
pub trait DeliveryView {
    fn render(&mut self, symbol: &str, points: &[DeliveryPoint]);

    /// Neutral "data not available" state for empty or failed loads.
    fn render_unavailable(&mut self, symbol: &str);
}
