use log::{debug, error, warn};
use rust_decimal::Decimal;

use folioscope_api_client::models::RealisedPnlResponse;
use folioscope_api_client::{DeliveryFetcher, DeliveryHistoryService, DeliveryPeriod};

use crate::aggregation::{
    aggregate_by_sector, build_nested_rings, build_pnl_ranking, build_value_compare, is_dimmed,
    kpi_totals, ChartDimension, RingMetric, SectorAggregate,
};
use crate::constants::{CHART_PALETTE, DELIVERY_EXCHANGE};
use crate::errors::Result;
use crate::filter::FilterState;
use crate::holdings::{Holding, HoldingsStore};
use crate::view::{
    pnl_chart_dataset, ring_chart_dataset, sort_holdings, value_compare_dataset, ChartFactory,
    ChartRegistry, ChartViewState, DeliveryView, FilterIndicatorView, KpiSnapshot, KpiView,
    LegendEntry, LegendView, SortKey, SortState, TableView,
};

use super::PortfolioBackend;

/// Canvas target id of the nested allocation pie.
pub const NESTED_PIE_TARGET: &str = "nested-pie";
/// Canvas target id of the P&L ranking chart.
pub const PNL_CHART_TARGET: &str = "pnl-chart";
/// Canvas target id of the invested/current comparison chart.
pub const VALUE_COMPARE_TARGET: &str = "value-compare";

/// Message shown in the table when the holdings load fails fatally.
const RELOGIN_PROMPT: &str = "Could not load holdings. Please log in again.";

/// Everything the dashboard mutates, owned in one place so the aggregation
/// engine can stay pure and no render function reaches for ambient globals.
#[derive(Default)]
struct AppState {
    store: HoldingsStore,
    filter: FilterState,
    sort: SortState,
    chart_view: ChartViewState,
    realised_pnl: Option<RealisedPnlResponse>,
    margin_net: Option<Decimal>,
    /// Filtered rows of the last pipeline pass; table re-sorts and single
    /// chart-toggle redraws reuse it without re-aggregating.
    filtered: Vec<Holding>,
}

/// Rendering surfaces the controller pushes into.
pub struct ViewBinders {
    pub table: Box<dyn TableView>,
    pub kpis: Box<dyn KpiView>,
    pub legend: Box<dyn LegendView>,
    pub filter_indicator: Box<dyn FilterIndicatorView>,
}

/// Translates user gestures into filter-state mutations and runs one
/// synchronous re-aggregation and re-render pass per mutation.
///
/// A pass is atomic with respect to interaction: it completes before
/// control returns to the event loop, so no binder can observe a torn
/// intermediate state.
pub struct DashboardController {
    state: AppState,
    binders: ViewBinders,
    charts: ChartRegistry,
}

impl DashboardController {
    pub fn new(binders: ViewBinders, chart_factory: Box<dyn ChartFactory>) -> Self {
        Self {
            state: AppState::default(),
            binders,
            charts: ChartRegistry::new(chart_factory),
        }
    }

    /// Loads the authoritative holdings, then the optional KPI extras.
    ///
    /// A holdings failure is fatal for the view: the table shows an inline
    /// re-login prompt and nothing renders. The KPI extras are independent
    /// streams; each failure degrades only its own figure and is logged.
    pub async fn load_portfolio<B: PortfolioBackend>(&mut self, backend: &B) -> Result<()> {
        match backend.fetch_holdings().await {
            Ok(holdings) => self.state.store.load(holdings)?,
            Err(err) => {
                error!("holdings load failed: {err}");
                self.binders.table.render_error(RELOGIN_PROMPT);
                return Err(err.into());
            }
        }

        let (realised, margins) =
            futures::join!(backend.fetch_realised_pnl(), backend.fetch_margins());
        match realised {
            Ok(response) => self.state.realised_pnl = Some(response),
            Err(err) => warn!("realised P&L unavailable: {err}"),
        }
        match margins {
            Ok(response) => self.state.margin_net = Some(response.net),
            Err(err) => warn!("margins unavailable: {err}"),
        }

        self.run_pipeline();
        Ok(())
    }

    /// Replaces the holdings wholesale (manual reload) and re-renders.
    pub fn load_holdings(&mut self, holdings: Vec<Holding>) -> Result<()> {
        self.state.store.load(holdings)?;
        self.run_pipeline();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Gestures
    // ------------------------------------------------------------------

    /// Click on a sector pill, wedge, bar, or legend entry.
    pub fn click_sector_target(&mut self, name: &str) {
        self.state.filter.toggle_sector(name);
        self.run_pipeline();
    }

    /// Click on a stock row, bar, or inner-ring slice.
    pub fn click_stock_target(&mut self, symbol: &str) {
        self.state.filter.toggle_stock(symbol);
        self.run_pipeline();
    }

    /// Dropdown checklist: absolute replacement, not a relative toggle.
    pub fn select_sectors(&mut self, names: Vec<String>) {
        self.state.filter.set_sectors(names);
        self.run_pipeline();
    }

    /// Dropdown checklist for stocks.
    pub fn select_stocks(&mut self, symbols: Vec<String>) {
        self.state.filter.set_stocks(symbols);
        self.run_pipeline();
    }

    /// Clear-filters click: empties both dimensions.
    pub fn clear_all(&mut self) {
        self.state.filter.clear();
        self.run_pipeline();
    }

    /// Column-header click. Membership is unchanged, so only the table
    /// redraws; no re-aggregation happens.
    pub fn set_sort(&mut self, key: SortKey) {
        self.state.sort.click(key);
        self.render_table();
    }

    /// Nested-pie metric toggle; redraws only that chart.
    pub fn set_ring_metric(&mut self, metric: RingMetric) {
        self.state.chart_view.ring_metric = metric;
        self.render_nested_pie();
    }

    /// P&L chart dimension toggle; redraws only that chart.
    pub fn set_pnl_dimension(&mut self, dimension: ChartDimension) {
        self.state.chart_view.pnl_dimension = dimension;
        self.render_pnl_chart();
    }

    /// Value-comparison dimension toggle; redraws only that chart.
    pub fn set_value_compare_dimension(&mut self, dimension: ChartDimension) {
        self.state.chart_view.value_compare_dimension = dimension;
        self.render_value_compare();
    }

    // ------------------------------------------------------------------
    // Pipeline
    // ------------------------------------------------------------------

    /// One atomic pass: recompute the filtered set and every derived
    /// dataset, then redraw table, charts, KPIs, legend, and the
    /// clear-filter indicator, in that order.
    fn run_pipeline(&mut self) {
        self.state.filtered = self.state.filter.apply(self.state.store.holdings());
        debug!(
            "pipeline pass: {} of {} holdings pass the filter",
            self.state.filtered.len(),
            self.state.store.len()
        );

        let aggregates = aggregate_by_sector(&self.state.filtered);

        self.render_table();
        self.render_nested_pie();
        self.render_pnl_chart();
        self.render_value_compare();
        self.render_kpis();
        self.render_legend(&aggregates);
        self.binders
            .filter_indicator
            .render(self.state.filter.is_active());
    }

    fn render_table(&mut self) {
        let mut rows = self.state.filtered.clone();
        sort_holdings(&mut rows, self.state.sort);
        self.binders.table.render(&rows);
    }

    fn render_nested_pie(&mut self) {
        match build_nested_rings(&self.state.filtered, self.state.chart_view.ring_metric) {
            Some(rings) => {
                let dataset = ring_chart_dataset(&rings, &self.state.filter);
                self.charts.render(NESTED_PIE_TARGET, &dataset);
            }
            None => self.charts.dispose(NESTED_PIE_TARGET),
        }
    }

    fn render_pnl_chart(&mut self) {
        let ranking = build_pnl_ranking(
            &self.state.filtered,
            &self.state.filter,
            self.state.chart_view.pnl_dimension,
        );
        if ranking.rows.is_empty() {
            self.charts.dispose(PNL_CHART_TARGET);
        } else {
            self.charts
                .render(PNL_CHART_TARGET, &pnl_chart_dataset(&ranking));
        }
    }

    fn render_value_compare(&mut self) {
        let rows = build_value_compare(
            &self.state.filtered,
            &self.state.filter,
            self.state.chart_view.value_compare_dimension,
        );
        if rows.rows.is_empty() {
            self.charts.dispose(VALUE_COMPARE_TARGET);
        } else {
            self.charts
                .render(VALUE_COMPARE_TARGET, &value_compare_dataset(&rows));
        }
    }

    fn render_kpis(&mut self) {
        let snapshot = KpiSnapshot {
            totals: kpi_totals(&self.state.filtered),
            realised_pnl_ytd: self
                .state
                .realised_pnl
                .as_ref()
                .map(|r| r.ytd.realised_pnl),
            realised_pnl_previous_fy: self
                .state
                .realised_pnl
                .as_ref()
                .map(|r| r.previous_fy.realised_pnl),
            previous_fy_label: self
                .state
                .realised_pnl
                .as_ref()
                .and_then(|r| r.previous_fy.label.clone()),
            margin_net: self.state.margin_net,
        };
        self.binders.kpis.render(&snapshot);
    }

    /// Legend entries mirror the outer ring: same descending-metric order,
    /// same palette assignment.
    fn render_legend(&mut self, aggregates: &[SectorAggregate]) {
        let metric = self.state.chart_view.ring_metric;
        let mut ordered: Vec<&SectorAggregate> = aggregates.iter().collect();
        ordered.sort_by(|a, b| b.total_for(metric).cmp(&a.total_for(metric)));

        let entries: Vec<LegendEntry> = ordered
            .iter()
            .enumerate()
            .map(|(rank, aggregate)| LegendEntry {
                sector: aggregate.sector.clone(),
                color: CHART_PALETTE[rank % CHART_PALETTE.len()].to_string(),
                percentage: aggregate.percentage_for(metric),
                dimmed: is_dimmed(&aggregate.sector, ChartDimension::Sector, &self.state.filter),
            })
            .collect();

        self.binders.legend.render(&entries);
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn filter(&self) -> &FilterState {
        &self.state.filter
    }

    pub fn sort(&self) -> SortState {
        self.state.sort
    }

    pub fn chart_view(&self) -> ChartViewState {
        self.state.chart_view
    }

    /// Rows of the last pipeline pass, in backend order.
    pub fn filtered_holdings(&self) -> &[Holding] {
        &self.state.filtered
    }
}

/// True when the exchange serves delivery statistics for this symbol.
pub fn delivery_available(holding: &Holding) -> bool {
    holding.exchange == DELIVERY_EXCHANGE
}

/// Loads and renders delivery history for an expanded symbol.
///
/// A response that lost a race against a newer request for the same symbol
/// is dropped without touching the widget; failures and empty periods fall
/// back to the neutral "not available" state.
pub async fn show_delivery<F: DeliveryFetcher>(
    delivery: &DeliveryHistoryService<F>,
    view: &mut dyn DeliveryView,
    symbol: &str,
    period: DeliveryPeriod,
) {
    let token = delivery.begin_request(symbol);
    match delivery.load(symbol, period, token).await {
        Ok(Some(points)) if !points.is_empty() => view.render(symbol, &points),
        Ok(Some(_)) => view.render_unavailable(symbol),
        Ok(None) => debug!("stale delivery response for {symbol} dropped"),
        Err(err) => {
            warn!("delivery history unavailable for {symbol}: {err}");
            view.render_unavailable(symbol);
        }
    }
}
