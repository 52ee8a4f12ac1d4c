//! Unit and property tests for the aggregation engine.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::filter::FilterState;
use crate::holdings::Holding;

fn holding(symbol: &str, sector: Option<&str>, invested: Decimal, current: Decimal) -> Holding {
    Holding {
        symbol: symbol.to_string(),
        exchange: "NSE".to_string(),
        sector: sector.map(str::to_string),
        industry: None,
        quantity: 1,
        avg_buy_price: invested,
        current_price: current,
        invested_value: invested,
        current_value: current,
        pnl: current - invested,
        last_snapshot_at: None,
        snapshot_count: None,
    }
}

/// The reference portfolio: two Tech names that cancel out, one Bank loser.
fn scenario() -> Vec<Holding> {
    vec![
        holding("AAA", Some("Tech"), dec!(100), dec!(150)),
        holding("BBB", Some("Tech"), dec!(200), dec!(150)),
        holding("CCC", Some("Bank"), dec!(300), dec!(250)),
    ]
}

// ============================================================================
// KPI totals
// ============================================================================

#[test]
fn unfiltered_kpis_sum_the_whole_portfolio() {
    let kpis = kpi_totals(&scenario());
    assert_eq!(kpis.invested_total, dec!(600));
    assert_eq!(kpis.current_total, dec!(550));
    assert_eq!(kpis.pnl_total, dec!(-50));
}

#[test]
fn filtered_kpis_cover_only_the_passing_holdings() {
    let mut filter = FilterState::new();
    filter.toggle_sector("Tech");
    let filtered = filter.apply(&scenario());

    let kpis = kpi_totals(&filtered);
    assert_eq!(kpis.invested_total, dec!(300));
    assert_eq!(kpis.current_total, dec!(300));
    assert_eq!(kpis.pnl_total, dec!(0));
}

#[test]
fn empty_set_yields_zero_kpis() {
    assert_eq!(kpi_totals(&[]), KpiSummary::zero());
}

// ============================================================================
// Sector roll-up
// ============================================================================

#[test]
fn sector_rollup_sums_and_shares() {
    let aggregates = aggregate_by_sector(&scenario());
    assert_eq!(aggregates.len(), 2);

    // First-appearance order: Tech, then Bank.
    let tech = &aggregates[0];
    assert_eq!(tech.sector, "Tech");
    assert_eq!(tech.invested_total, dec!(300));
    assert_eq!(tech.current_total, dec!(300));
    assert_eq!(tech.pnl_total, dec!(0));
    assert_eq!(tech.current_percentage, dec!(54.55)); // 300/550
    assert_eq!(tech.invested_percentage, dec!(50.00));

    let bank = &aggregates[1];
    assert_eq!(bank.sector, "Bank");
    assert_eq!(bank.current_percentage, dec!(45.45));
}

#[test]
fn unclassified_holdings_roll_into_the_unknown_bucket() {
    let holdings = vec![
        holding("AAA", None, dec!(100), dec!(100)),
        holding("BBB", Some(""), dec!(100), dec!(100)),
        holding("CCC", Some("Tech"), dec!(200), dec!(200)),
    ];
    let aggregates = aggregate_by_sector(&holdings);
    assert_eq!(aggregates[0].sector, "Unknown");
    assert_eq!(aggregates[0].invested_total, dec!(200));
}

#[test]
fn percentages_round_half_away_from_zero() {
    // 1/3 and 2/3 of 300: 33.333... -> 33.33, 66.666... -> 66.67.
    let holdings = vec![
        holding("AAA", Some("X"), dec!(100), dec!(100)),
        holding("BBB", Some("Y"), dec!(200), dec!(200)),
    ];
    let aggregates = aggregate_by_sector(&holdings);
    assert_eq!(aggregates[0].current_percentage, dec!(33.33));
    assert_eq!(aggregates[1].current_percentage, dec!(66.67));
}

#[test]
fn currency_rounding_is_half_away_from_zero_on_the_cent() {
    assert_eq!(round_currency(dec!(10.005)), dec!(10.01));
    assert_eq!(round_currency(dec!(-10.005)), dec!(-10.01));
    assert_eq!(round_currency(dec!(10.004)), dec!(10.00));
}

#[test]
fn zero_total_coerces_the_denominator() {
    assert_eq!(percentage_of(Decimal::ZERO, Decimal::ZERO), Decimal::ZERO);
}

// ============================================================================
// Nested rings
// ============================================================================

#[test]
fn rings_are_none_for_an_empty_set() {
    assert_eq!(build_nested_rings(&[], RingMetric::Current), None);
}

#[test]
fn outer_ring_orders_sectors_by_descending_metric() {
    let rings = build_nested_rings(&scenario(), RingMetric::Current).unwrap();
    assert_eq!(rings.sectors, vec!["Tech", "Bank"]);
    assert_eq!(rings.outer[0].value, dec!(300));
    assert_eq!(rings.outer[1].value, dec!(250));

    // Equal invested totals (300 each) keep first-appearance order.
    let rings = build_nested_rings(&scenario(), RingMetric::Invested).unwrap();
    assert_eq!(rings.sectors, vec!["Tech", "Bank"]);
}

#[test]
fn inner_ring_groups_stocks_under_their_sector() {
    let rings = build_nested_rings(&scenario(), RingMetric::Current).unwrap();
    let labels: Vec<&str> = rings.inner.iter().map(|s| s.label.as_str()).collect();
    // Tech stocks first (equal values keep original order), then Bank.
    assert_eq!(labels, vec!["AAA", "BBB", "CCC"]);

    // Inner slices inherit the sector's color.
    assert_eq!(rings.inner[0].color, rings.outer[0].color);
    assert_eq!(rings.inner[2].color, rings.outer[1].color);
    assert_ne!(rings.outer[0].color, rings.outer[1].color);
}

#[test]
fn inner_ring_sorts_members_by_descending_value() {
    let holdings = vec![
        holding("SMALL", Some("Tech"), dec!(50), dec!(50)),
        holding("BIG", Some("Tech"), dec!(500), dec!(500)),
    ];
    let rings = build_nested_rings(&holdings, RingMetric::Current).unwrap();
    let labels: Vec<&str> = rings.inner.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["BIG", "SMALL"]);
}

// ============================================================================
// P&L ranking
// ============================================================================

#[test]
fn sector_dimension_ranks_sector_aggregates() {
    let ranking = build_pnl_ranking(&scenario(), &FilterState::new(), ChartDimension::Sector);
    assert!(!ranking.is_drilldown);
    let labels: Vec<&str> = ranking.rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["Tech", "Bank"]); // 0 > -50
}

#[test]
fn stock_dimension_ranks_individual_holdings() {
    let ranking = build_pnl_ranking(&scenario(), &FilterState::new(), ChartDimension::Stock);
    assert!(!ranking.is_drilldown);
    let labels: Vec<&str> = ranking.rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["AAA", "BBB", "CCC"]); // 50 first, then the -50 tie in original order
}

#[test]
fn single_selected_sector_triggers_the_drilldown() {
    let mut filter = FilterState::new();
    filter.toggle_sector("Tech");
    let filtered = filter.apply(&scenario());

    let ranking = build_pnl_ranking(&filtered, &filter, ChartDimension::Sector);
    assert!(ranking.is_drilldown);
    let rows: Vec<(&str, Decimal)> = ranking
        .rows
        .iter()
        .map(|r| (r.label.as_str(), r.pnl))
        .collect();
    assert_eq!(rows, vec![("AAA", dec!(50)), ("BBB", dec!(-50))]);
}

#[test]
fn drilldown_excludes_stock_matches_from_other_sectors() {
    // OR-filtering pulls CCC in, but the drill-down is scoped to Tech.
    let mut filter = FilterState::new();
    filter.toggle_sector("Tech");
    filter.toggle_stock("CCC");
    let filtered = filter.apply(&scenario());
    assert_eq!(filtered.len(), 3);

    let ranking = build_pnl_ranking(&filtered, &filter, ChartDimension::Sector);
    assert!(ranking.is_drilldown);
    let labels: Vec<&str> = ranking.rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["AAA", "BBB"]);
}

#[test]
fn two_selected_sectors_do_not_drill_down() {
    let mut filter = FilterState::new();
    filter.toggle_sector("Tech");
    filter.toggle_sector("Bank");
    let filtered = filter.apply(&scenario());

    let ranking = build_pnl_ranking(&filtered, &filter, ChartDimension::Sector);
    assert!(!ranking.is_drilldown);
}

#[test]
fn equal_pnl_rows_keep_their_original_relative_order() {
    let holdings = vec![
        holding("FIRST", Some("X"), dec!(100), dec!(110)),
        holding("SECOND", Some("Y"), dec!(200), dec!(210)),
        holding("THIRD", Some("Z"), dec!(300), dec!(310)),
    ];
    let ranking = build_pnl_ranking(&holdings, &FilterState::new(), ChartDimension::Stock);
    let labels: Vec<&str> = ranking.rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["FIRST", "SECOND", "THIRD"]);
}

// ============================================================================
// Value comparison
// ============================================================================

#[test]
fn value_compare_ranks_by_current_value_descending() {
    let rows = build_value_compare(&scenario(), &FilterState::new(), ChartDimension::Stock);
    assert!(!rows.is_drilldown);
    let labels: Vec<&str> = rows.rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["CCC", "AAA", "BBB"]); // 250 > 150 == 150 stable
    assert_eq!(rows.rows[0].invested, dec!(300));
    assert_eq!(rows.rows[0].current, dec!(250));
}

#[test]
fn value_compare_drills_down_like_the_pnl_chart() {
    let mut filter = FilterState::new();
    filter.toggle_sector("Bank");
    let filtered = filter.apply(&scenario());

    let rows = build_value_compare(&filtered, &filter, ChartDimension::Sector);
    assert!(rows.is_drilldown);
    assert_eq!(rows.rows.len(), 1);
    assert_eq!(rows.rows[0].label, "CCC");
}

// ============================================================================
// Dimming
// ============================================================================

#[test]
fn rows_dim_only_against_their_own_dimension() {
    let mut filter = FilterState::new();
    filter.toggle_sector("Tech");

    assert!(!is_dimmed("Tech", ChartDimension::Sector, &filter));
    assert!(is_dimmed("Bank", ChartDimension::Sector, &filter));
    // No stock selection: stock rows never dim.
    assert!(!is_dimmed("AAA", ChartDimension::Stock, &filter));

    let mut filter = FilterState::new();
    filter.toggle_stock("AAA");
    // Stock selection does not dim sector rows.
    assert!(!is_dimmed("Tech", ChartDimension::Sector, &filter));
    assert!(is_dimmed("BBB", ChartDimension::Stock, &filter));
}

#[test]
fn sector_rows_outside_the_selection_render_dimmed() {
    // Two sectors selected plus a stock from a third: the third sector's
    // row appears (OR-semantics) but renders faded.
    let holdings = vec![
        holding("AAA", Some("Tech"), dec!(100), dec!(100)),
        holding("BBB", Some("Bank"), dec!(100), dec!(100)),
        holding("CCC", Some("Pharma"), dec!(100), dec!(100)),
    ];
    let mut filter = FilterState::new();
    filter.toggle_sector("Tech");
    filter.toggle_sector("Bank");
    filter.toggle_stock("CCC");
    let filtered = filter.apply(&holdings);

    let ranking = build_pnl_ranking(&filtered, &filter, ChartDimension::Sector);
    let pharma = ranking.rows.iter().find(|r| r.label == "Pharma").unwrap();
    assert!(pharma.dimmed);
    let tech = ranking.rows.iter().find(|r| r.label == "Tech").unwrap();
    assert!(!tech.dimmed);
}

// ============================================================================
// Property tests
// ============================================================================

fn arb_holdings() -> impl Strategy<Value = Vec<Holding>> {
    prop::collection::vec((1i64..1_000_000, 1i64..1_000_000, prop::option::of(0usize..4)), 1..20)
        .prop_map(|entries| {
            let sectors = ["Tech", "Bank", "Pharma", "Auto"];
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (invested_cents, current_cents, sector))| {
                    holding(
                        &format!("SYM{i}"),
                        sector.map(|s| sectors[s]),
                        Decimal::new(invested_cents, 2),
                        Decimal::new(current_cents, 2),
                    )
                })
                .collect()
        })
}

proptest! {
    #[test]
    fn ring_percentages_sum_to_one_hundred(holdings in arb_holdings()) {
        let aggregates = aggregate_by_sector(&holdings);
        let epsilon = dec!(0.05);

        let current_sum: Decimal = aggregates.iter().map(|a| a.current_percentage).sum();
        prop_assert!((current_sum - dec!(100)).abs() <= epsilon, "current sum {current_sum}");

        let invested_sum: Decimal = aggregates.iter().map(|a| a.invested_percentage).sum();
        prop_assert!((invested_sum - dec!(100)).abs() <= epsilon, "invested sum {invested_sum}");
    }

    #[test]
    fn rollup_totals_match_the_kpi_totals(holdings in arb_holdings()) {
        let aggregates = aggregate_by_sector(&holdings);
        let kpis = kpi_totals(&holdings);

        let invested: Decimal = aggregates.iter().map(|a| a.invested_total).sum();
        let current: Decimal = aggregates.iter().map(|a| a.current_total).sum();

        // Totals are rounded per sector, so allow a cent of drift per group.
        let epsilon = Decimal::new(aggregates.len() as i64, 2);
        prop_assert!((invested - kpis.invested_total).abs() <= epsilon);
        prop_assert!((current - kpis.current_total).abs() <= epsilon);
    }
}
