//! Property and scenario tests for the two aggregation functions.

use proptest::prelude::*;

use spacex_dash::api::{LaunchRecord, OutcomeClass, PayloadRange, SiteSelector};
use spacex_dash::data::LaunchTable;
use spacex_dash::services::{payload_outcome_subset, site_success_breakdown};

mod support;

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];
const CATEGORIES: [&str; 5] = ["v1.0", "v1.1", "FT", "B4", "B5"];

fn record_strategy() -> impl Strategy<Value = LaunchRecord> {
    (0..SITES.len(), 0.0..10000.0f64, any::<bool>(), 0..CATEGORIES.len()).prop_map(
        |(site, payload, success, category)| {
            let class = if success {
                OutcomeClass::Success
            } else {
                OutcomeClass::Failure
            };
            LaunchRecord::new(SITES[site], payload.round(), class, CATEGORIES[category])
        },
    )
}

fn table_strategy() -> impl Strategy<Value = LaunchTable> {
    prop::collection::vec(record_strategy(), 0..40).prop_map(LaunchTable::from_records)
}

fn range_strategy() -> impl Strategy<Value = PayloadRange> {
    (0.0..10000.0f64, 0.0..10000.0f64).prop_map(|(a, b)| PayloadRange::new(a.min(b), a.max(b)))
}

fn selector_strategy() -> impl Strategy<Value = SiteSelector> {
    prop_oneof![
        Just(SiteSelector::All),
        (0..SITES.len()).prop_map(|i| SiteSelector::site(SITES[i])),
    ]
}

fn percentage_sum(table: &LaunchTable, site: &SiteSelector) -> f64 {
    site_success_breakdown(table, site)
        .iter()
        .map(|e| e.percentage)
        .sum()
}

// ─────────────────────────────────────────────────────────────────────────────
// Scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn scenario_all_sites_breakdown() {
    let breakdown = site_success_breakdown(&support::scenario_table(), &SiteSelector::All);

    let rounded: Vec<(String, f64)> = breakdown
        .into_iter()
        .map(|e| (e.category, (e.percentage * 100.0).round() / 100.0))
        .collect();
    assert_eq!(
        rounded,
        vec![
            ("KSC LC-39A".to_string(), 33.33),
            ("CCAFS LC-40".to_string(), 66.67)
        ]
    );
}

#[test]
fn scenario_payload_subset_below_4000() {
    let subset = payload_outcome_subset(
        &support::scenario_table(),
        &SiteSelector::All,
        PayloadRange::new(0.0, 4000.0),
    );
    assert_eq!(subset.len(), 3);
    assert!(subset.iter().all(|r| r.payload_mass_kg <= 4000.0));
}

#[test]
fn scenario_site_without_launches() {
    let breakdown =
        site_success_breakdown(&support::scenario_table(), &SiteSelector::site("VAFB SLC-4E"));
    assert!(breakdown.is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Property-based tests
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_single_site_breakdown_sums_to_100(table in table_strategy(), site in 0..SITES.len()) {
        let selector = SiteSelector::site(SITES[site]);
        let launches = table.records().iter().filter(|r| r.launch_site == SITES[site]).count();
        let breakdown = site_success_breakdown(&table, &selector);

        if launches == 0 {
            prop_assert!(breakdown.is_empty());
        } else {
            prop_assert!((percentage_sum(&table, &selector) - 100.0).abs() < 1e-9);
            prop_assert!(breakdown.iter().all(|e| e.percentage > 0.0 && e.percentage <= 100.0));
        }
    }

    #[test]
    fn prop_all_sites_breakdown_sums_to_100(table in table_strategy()) {
        let successes = table.records().iter().filter(|r| r.class.is_success()).count();
        let breakdown = site_success_breakdown(&table, &SiteSelector::All);

        if successes == 0 {
            prop_assert!(breakdown.is_empty());
        } else {
            prop_assert!((percentage_sum(&table, &SiteSelector::All) - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_subset_is_exactly_the_matching_records(
        table in table_strategy(),
        selector in selector_strategy(),
        range in range_strategy(),
    ) {
        let subset = payload_outcome_subset(&table, &selector, range);

        for r in &subset {
            prop_assert!(range.low <= r.payload_mass_kg && r.payload_mass_kg <= range.high);
            prop_assert!(selector.matches(&r.launch_site));
        }

        let expected: Vec<&LaunchRecord> = table
            .records()
            .iter()
            .filter(|r| selector.matches(&r.launch_site) && range.contains(r.payload_mass_kg))
            .collect();
        prop_assert_eq!(subset.len(), expected.len());
        for (got, want) in subset.iter().zip(expected) {
            prop_assert_eq!(got, want);
        }
    }

    #[test]
    fn prop_widening_never_removes(
        table in table_strategy(),
        selector in selector_strategy(),
        range in range_strategy(),
        widen_low in 0.0..2000.0f64,
        widen_high in 0.0..2000.0f64,
    ) {
        let narrow = payload_outcome_subset(&table, &selector, range);
        let wide_range = PayloadRange::new(range.low - widen_low, range.high + widen_high);
        let wide = payload_outcome_subset(&table, &selector, wide_range);

        prop_assert!(wide.len() >= narrow.len());
        for r in &narrow {
            prop_assert!(wide.contains(r));
        }
    }

    #[test]
    fn prop_default_bounds_are_table_extremes(table in table_strategy()) {
        let bounds = table.payload_bounds();
        if table.is_empty() {
            prop_assert_eq!(bounds, PayloadRange::new(0.0, 0.0));
        } else {
            let min = table.records().iter().map(|r| r.payload_mass_kg).fold(f64::INFINITY, f64::min);
            let max = table.records().iter().map(|r| r.payload_mass_kg).fold(f64::NEG_INFINITY, f64::max);
            prop_assert_eq!(bounds, PayloadRange::new(min, max));
            let all = payload_outcome_subset(&table, &SiteSelector::All, bounds);
            prop_assert_eq!(all.len(), table.len());
        }
    }
}
