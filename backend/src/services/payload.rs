use crate::api::ScatterChart;
use crate::data::LaunchTable;
use crate::models::{LaunchRecord, PayloadRange, SiteSelector};

pub const PAYLOAD_AXIS_LABEL: &str = "Payload Mass (kg)";
pub const OUTCOME_AXIS_LABEL: &str = "Launch Outcome";

/// Records launched from the selected site with payload inside `range`.
///
/// Table order is preserved and each match appears exactly once. An unknown
/// site or an inverted range yields an empty subset.
pub fn payload_outcome_subset(
    table: &LaunchTable,
    site: &SiteSelector,
    range: PayloadRange,
) -> Vec<LaunchRecord> {
    table
        .records()
        .iter()
        .filter(|r| site.matches(&r.launch_site) && range.contains(r.payload_mass_kg))
        .cloned()
        .collect()
}

/// Title shown above the scatter chart.
pub fn scatter_chart_title(site: &SiteSelector) -> String {
    match site {
        SiteSelector::All => "Payload vs. Success for All Sites".to_string(),
        SiteSelector::Site(name) => format!("Payload vs. Success for {}", name),
    }
}

/// Build the payload-vs-outcome scatter specification.
pub fn compute_payload_scatter_chart(
    table: &LaunchTable,
    site: &SiteSelector,
    range: PayloadRange,
) -> ScatterChart {
    let subset = payload_outcome_subset(table, site, range);

    let mut chart = ScatterChart {
        x: Vec::with_capacity(subset.len()),
        y: Vec::with_capacity(subset.len()),
        color: Vec::with_capacity(subset.len()),
        hover: Vec::with_capacity(subset.len()),
        title: scatter_chart_title(site),
        x_label: PAYLOAD_AXIS_LABEL.to_string(),
        y_label: OUTCOME_AXIS_LABEL.to_string(),
    };

    for record in subset {
        chart.x.push(record.payload_mass_kg);
        chart.y.push(record.class.value());
        chart.color.push(record.booster_version_category);
        chart.hover.push(record.booster_version);
    }

    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OutcomeClass;

    fn sample_table() -> LaunchTable {
        LaunchTable::from_records(vec![
            LaunchRecord::new("KSC LC-39A", 5000.0, OutcomeClass::Success, "F9"),
            LaunchRecord::new("KSC LC-39A", 3000.0, OutcomeClass::Failure, "F9"),
            LaunchRecord::new("CCAFS LC-40", 2000.0, OutcomeClass::Success, "F9"),
            LaunchRecord::new("CCAFS LC-40", 2000.0, OutcomeClass::Success, "F9B5"),
        ])
    }

    #[test]
    fn test_subset_all_sites_range() {
        let subset =
            payload_outcome_subset(&sample_table(), &SiteSelector::All, PayloadRange::new(0.0, 4000.0));
        assert_eq!(subset.len(), 3);
        assert!(subset.iter().all(|r| r.payload_mass_kg <= 4000.0));
    }

    #[test]
    fn test_subset_single_site() {
        let subset = payload_outcome_subset(
            &sample_table(),
            &SiteSelector::site("KSC LC-39A"),
            PayloadRange::new(0.0, 10000.0),
        );
        assert_eq!(subset.len(), 2);
        assert!(subset.iter().all(|r| r.launch_site == "KSC LC-39A"));
    }

    #[test]
    fn test_subset_bounds_inclusive() {
        let subset = payload_outcome_subset(
            &sample_table(),
            &SiteSelector::All,
            PayloadRange::new(2000.0, 3000.0),
        );
        assert_eq!(subset.len(), 3);
    }

    #[test]
    fn test_subset_empty_cases() {
        let table = sample_table();
        assert!(payload_outcome_subset(
            &table,
            &SiteSelector::site("VAFB SLC-4E"),
            PayloadRange::new(0.0, 10000.0)
        )
        .is_empty());
        assert!(payload_outcome_subset(&table, &SiteSelector::All, PayloadRange::new(6000.0, 9000.0))
            .is_empty());
        assert!(payload_outcome_subset(&table, &SiteSelector::All, PayloadRange::new(4000.0, 1000.0))
            .is_empty());
    }

    #[test]
    fn test_scatter_chart_fields() {
        let chart = compute_payload_scatter_chart(
            &sample_table(),
            &SiteSelector::site("CCAFS LC-40"),
            PayloadRange::new(0.0, 10000.0),
        );
        assert_eq!(chart.x, vec![2000.0, 2000.0]);
        assert_eq!(chart.y, vec![1, 1]);
        assert_eq!(chart.color, vec!["F9", "F9B5"]);
        assert_eq!(chart.title, "Payload vs. Success for CCAFS LC-40");
        assert_eq!(chart.x_label, PAYLOAD_AXIS_LABEL);
        assert_eq!(chart.y_label, OUTCOME_AXIS_LABEL);
    }

    #[test]
    fn test_scatter_chart_all_sites_title() {
        let chart = compute_payload_scatter_chart(
            &sample_table(),
            &SiteSelector::All,
            PayloadRange::new(0.0, 0.0),
        );
        assert!(chart.is_empty());
        assert_eq!(chart.title, "Payload vs. Success for All Sites");
    }
}
