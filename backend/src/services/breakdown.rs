use crate::api::{BreakdownEntry, PieChart};
use crate::data::LaunchTable;
use crate::models::SiteSelector;

/// Count occurrences of each key, keeping keys in order of first appearance.
fn count_in_order<I, K>(keys: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    for key in keys {
        let key = key.as_ref();
        match counts.iter_mut().find(|(k, _)| k == key) {
            Some((_, n)) => *n += 1,
            None => counts.push((key.to_string(), 1)),
        }
    }
    counts
}

/// Turn raw counts into percentages of their sum.
fn to_percentages(counts: Vec<(String, usize)>) -> Vec<BreakdownEntry> {
    let total: usize = counts.iter().map(|(_, n)| n).sum();
    if total == 0 {
        return Vec::new();
    }

    counts
        .into_iter()
        .map(|(category, n)| BreakdownEntry::new(category, n as f64 / total as f64 * 100.0))
        .collect()
}

/// Percentage breakdown of launches for the selected scope.
///
/// Under [`SiteSelector::All`] this is the share of all successful launches
/// contributed by each site, in order of first appearance. For a single site
/// it is the split of that site's launches by outcome class, ordered by count
/// (largest first). Only classes that actually occur are reported, so a site
/// with no failures yields a single 100% slice.
///
/// An empty filtered set (unknown site, or no successes at all) yields an
/// empty breakdown.
pub fn site_success_breakdown(table: &LaunchTable, site: &SiteSelector) -> Vec<BreakdownEntry> {
    match site {
        SiteSelector::All => {
            let counts = count_in_order(
                table
                    .records()
                    .iter()
                    .filter(|r| r.class.is_success())
                    .map(|r| r.launch_site.as_str()),
            );
            to_percentages(counts)
        }
        SiteSelector::Site(name) => {
            let mut counts = count_in_order(
                table
                    .records()
                    .iter()
                    .filter(|r| &r.launch_site == name)
                    .map(|r| r.class.to_string()),
            );
            // stable: ties keep first-appearance order
            counts.sort_by(|a, b| b.1.cmp(&a.1));
            to_percentages(counts)
        }
    }
}

/// Title shown above the pie chart.
pub fn pie_chart_title(site: &SiteSelector) -> String {
    match site {
        SiteSelector::All => "Total Success Launches By Site".to_string(),
        SiteSelector::Site(name) => format!("Total Success Launches for site {}", name),
    }
}

/// Build the pie chart specification for the selected site.
pub fn compute_success_pie_chart(table: &LaunchTable, site: &SiteSelector) -> PieChart {
    let breakdown = site_success_breakdown(table, site);
    let (labels, values) = breakdown
        .into_iter()
        .map(|entry| (entry.category, entry.percentage))
        .unzip();

    PieChart {
        labels,
        values,
        title: pie_chart_title(site),
    }
}

#[cfg(test)]
#[path = "breakdown_tests.rs"]
mod breakdown_tests;
