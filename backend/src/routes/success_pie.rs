use serde::{Deserialize, Serialize};

// =========================================================
// Success pie chart types
// =========================================================

/// One slice of a success breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    /// Site name under "ALL", outcome class ("0"/"1") for a single site
    pub category: String,
    /// Share of the filtered launches, 0..=100
    pub percentage: f64,
}

impl BreakdownEntry {
    pub fn new(category: impl Into<String>, percentage: f64) -> Self {
        Self {
            category: category.into(),
            percentage,
        }
    }
}

/// Pie chart specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub title: String,
}

impl PieChart {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Output id of the pie chart placeholder
pub const SUCCESS_PIE_CHART_ID: &str = "success-pie-chart";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pie_chart_serializes_fields() {
        let chart = PieChart {
            labels: vec!["1".to_string()],
            values: vec![100.0],
            title: "Total Success Launches for site KSC LC-39A".to_string(),
        };
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["labels"][0], "1");
        assert_eq!(json["values"][0], 100.0);
        assert!(!chart.is_empty());
    }
}
