use serde::{Deserialize, Serialize};

// =========================================================
// Payload scatter chart types
// =========================================================

/// Scatter chart specification: one point per launch.
///
/// `x`, `y`, `color` and `hover` are parallel vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    /// Payload mass in kilograms
    pub x: Vec<f64>,
    /// Outcome class (0 or 1)
    pub y: Vec<u8>,
    /// Booster version category, used as the colour key
    pub color: Vec<String>,
    /// Booster version shown on hover, when the data has it
    pub hover: Vec<Option<String>>,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl ScatterChart {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Output id of the scatter chart placeholder
pub const PAYLOAD_SCATTER_CHART_ID: &str = "success-payload-scatter-chart";
