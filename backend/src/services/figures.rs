//! Conversion of chart specifications into Plotly figure JSON.
//!
//! The browser hands these straight to `Plotly.react`, so field names follow
//! the Plotly.js schema rather than Rust conventions.

use serde::{Deserialize, Serialize};

use crate::api::{PieChart, ScatterChart};

/// Plotly's default qualitative colour sequence.
pub const QUALITATIVE_PALETTE: [&str; 10] = [
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// A complete Plotly figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: FigureLayout,
}

/// One Plotly trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie {
        labels: Vec<String>,
        values: Vec<f64>,
    },
    Scatter {
        name: String,
        x: Vec<f64>,
        y: Vec<u8>,
        mode: String,
        marker: Marker,
        #[serde(skip_serializing_if = "Vec::is_empty", default)]
        text: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureLayout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub legend: Option<Legend>,
}

impl From<&PieChart> for Figure {
    fn from(chart: &PieChart) -> Self {
        Figure {
            data: vec![Trace::Pie {
                labels: chart.labels.clone(),
                values: chart.values.clone(),
            }],
            layout: FigureLayout {
                title: Title::new(chart.title.as_str()),
                xaxis: None,
                yaxis: None,
                legend: None,
            },
        }
    }
}

impl From<&ScatterChart> for Figure {
    /// One marker trace per colour category, in order of first appearance.
    fn from(chart: &ScatterChart) -> Self {
        let mut traces: Vec<Trace> = Vec::new();
        let mut categories: Vec<&str> = Vec::new();

        for (i, category) in chart.color.iter().enumerate() {
            let slot = match categories.iter().position(|c| *c == category.as_str()) {
                Some(slot) => slot,
                None => {
                    categories.push(category.as_str());
                    traces.push(Trace::Scatter {
                        name: category.clone(),
                        x: Vec::new(),
                        y: Vec::new(),
                        mode: "markers".to_string(),
                        marker: Marker {
                            color: QUALITATIVE_PALETTE[(categories.len() - 1) % QUALITATIVE_PALETTE.len()]
                                .to_string(),
                        },
                        text: Vec::new(),
                    });
                    categories.len() - 1
                }
            };

            if let Trace::Scatter { x, y, text, .. } = &mut traces[slot] {
                x.push(chart.x[i]);
                y.push(chart.y[i]);
                if let Some(Some(label)) = chart.hover.get(i) {
                    text.push(label.clone());
                }
            }
        }

        // Hover labels only make sense when every point has one.
        for trace in &mut traces {
            if let Trace::Scatter { x, text, .. } = trace {
                if text.len() != x.len() {
                    text.clear();
                }
            }
        }

        Figure {
            data: traces,
            layout: FigureLayout {
                title: Title::new(chart.title.as_str()),
                xaxis: Some(Axis {
                    title: Title::new(chart.x_label.as_str()),
                }),
                yaxis: Some(Axis {
                    title: Title::new(chart.y_label.as_str()),
                }),
                legend: Some(Legend {
                    title: Title::new("Booster Version Category"),
                }),
            },
        }
    }
}
