//! Static page layout: controls and chart placeholders.
//!
//! The layout is built once from the configuration and the loaded table and
//! never changes afterwards. Only the two graph placeholders are refreshed,
//! always as whole figures.

use serde::{Deserialize, Serialize};

use crate::api::{PAYLOAD_SCATTER_CHART_ID, SUCCESS_PIE_CHART_ID};
use crate::data::{DashboardConfig, LaunchTable, MAX_SLIDER_MARKS};
use crate::models::{PayloadRange, ALL_SITES};

/// Id of the launch site dropdown
pub const SITE_DROPDOWN_ID: &str = "site-dropdown";

/// Id of the payload range slider
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";

pub const HEADING_COLOR: &str = "#503D36";
pub const HEADING_FONT_SIZE: u32 = 40;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

/// Inline style of the page heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingStyle {
    pub text_align: String,
    pub color: String,
    pub font_size: u32,
}

/// One element of the page, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "component", rename_all = "snake_case")]
pub enum Component {
    Heading {
        text: String,
        style: HeadingStyle,
    },
    Dropdown {
        id: String,
        options: Vec<DropdownOption>,
        value: String,
        placeholder: String,
        searchable: bool,
    },
    Graph {
        id: String,
    },
    Paragraph {
        text: String,
    },
    RangeSlider {
        id: String,
        min: f64,
        max: f64,
        step: f64,
        marks: Vec<SliderMark>,
        value: PayloadRange,
    },
    Break,
}

impl Component {
    /// Element id, for components that have one.
    pub fn id(&self) -> Option<&str> {
        match self {
            Component::Dropdown { id, .. }
            | Component::Graph { id }
            | Component::RangeSlider { id, .. } => Some(id.as_str()),
            _ => None,
        }
    }

    /// Whether the user can change this component's value.
    pub fn is_input(&self) -> bool {
        matches!(self, Component::Dropdown { .. } | Component::RangeSlider { .. })
    }
}

/// Complete page description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: String,
    pub components: Vec<Component>,
}

impl Layout {
    /// Build the dashboard layout.
    ///
    /// The slider's initial value is the observed payload range of `table`.
    pub fn build(config: &DashboardConfig, table: &LaunchTable) -> Self {
        let mut options = vec![DropdownOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        }];
        options.extend(config.dashboard.sites.iter().map(|site| DropdownOption {
            label: site.clone(),
            value: site.clone(),
        }));

        let slider = &config.slider;
        let components = vec![
            Component::Heading {
                text: config.dashboard.title.clone(),
                style: HeadingStyle {
                    text_align: "center".to_string(),
                    color: HEADING_COLOR.to_string(),
                    font_size: HEADING_FONT_SIZE,
                },
            },
            Component::Dropdown {
                id: SITE_DROPDOWN_ID.to_string(),
                options,
                value: ALL_SITES.to_string(),
                placeholder: "Select a Launch Site here".to_string(),
                searchable: true,
            },
            Component::Break,
            Component::Graph {
                id: SUCCESS_PIE_CHART_ID.to_string(),
            },
            Component::Break,
            Component::Paragraph {
                text: "Payload range (Kg):".to_string(),
            },
            Component::RangeSlider {
                id: PAYLOAD_SLIDER_ID.to_string(),
                min: slider.min,
                max: slider.max,
                step: slider.step,
                marks: slider_marks(slider.min, slider.max, slider.mark_interval),
                value: table.payload_bounds(),
            },
            Component::Graph {
                id: PAYLOAD_SCATTER_CHART_ID.to_string(),
            },
        ];

        Self {
            title: config.dashboard.title.clone(),
            components,
        }
    }

    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id() == Some(id))
    }

    /// Ids of user-editable controls.
    pub fn input_ids(&self) -> Vec<&str> {
        self.components
            .iter()
            .filter(|c| c.is_input())
            .filter_map(Component::id)
            .collect()
    }

    /// Ids of the chart placeholders.
    pub fn graph_ids(&self) -> Vec<&str> {
        self.components
            .iter()
            .filter(|c| matches!(c, Component::Graph { .. }))
            .filter_map(Component::id)
            .collect()
    }

    /// Initial value of the payload slider.
    pub fn default_payload_range(&self) -> Option<PayloadRange> {
        self.components.iter().find_map(|c| match c {
            Component::RangeSlider { value, .. } => Some(*value),
            _ => None,
        })
    }
}

/// Tick marks every `interval` kilograms from `min` up to `max`.
///
/// Returns no marks when the geometry is not finite or would need more than
/// [`MAX_SLIDER_MARKS`] ticks.
pub fn slider_marks(min: f64, max: f64, interval: f64) -> Vec<SliderMark> {
    if !min.is_finite() || !max.is_finite() || !interval.is_finite() || interval <= 0.0 || max < min {
        return Vec::new();
    }

    let steps = ((max - min) / interval).floor();
    if steps > MAX_SLIDER_MARKS {
        return Vec::new();
    }
    let count = steps as usize;
    (0..=count)
        .map(|k| {
            let value = min + k as f64 * interval;
            SliderMark {
                value,
                label: format_mark(value),
            }
        })
        .collect()
}

fn format_mark(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LaunchRecord, OutcomeClass};

    fn table() -> LaunchTable {
        LaunchTable::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 0.0, OutcomeClass::Failure, "v1.0"),
            LaunchRecord::new("KSC LC-39A", 9600.0, OutcomeClass::Success, "FT"),
        ])
    }

    #[test]
    fn test_default_marks() {
        let marks = slider_marks(0.0, 10000.0, 2500.0);
        let labels: Vec<&str> = marks.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["0", "2500", "5000", "7500", "10000"]);
    }

    #[test]
    fn test_marks_reject_bad_interval() {
        assert!(slider_marks(0.0, 10.0, 0.0).is_empty());
        assert!(slider_marks(0.0, 10.0, f64::INFINITY).is_empty());
        assert!(slider_marks(0.0, f64::INFINITY, 1.0).is_empty());
    }

    #[test]
    fn test_marks_skip_oversized_geometry() {
        assert!(slider_marks(0.0, 10000.0, 1e-9).is_empty());
        assert_eq!(slider_marks(0.0, 10000.0, 10.0).len(), 1001);
    }

    #[test]
    fn test_layout_order_and_ids() {
        let layout = Layout::build(&DashboardConfig::default(), &table());
        assert!(matches!(layout.components[0], Component::Heading { .. }));
        assert_eq!(layout.input_ids(), vec![SITE_DROPDOWN_ID, PAYLOAD_SLIDER_ID]);
        assert_eq!(
            layout.graph_ids(),
            vec![SUCCESS_PIE_CHART_ID, PAYLOAD_SCATTER_CHART_ID]
        );
    }

    #[test]
    fn test_dropdown_options_start_with_all() {
        let layout = Layout::build(&DashboardConfig::default(), &table());
        match layout.component(SITE_DROPDOWN_ID) {
            Some(Component::Dropdown { options, value, .. }) => {
                assert_eq!(value, ALL_SITES);
                assert_eq!(options.len(), 5);
                assert_eq!(options[0].label, "All Sites");
                assert_eq!(options[0].value, "ALL");
                assert_eq!(options[2].value, "VAFB SLC-4E");
            }
            other => panic!("expected dropdown, got {:?}", other),
        }
    }

    #[test]
    fn test_slider_defaults_to_table_bounds() {
        let layout = Layout::build(&DashboardConfig::default(), &table());
        assert_eq!(
            layout.default_payload_range(),
            Some(PayloadRange::new(0.0, 9600.0))
        );
    }

    #[test]
    fn test_layout_json_tags() {
        let layout = Layout::build(&DashboardConfig::default(), &table());
        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(json["components"][0]["component"], "heading");
        assert_eq!(json["components"][6]["component"], "range_slider");
        assert_eq!(json["components"][6]["value"][1], 9600.0);
    }
}
