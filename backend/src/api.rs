//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types returned by the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::payload_scatter::ScatterChart;
pub use crate::routes::payload_scatter::PAYLOAD_SCATTER_CHART_ID;
pub use crate::routes::success_pie::BreakdownEntry;
pub use crate::routes::success_pie::PieChart;
pub use crate::routes::success_pie::SUCCESS_PIE_CHART_ID;

pub use crate::models::{
    DashboardState, LaunchRecord, OutcomeClass, PayloadRange, SiteSelector, ALL_SITES,
};
