//! Data Transfer Objects for the HTTP API.
//!
//! Chart specifications and the layout are re-exported from the library since
//! they already derive Serialize/Deserialize.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::api::{BreakdownEntry, PieChart, ScatterChart};
pub use crate::dashboard::{ChartUpdate, Layout};
use crate::models::DashboardState;

/// Query parameters for the pie chart endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PieQuery {
    /// Launch site, or "ALL" (default)
    #[serde(default)]
    pub site: Option<String>,
}

/// Query parameters for the scatter chart endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScatterQuery {
    /// Launch site, or "ALL" (default)
    #[serde(default)]
    pub site: Option<String>,
    /// Lower payload bound in kg (default: table minimum)
    #[serde(default)]
    pub low: Option<f64>,
    /// Upper payload bound in kg (default: table maximum)
    #[serde(default)]
    pub high: Option<f64>,
}

/// Request body for `POST /v1/update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRequest {
    /// Id of the control that changed; `null` on first render
    #[serde(default)]
    pub changed: Option<String>,
    /// Current value of every control
    pub state: DashboardState,
}

/// Response for `POST /v1/update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub outputs: Vec<ChartUpdate>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of launch records loaded
    pub records: usize,
    /// Distinct launch sites present in the data
    pub sites: Vec<String>,
    /// SHA-256 of the launch CSV
    pub checksum: String,
    /// When the data was loaded
    pub loaded_at: DateTime<Utc>,
}
