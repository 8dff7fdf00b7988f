//! Dashboard configuration file support.
//!
//! Settings are read from a `dashboard.toml` file. Every field has a default,
//! so a missing file means "run with defaults". A few environment variables
//! override the file for deployment convenience.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::ConfigError;

/// Default CSV file name looked up next to the process.
pub const DEFAULT_DATA_FILE: &str = "spacex_launch_dash.csv";

/// Upper bound on slider tick marks.
pub const MAX_SLIDER_MARKS: f64 = 1000.0;

/// Complete dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub dashboard: DashboardSettings,
    #[serde(default)]
    pub slider: SliderSettings,
}

/// HTTP bind settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub debug: bool,
}

/// Location of the launch CSV.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    /// Explicit path; when unset the default search paths are tried.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Page content settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSettings {
    #[serde(default = "default_title")]
    pub title: String,
    /// Sites offered by the dropdown, after the "All Sites" entry.
    #[serde(default = "default_sites")]
    pub sites: Vec<String>,
}

/// Payload range slider settings (kilograms).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSettings {
    #[serde(default)]
    pub min: f64,
    #[serde(default = "default_slider_max")]
    pub max: f64,
    #[serde(default = "default_slider_step")]
    pub step: f64,
    #[serde(default = "default_mark_interval")]
    pub mark_interval: f64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8050
}

fn default_title() -> String {
    "SpaceX Launch Records Dashboard".to_string()
}

fn default_sites() -> Vec<String> {
    ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_slider_max() -> f64 {
    10000.0
}

fn default_slider_step() -> f64 {
    1000.0
}

fn default_mark_interval() -> f64 {
    2500.0
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
        }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            sites: default_sites(),
        }
    }
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: default_slider_max(),
            step: default_slider_step(),
            mark_interval: default_mark_interval(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: DashboardConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Path of the configuration file `from_default_location` would read.
    ///
    /// `DASH_CONFIG` takes precedence; otherwise searches for `dashboard.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn default_location() -> Option<PathBuf> {
        locate_config(std::env::var("DASH_CONFIG").ok())
    }

    /// Load configuration from the default location, or defaults if none exists.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        match Self::default_location() {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply `HOST`, `PORT`, `DASH_DEBUG` and `DASH_DATA` overrides.
    pub fn apply_env_overrides(mut self) -> Self {
        if let Ok(host) = std::env::var("HOST") {
            self.server.host = host;
        }
        if let Some(port) = std::env::var("PORT").ok().and_then(|s| s.parse().ok()) {
            self.server.port = port;
        }
        if let Ok(debug) = std::env::var("DASH_DEBUG") {
            self.server.debug = matches!(debug.to_lowercase().as_str(), "1" | "true" | "yes");
        }
        if let Ok(path) = std::env::var("DASH_DATA") {
            self.data.path = Some(PathBuf::from(path));
        }
        self
    }

    /// Check slider geometry and site list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let slider = &self.slider;
        if !slider.min.is_finite() || !slider.max.is_finite() || slider.min >= slider.max {
            return Err(ConfigError::Invalid(format!(
                "slider.min ({}) must be below slider.max ({})",
                slider.min, slider.max
            )));
        }
        if !slider.step.is_finite() || slider.step <= 0.0 {
            return Err(ConfigError::Invalid("slider.step must be positive and finite".to_string()));
        }
        if !slider.mark_interval.is_finite() || slider.mark_interval <= 0.0 {
            return Err(ConfigError::Invalid(
                "slider.mark_interval must be positive and finite".to_string(),
            ));
        }
        if (slider.max - slider.min) / slider.mark_interval > MAX_SLIDER_MARKS {
            return Err(ConfigError::Invalid(format!(
                "slider.mark_interval ({}) yields more than {} marks",
                slider.mark_interval, MAX_SLIDER_MARKS
            )));
        }
        if self.dashboard.sites.is_empty() {
            return Err(ConfigError::Invalid(
                "dashboard.sites must list at least one site".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the CSV path: explicit setting first, then the standard locations.
    pub fn resolve_data_path(&self) -> PathBuf {
        if let Some(path) = &self.data.path {
            return path.clone();
        }

        let search_paths = [
            PathBuf::from(DEFAULT_DATA_FILE),
            PathBuf::from("data").join(DEFAULT_DATA_FILE),
            PathBuf::from("backend/data").join(DEFAULT_DATA_FILE),
        ];

        search_paths
            .iter()
            .find(|p| p.exists())
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }
}

fn locate_config(explicit: Option<String>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(PathBuf::from(path));
    }

    [
        PathBuf::from("dashboard.toml"),
        PathBuf::from("backend/dashboard.toml"),
        PathBuf::from("../dashboard.toml"),
    ]
    .into_iter()
    .find(|p| p.exists())
}
