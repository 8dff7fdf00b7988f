//! Launch data loading and dashboard configuration.
//!
//! The launch table is read once at startup and never written again. Every
//! chart is computed from it by the [`crate::services`] layer.

pub mod checksum;
pub mod config;
pub mod error;
pub mod table;

pub use config::{
    DashboardConfig, DashboardSettings, DataSettings, ServerSettings, SliderSettings, MAX_SLIDER_MARKS,
};
pub use error::{ConfigError, LoadError, LoadResult};
pub use table::LaunchTable;
