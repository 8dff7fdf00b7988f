//! The single immutable object shared by every request.

use chrono::{DateTime, Utc};

use super::callbacks::{BindingError, CallbackRegistry, ChartUpdate};
use super::layout::Layout;
use crate::data::{DashboardConfig, LaunchTable, LoadError};
use crate::models::{DashboardState, SiteSelector};

/// Errors raised while assembling the dashboard at startup.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Binding(#[from] BindingError),
}

/// Loaded table, layout and bindings, built once at startup.
#[derive(Debug)]
pub struct DashboardContext {
    pub config: DashboardConfig,
    pub table: LaunchTable,
    pub layout: Layout,
    pub callbacks: CallbackRegistry,
    pub loaded_at: DateTime<Utc>,
}

impl DashboardContext {
    /// Assemble a context around an already loaded table.
    pub fn new(config: DashboardConfig, table: LaunchTable) -> Result<Self, DashboardError> {
        let layout = Layout::build(&config, &table);
        let callbacks = CallbackRegistry::dashboard_defaults()?;
        Ok(Self {
            config,
            table,
            layout,
            callbacks,
            loaded_at: Utc::now(),
        })
    }

    /// Load the launch CSV named by `config` and assemble the context.
    pub fn load(config: DashboardConfig) -> Result<Self, DashboardError> {
        let path = config.resolve_data_path();
        let table = LaunchTable::load(&path)?;
        Self::new(config, table)
    }

    /// Control values the page starts with.
    pub fn initial_state(&self) -> DashboardState {
        DashboardState::new(SiteSelector::All, self.table.payload_bounds())
    }

    /// Recompute the outputs affected by a control change.
    pub fn update(&self, state: &DashboardState, changed: Option<&str>) -> Vec<ChartUpdate> {
        log::debug!(
            "Dispatching change of {:?} (site={}, payload={}..={})",
            changed,
            state.site,
            state.payload_range.low,
            state.payload_range.high
        );
        self.callbacks.dispatch(&self.table, state, changed)
    }
}
