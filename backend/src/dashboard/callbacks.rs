//! Reactive bindings between input controls and chart placeholders.
//!
//! A [`Binding`] says "when any of these controls changes, recompute this
//! output with this handler". The registry is a plain lookup table; the HTTP
//! layer feeds it the id of the control that changed plus the current values
//! of every control, and gets back the figures to replace.
//!
//! Handlers are pure functions of the control values and the immutable launch
//! table, so dispatch needs no memory of earlier renders.

use serde::{Deserialize, Serialize};

use super::layout::{PAYLOAD_SLIDER_ID, SITE_DROPDOWN_ID};
use crate::api::{PAYLOAD_SCATTER_CHART_ID, SUCCESS_PIE_CHART_ID};
use crate::data::LaunchTable;
use crate::models::DashboardState;
use crate::services::{compute_payload_scatter_chart, compute_success_pie_chart, Figure};

/// Recompute one output from the current control values.
pub type Handler = fn(&DashboardState, &LaunchTable) -> Figure;

/// One dependency rule.
#[derive(Debug, Clone)]
pub struct Binding {
    pub output: String,
    pub inputs: Vec<String>,
    handler: Handler,
}

impl Binding {
    pub fn new(output: impl Into<String>, inputs: &[&str], handler: Handler) -> Self {
        Self {
            output: output.into(),
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            handler,
        }
    }

    pub fn depends_on(&self, control: &str) -> bool {
        self.inputs.iter().any(|input| input == control)
    }

    pub fn evaluate(&self, state: &DashboardState, table: &LaunchTable) -> ChartUpdate {
        ChartUpdate {
            id: self.output.clone(),
            figure: (self.handler)(state, table),
        }
    }
}

/// A freshly computed figure for one placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartUpdate {
    pub id: String,
    pub figure: Figure,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BindingError {
    /// The output would feed back into some binding's inputs.
    #[error("Binding for '{output}' would create a cycle through '{via}'")]
    Cycle { output: String, via: String },

    #[error("Output '{output}' already has a binding")]
    DuplicateOutput { output: String },
}

/// Table of dependency rules, evaluated in registration order.
#[derive(Debug, Clone, Default)]
pub struct CallbackRegistry {
    bindings: Vec<Binding>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a binding, rejecting duplicates and anything that makes a cycle.
    pub fn register(&mut self, binding: Binding) -> Result<(), BindingError> {
        if self.bindings.iter().any(|b| b.output == binding.output) {
            return Err(BindingError::DuplicateOutput {
                output: binding.output,
            });
        }

        if binding.depends_on(&binding.output) {
            return Err(BindingError::Cycle {
                via: binding.output.clone(),
                output: binding.output,
            });
        }

        // no output may be read as an input anywhere else
        if let Some(existing) = self.bindings.iter().find(|b| b.depends_on(&binding.output)) {
            return Err(BindingError::Cycle {
                output: binding.output,
                via: existing.output.clone(),
            });
        }
        if let Some(existing) = self.bindings.iter().find(|b| binding.depends_on(&b.output)) {
            return Err(BindingError::Cycle {
                output: binding.output,
                via: existing.output.clone(),
            });
        }

        self.bindings.push(binding);
        Ok(())
    }

    /// The two dashboard rules: dropdown drives the pie chart, dropdown and
    /// slider drive the scatter chart.
    pub fn dashboard_defaults() -> Result<Self, BindingError> {
        let mut registry = Self::new();
        registry.register(Binding::new(
            SUCCESS_PIE_CHART_ID,
            &[SITE_DROPDOWN_ID],
            render_success_pie,
        ))?;
        registry.register(Binding::new(
            PAYLOAD_SCATTER_CHART_ID,
            &[SITE_DROPDOWN_ID, PAYLOAD_SLIDER_ID],
            render_payload_scatter,
        ))?;
        Ok(registry)
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Bindings that must rerun when `control` changes.
    pub fn dependents<'a>(&'a self, control: &'a str) -> impl Iterator<Item = &'a Binding> + 'a {
        self.bindings.iter().filter(move |b| b.depends_on(control))
    }

    /// Recompute every output affected by `changed`.
    ///
    /// `None` means the initial render: every binding runs. Unknown control
    /// ids affect nothing.
    pub fn dispatch(
        &self,
        table: &LaunchTable,
        state: &DashboardState,
        changed: Option<&str>,
    ) -> Vec<ChartUpdate> {
        match changed {
            None => self
                .bindings
                .iter()
                .map(|b| b.evaluate(state, table))
                .collect(),
            Some(control) => self
                .dependents(control)
                .map(|b| b.evaluate(state, table))
                .collect(),
        }
    }
}

fn render_success_pie(state: &DashboardState, table: &LaunchTable) -> Figure {
    Figure::from(&compute_success_pie_chart(table, &state.site))
}

fn render_payload_scatter(state: &DashboardState, table: &LaunchTable) -> Figure {
    Figure::from(&compute_payload_scatter_chart(
        table,
        &state.site,
        state.payload_range,
    ))
}
