//! Service layer: chart computations over the launch table.
//!
//! Every function here is pure. It reads the immutable [`crate::data::LaunchTable`]
//! plus the current control values and returns a fresh chart specification.

pub mod breakdown;
pub mod figures;
pub mod payload;

pub use breakdown::{compute_success_pie_chart, site_success_breakdown};
pub use figures::Figure;
pub use payload::{compute_payload_scatter_chart, payload_outcome_subset};
