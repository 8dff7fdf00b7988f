//! Dashboard page description and the reactive bindings that refresh it.

pub mod callbacks;
pub mod context;
pub mod layout;

pub use callbacks::{Binding, BindingError, CallbackRegistry, ChartUpdate};
pub use context::{DashboardContext, DashboardError};
pub use layout::{Component, Layout, PAYLOAD_SLIDER_ID, SITE_DROPDOWN_ID};
