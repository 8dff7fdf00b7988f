//! # SpaceX Launch Dashboard Backend
//!
//! Interactive dashboard over a static CSV of SpaceX launch records.
//!
//! The crate loads the launch table once at startup and serves a single page
//! with a launch-site dropdown, a pie chart of launch success, and a
//! payload-vs-outcome scatter plot filtered by a payload range slider.
//!
//! ## Architecture
//!
//! - [`data`]: CSV loading into the immutable [`data::LaunchTable`], configuration
//! - [`models`]: launch records and control selections
//! - [`services`]: success breakdown, payload subset, Plotly figure conversion
//! - [`routes`]: chart specification types
//! - [`dashboard`]: page layout, reactive bindings, shared context
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! Every chart is a pure function of the current control values and the
//! table, so concurrent requests share the context without locking.

pub mod api;

pub mod dashboard;
pub mod data;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
