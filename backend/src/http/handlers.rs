//! HTTP handlers for the dashboard.
//!
//! Each handler corresponds to an endpoint and delegates to the service layer
//! or the callback registry for the actual computation.

use axum::{
    extract::{Query, State},
    http::Uri,
    response::Html,
    Json,
};
use tracing::{debug, warn};

use super::dto::{
    HealthResponse, Layout, PieChart, PieQuery, ScatterChart, ScatterQuery, UpdateRequest,
    UpdateResponse,
};
use super::error::AppError;
use super::page::render_page;
use super::state::AppState;
use crate::models::{PayloadRange, SiteSelector};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn selector(site: Option<String>) -> SiteSelector {
    site.map(SiteSelector::from).unwrap_or_default()
}

fn check_finite(name: &str, value: f64) -> Result<f64, AppError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AppError::BadRequest(format!("{} must be a finite number", name)))
    }
}

fn check_range(range: PayloadRange) -> Result<PayloadRange, AppError> {
    Ok(PayloadRange::new(
        check_finite("payload_range low", range.low)?,
        check_finite("payload_range high", range.high)?,
    ))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Verify the service is running and report what data it serves.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let ctx = &state.context;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records: ctx.table.len(),
        sites: ctx.table.sites().to_vec(),
        checksum: ctx.table.checksum().to_string(),
        loaded_at: ctx.loaded_at,
    }))
}

// =============================================================================
// Page and layout
// =============================================================================

/// GET /
///
/// The dashboard page itself.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&state.context.layout))
}

/// GET /v1/layout
pub async fn get_layout(State(state): State<AppState>) -> HandlerResult<Layout> {
    Ok(Json(state.context.layout.clone()))
}

// =============================================================================
// Chart Endpoints
// =============================================================================

/// GET /v1/charts/success-pie
///
/// Pie chart specification for a site (or all sites).
pub async fn get_success_pie(
    State(state): State<AppState>,
    Query(query): Query<PieQuery>,
) -> HandlerResult<PieChart> {
    let site = selector(query.site);
    let chart = services::compute_success_pie_chart(&state.context.table, &site);
    if chart.is_empty() {
        debug!("No launches to plot for site {}", site);
    }
    Ok(Json(chart))
}

/// GET /v1/charts/payload-scatter
///
/// Scatter chart specification; missing bounds default to the table range.
pub async fn get_payload_scatter(
    State(state): State<AppState>,
    Query(query): Query<ScatterQuery>,
) -> HandlerResult<ScatterChart> {
    let table = &state.context.table;
    let bounds = table.payload_bounds();
    let range = check_range(PayloadRange::new(
        query.low.unwrap_or(bounds.low),
        query.high.unwrap_or(bounds.high),
    ))?;

    let site = selector(query.site);
    Ok(Json(services::compute_payload_scatter_chart(
        table, &site, range,
    )))
}

// =============================================================================
// Reactive updates
// =============================================================================

/// POST /v1/update
///
/// Recompute every chart that depends on the control that changed.
pub async fn post_update(
    State(state): State<AppState>,
    Json(request): Json<UpdateRequest>,
) -> HandlerResult<UpdateResponse> {
    let mut dashboard_state = request.state;
    dashboard_state.payload_range = check_range(dashboard_state.payload_range)?;

    let outputs = state
        .context
        .update(&dashboard_state, request.changed.as_deref());

    if outputs.is_empty() {
        warn!(
            "Update for {:?} matched no bindings",
            request.changed.as_deref().unwrap_or("<initial>")
        );
    }

    Ok(Json(UpdateResponse { outputs }))
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
