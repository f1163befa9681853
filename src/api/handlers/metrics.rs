use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use metrics::gauge;

use crate::AppState;

const PROMETHEUS_TEXT: &str = "text/plain; version=0.0.4";

/// GET /metrics: Prometheus scrape, with the roster size refreshed first.
pub async fn render(State(state): State<AppState>) -> impl IntoResponse {
    gauge!("roster_size").set(state.roster.len().await as f64);
    ([(CONTENT_TYPE, PROMETHEUS_TEXT)], state.metrics_handle.render())
}
