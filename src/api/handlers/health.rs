use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::AppState;

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let students = state.roster.len().await;
    (StatusCode::OK, Json(json!({ "status": "healthy", "students": students })))
}
