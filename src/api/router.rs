use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;
use super::auth::require_auth;
use super::handlers;

pub fn create_router(state: AppState) -> Router {
    // Always open: liveness and scrape
    let public = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics::render));

    // Roster API, gated by require_auth
    let protected = Router::new()
        .route("/api/students", get(handlers::students::list))
        .route(
            "/api/students/:id",
            get(handlers::students::detail).put(handlers::students::upsert),
        )
        .route("/api/students/:id/passing", get(handlers::students::passing))
        .route("/api/students/:id/summary", get(handlers::students::summary))
        .route("/api/students/:id/prefix-sum", get(handlers::students::prefix_sum))
        .route("/api/students/:id/range-sum", get(handlers::students::range_sum))
        .route("/api/roster/status", get(handlers::roster::status))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    public
        .merge(protected)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
