pub mod api;
pub mod config;
pub mod errors;
pub mod intelligence;
pub mod metrics;
pub mod models;
pub mod roster;
pub mod services;

use crate::config::AppConfig;
use crate::roster::SharedRoster;

#[derive(Clone)]
pub struct AppState {
    pub roster: SharedRoster,
    pub config: AppConfig,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}
