use metrics::{counter, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Install the Prometheus exporter and register all roster metrics.
/// Returns a `PrometheusHandle` whose `render()` method produces the
/// text/plain Prometheus scrape payload.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    // Pre-register counters so they appear even before the first increment.
    counter!("roster_upserts_total").absolute(0);
    counter!("roster_lookup_misses_total").absolute(0);
    counter!("passing_checks_total").absolute(0);
    counter!("range_queries_total").absolute(0);

    gauge!("roster_size").set(0.0);

    Ok(handle)
}

/// Build a handle without installing it as the global recorder.
/// Used where a recorder may already be installed (tests, embedded routers).
pub fn detached_handle() -> PrometheusHandle {
    PrometheusBuilder::new().build_recorder().handle()
}
