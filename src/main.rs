use gradebook::api::router::create_router;
use gradebook::config::AppConfig;
use gradebook::intelligence::prefix_sum::record_prefix_sum;
use gradebook::roster::{Lookup, RosterStore, SharedRoster};
use gradebook::services::roster_seeder::seed_sample_roster;
use gradebook::services::status_report::status_lines;
use gradebook::AppState;

/// Student whose scores drive the prefix-sum walkthrough.
const DEMO_STUDENT_ID: &str = "1111111-1";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let metrics_handle = gradebook::metrics::init_metrics()?;

    let mut store = RosterStore::new();
    if config.seed_sample_roster {
        for outcome in seed_sample_roster(&mut store) {
            tracing::debug!("{outcome}");
        }
    } else {
        tracing::info!("Sample roster disabled (SEED_SAMPLE_ROSTER=false)");
    }

    // --- Status report: one line per student, roster order ---
    for line in status_lines(&store, config.passing_threshold) {
        println!("{line}");
    }

    // --- Prefix sums over the demo student's scores ---
    match store.find_by_id(DEMO_STUDENT_ID) {
        Lookup::Found(record) => {
            let sums = record_prefix_sum(record)?;
            println!("Prefix sums for {}: {:?}", record.name, sums.prefix_sums);
            match sums.range_sum(1, 3) {
                Ok(total) => println!(
                    "Total from {} to {}: {total}",
                    sums.labels[1], sums.labels[3]
                ),
                Err(e) => tracing::warn!(error = %e, "Range query failed"),
            }
        }
        Lookup::NotFound { id } => tracing::warn!(student_id = %id, "Demo student not on roster"),
    }

    if !config.serve_api {
        return Ok(());
    }

    // --- HTTP surface over the shared roster ---
    let addr = format!("{}:{}", config.host, config.port);
    if !config.has_api_auth() {
        tracing::warn!("API_TOKEN is not set: /api routes are unauthenticated");
    }

    let state = AppState {
        roster: SharedRoster::new(store),
        config,
        metrics_handle,
    };
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();
}
