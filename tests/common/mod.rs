use rust_decimal::Decimal;

use gradebook::config::AppConfig;
use gradebook::models::ScoreSheet;
use gradebook::roster::{RosterStore, SharedRoster};
use gradebook::services::roster_seeder::seed_sample_roster;
use gradebook::AppState;

/// Roster loaded with the ten sample students.
#[allow(dead_code)]
pub fn seeded_store() -> RosterStore {
    let mut store = RosterStore::new();
    seed_sample_roster(&mut store);
    store
}

/// Score sheet with labels `Quiz #1`, `Quiz #2`, ... in order.
#[allow(dead_code)]
pub fn quiz_sheet(values: &[i64]) -> ScoreSheet {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (format!("Quiz #{}", i + 1), Decimal::from(*v)))
        .collect()
}

/// App state over the sample roster, with the given API token.
#[allow(dead_code)]
pub fn test_state(api_token: Option<&str>) -> AppState {
    AppState {
        roster: SharedRoster::new(seeded_store()),
        config: AppConfig {
            api_token: api_token.map(str::to_string),
            ..AppConfig::default()
        },
        metrics_handle: gradebook::metrics::detached_handle(),
    }
}
