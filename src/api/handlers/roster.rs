use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::intelligence::PassingStatus;
use crate::AppState;

#[derive(Serialize)]
pub struct RosterStatus {
    pub passing: usize,
    pub failing: usize,
    pub unclassified: usize,
    pub lines: Vec<String>,
}

/// GET /api/roster/status: Status line per student, in roster order.
pub async fn status(State(state): State<AppState>) -> Json<RosterStatus> {
    let results = state.roster.classify_all(state.config.passing_threshold).await;

    let mut status = RosterStatus {
        passing: 0,
        failing: 0,
        unclassified: 0,
        lines: Vec::with_capacity(results.len()),
    };

    for result in results {
        match result {
            Ok(report) => {
                match report.status {
                    PassingStatus::Passing => status.passing += 1,
                    PassingStatus::Failing => status.failing += 1,
                }
                status.lines.push(report.to_string());
            }
            Err(e) => {
                status.unclassified += 1;
                status.lines.push(e.to_string());
            }
        }
    }

    Json(status)
}
