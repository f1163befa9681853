use std::fmt;

use metrics::counter;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::errors::RosterError;
use crate::models::StudentRecord;
use crate::roster::RosterStore;

use super::scorer;

/// Minimum average (inclusive) for a passing classification.
pub const DEFAULT_PASSING_THRESHOLD: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Pass/fail categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassingStatus {
    Passing,
    Failing,
}

impl PassingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PassingStatus::Passing => "passing",
            PassingStatus::Failing => "failing",
        }
    }
}

impl fmt::Display for PassingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a single student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassingReport {
    pub status: PassingStatus,
    pub student_id: String,
    pub name: String,
    /// Unrounded mean of all scores.
    pub average: Decimal,
}

impl fmt::Display for PassingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self
            .average
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(
            f,
            "Student {} (ID: {}) is {} with an average score of {:.2}%.",
            self.name, self.student_id, self.status, shown,
        )
    }
}

/// Look up a student and classify them against `threshold`.
///
/// A lookup miss is returned as-is. A student with no scores, or whose
/// score total does not fit in a `Decimal`, yields `InvalidState`.
pub fn check_passing(
    store: &RosterStore,
    id: &str,
    threshold: Decimal,
) -> Result<PassingReport, RosterError> {
    let record = store.find_by_id(id).into_result()?;
    classify_record(record, threshold)
}

pub fn check_passing_default(store: &RosterStore, id: &str) -> Result<PassingReport, RosterError> {
    check_passing(store, id, DEFAULT_PASSING_THRESHOLD)
}

/// Classify every student in roster order. One failure does not stop the rest.
pub fn classify_roster(
    store: &RosterStore,
    threshold: Decimal,
) -> Vec<Result<PassingReport, RosterError>> {
    store
        .iter()
        .map(|record| classify_record(record, threshold))
        .collect()
}

fn classify_record(record: &StudentRecord, threshold: Decimal) -> Result<PassingReport, RosterError> {
    counter!("passing_checks_total").increment(1);

    let average = scorer::average(&record.scores.values()).map_err(|reason| {
        tracing::warn!(student_id = %record.id, reason, "Classifier: cannot average scores");
        RosterError::InvalidState {
            id: record.id.clone(),
            reason: reason.into(),
        }
    })?;

    let status = if average >= threshold {
        PassingStatus::Passing
    } else {
        PassingStatus::Failing
    };

    Ok(PassingReport {
        status,
        student_id: record.id.clone(),
        name: record.name.clone(),
        average,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
