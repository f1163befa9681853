pub mod student;

pub use student::{AssessmentScore, ScoreSheet, StudentRecord};

use serde::Serialize;
use std::fmt;

// ---------------------------------------------------------------------------
// UpsertOutcome
// ---------------------------------------------------------------------------

/// Result of inserting or updating a student by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum UpsertOutcome {
    Created { id: String, name: String },
    Updated { id: String, name: String },
}

impl UpsertOutcome {
    pub fn id(&self) -> &str {
        match self {
            UpsertOutcome::Created { id, .. } | UpsertOutcome::Updated { id, .. } => id,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, UpsertOutcome::Created { .. })
    }
}

impl fmt::Display for UpsertOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpsertOutcome::Created { id, name } => {
                write!(f, "Student {name} (ID: {id}) added successfully.")
            }
            UpsertOutcome::Updated { id, name } => {
                write!(f, "Student {name} (ID: {id}) updated successfully.")
            }
        }
    }
}
