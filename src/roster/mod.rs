pub mod shared;

pub use shared::SharedRoster;

use chrono::Utc;
use metrics::{counter, gauge};

use crate::errors::RosterError;
use crate::models::{ScoreSheet, StudentRecord, UpsertOutcome};

/// Outcome of a lookup by student id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    Found(&'a StudentRecord),
    NotFound { id: &'a str },
}

impl<'a> Lookup<'a> {
    pub fn found(self) -> Option<&'a StudentRecord> {
        match self {
            Lookup::Found(record) => Some(record),
            Lookup::NotFound { .. } => None,
        }
    }

    pub fn into_result(self) -> Result<&'a StudentRecord, RosterError> {
        match self {
            Lookup::Found(record) => Ok(record),
            Lookup::NotFound { id } => Err(RosterError::NotFound { id: id.to_string() }),
        }
    }
}

/// Insertion-ordered student roster. At most one record per id.
#[derive(Debug, Default)]
pub struct RosterStore {
    students: Vec<StudentRecord>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new student, or replace the name and scores of an existing one.
    pub fn upsert(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        scores: ScoreSheet,
    ) -> UpsertOutcome {
        let id = id.into();
        let name = name.into();
        counter!("roster_upserts_total").increment(1);

        if let Some(existing) = self.students.iter_mut().find(|s| s.id == id) {
            existing.name = name.clone();
            existing.scores = scores;
            existing.updated_at = Utc::now();
            tracing::debug!(student_id = %id, "Roster: updated student");
            return UpsertOutcome::Updated { id, name };
        }

        self.students.push(StudentRecord::new(id.clone(), name.clone(), scores));
        gauge!("roster_size").set(self.students.len() as f64);
        tracing::debug!(student_id = %id, roster_size = self.students.len(), "Roster: added student");
        UpsertOutcome::Created { id, name }
    }

    /// Upsert a batch of students, returning outcomes in input order.
    pub fn bulk_load<I>(&mut self, students: I) -> Vec<UpsertOutcome>
    where
        I: IntoIterator<Item = (String, String, ScoreSheet)>,
    {
        students
            .into_iter()
            .map(|(id, name, scores)| self.upsert(id, name, scores))
            .collect()
    }

    /// Linear scan for a student by id.
    pub fn find_by_id<'a>(&'a self, id: &'a str) -> Lookup<'a> {
        match self.students.iter().find(|s| s.id == id) {
            Some(record) => Lookup::Found(record),
            None => {
                counter!("roster_lookup_misses_total").increment(1);
                tracing::debug!(student_id = %id, "Roster: lookup miss");
                Lookup::NotFound { id }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &StudentRecord> {
        self.students.iter()
    }
}
