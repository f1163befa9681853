use rust_decimal::Decimal;

use crate::models::{ScoreSheet, UpsertOutcome};
use crate::roster::RosterStore;

/// Assessment labels shared by every sample student, in declared order.
pub const SAMPLE_ASSESSMENTS: [&str; 6] = [
    "Class Participation",
    "Assignment",
    "Quiz #1",
    "Quiz #2",
    "Quiz #3",
    "Midterm Exam",
];

const SAMPLE_STUDENTS: [(&str, &str, [i64; 6]); 10] = [
    ("1111111-1", "John Doe", [82, 75, 85, 95, 78, 88]),
    ("1111111-2", "Jane Smith", [50, 55, 40, 45, 35, 48]),
    ("1111111-3", "Mike Johnson", [78, 82, 79, 88, 90, 85]),
    ("1111111-4", "Emily Davis", [64, 60, 62, 68, 70, 66]),
    ("1111111-5", "David Wilson", [48, 45, 50, 52, 40, 55]),
    ("1111111-6", "Sophia Brown", [89, 92, 88, 94, 85, 90]),
    ("1111111-7", "Chris White", [56, 54, 60, 63, 58, 61]),
    ("1111111-8", "Olivia Martinez", [91, 89, 95, 94, 90, 96]),
    ("1111111-9", "Liam Anderson", [42, 38, 40, 45, 43, 47]),
    ("1111111-10", "Ava Thompson", [72, 70, 78, 80, 76, 82]),
];

/// The ten sample students as `(id, name, scores)` tuples.
pub fn sample_students() -> Vec<(String, String, ScoreSheet)> {
    SAMPLE_STUDENTS
        .iter()
        .map(|(id, name, scores)| {
            let sheet: ScoreSheet = SAMPLE_ASSESSMENTS
                .iter()
                .zip(scores.iter())
                .map(|(label, score)| (*label, Decimal::from(*score)))
                .collect();
            (id.to_string(), name.to_string(), sheet)
        })
        .collect()
}

/// Bulk-load the sample students into `store`.
pub fn seed_sample_roster(store: &mut RosterStore) -> Vec<UpsertOutcome> {
    let outcomes = store.bulk_load(sample_students());
    let created = outcomes.iter().filter(|o| o.is_created()).count();

    tracing::info!(
        created,
        updated = outcomes.len() - created,
        roster_size = store.len(),
        "Roster seeder: sample students loaded"
    );

    outcomes
}
