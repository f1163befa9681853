use rust_decimal::Decimal;

use crate::intelligence::classifier::classify_roster;
use crate::roster::RosterStore;

/// One status line per student, in roster order.
///
/// Students that cannot be classified get their error message as the line,
/// so the listing always has one entry per student.
pub fn status_lines(store: &RosterStore, threshold: Decimal) -> Vec<String> {
    classify_roster(store, threshold)
        .into_iter()
        .map(|result| match result {
            Ok(report) => report.to_string(),
            Err(e) => e.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intelligence::classifier::DEFAULT_PASSING_THRESHOLD;
    use crate::models::ScoreSheet;
    use crate::services::roster_seeder::seed_sample_roster;

    #[test]
    fn test_status_lines_for_sample_roster() {
        let mut store = RosterStore::new();
        seed_sample_roster(&mut store);

        let lines = status_lines(&store, DEFAULT_PASSING_THRESHOLD);
        assert_eq!(lines.len(), 10);
        assert_eq!(
            lines[0],
            "Student John Doe (ID: 1111111-1) is passing with an average score of 83.83%."
        );
        assert_eq!(
            lines[1],
            "Student Jane Smith (ID: 1111111-2) is failing with an average score of 45.50%."
        );
        assert_eq!(
            lines[9],
            "Student Ava Thompson (ID: 1111111-10) is passing with an average score of 76.33%."
        );
    }

    #[test]
    fn test_unclassifiable_student_reported_inline() {
        let mut store = RosterStore::new();
        store.upsert("x", "Nobody", ScoreSheet::new());

        let lines = status_lines(&store, DEFAULT_PASSING_THRESHOLD);
        assert_eq!(lines, vec!["invalid score data for student x: no assessment scores recorded"]);
    }
}
