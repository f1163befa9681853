use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One assessment entry in a score sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentScore {
    pub label: String,
    pub score: Decimal,
}

/// Assessment label → score, kept in declared order.
///
/// Labels are unique. Setting a label that already exists replaces its score
/// without moving it, so the order seen by prefix-sum queries is the order
/// in which labels were first declared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<AssessmentScore>", into = "Vec<AssessmentScore>")]
pub struct ScoreSheet {
    entries: Vec<AssessmentScore>,
}

impl ScoreSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, label: impl Into<String>, score: Decimal) {
        let label = label.into();
        match self.entries.iter_mut().find(|e| e.label == label) {
            Some(entry) => entry.score = score,
            None => self.entries.push(AssessmentScore { label, score }),
        }
    }

    pub fn get(&self, label: &str) -> Option<Decimal> {
        self.entries.iter().find(|e| e.label == label).map(|e| e.score)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssessmentScore> {
        self.entries.iter()
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.label.clone()).collect()
    }

    /// Scores in declared order.
    pub fn values(&self) -> Vec<Decimal> {
        self.entries.iter().map(|e| e.score).collect()
    }
}

/// Repeated labels collapse into one entry: the last score wins, at the
/// position where the label first appeared.
impl From<Vec<AssessmentScore>> for ScoreSheet {
    fn from(entries: Vec<AssessmentScore>) -> Self {
        entries.into_iter().map(|e| (e.label, e.score)).collect()
    }
}

impl From<ScoreSheet> for Vec<AssessmentScore> {
    fn from(sheet: ScoreSheet) -> Self {
        sheet.entries
    }
}

impl<L: Into<String>> FromIterator<(L, Decimal)> for ScoreSheet {
    fn from_iter<I: IntoIterator<Item = (L, Decimal)>>(iter: I) -> Self {
        let mut sheet = ScoreSheet::new();
        for (label, score) in iter {
            sheet.set(label, score);
        }
        sheet
    }
}

/// A student on the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub scores: ScoreSheet,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StudentRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, scores: ScoreSheet) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            scores,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_existing_label_keeps_position() {
        let mut sheet: ScoreSheet = [
            ("Quiz #1", Decimal::from(70)),
            ("Quiz #2", Decimal::from(80)),
        ]
        .into_iter()
        .collect();

        sheet.set("Quiz #1", Decimal::from(90));

        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.labels(), vec!["Quiz #1", "Quiz #2"]);
        assert_eq!(sheet.values(), vec![Decimal::from(90), Decimal::from(80)]);
    }

    #[test]
    fn test_score_sheet_serializes_as_ordered_list() {
        let sheet: ScoreSheet = [("Midterm Exam", Decimal::from(88)), ("Assignment", Decimal::from(75))]
            .into_iter()
            .collect();

        let json = serde_json::to_value(&sheet).unwrap();
        assert_eq!(json[0]["label"], "Midterm Exam");
        assert_eq!(json[1]["label"], "Assignment");

        let back: ScoreSheet = serde_json::from_value(json).unwrap();
        assert_eq!(back, sheet);
    }

    #[test]
    fn test_from_list_with_repeated_label_keeps_last_score() {
        let sheet = ScoreSheet::from(vec![
            AssessmentScore { label: "Quiz #1".into(), score: Decimal::from(40) },
            AssessmentScore { label: "Quiz #2".into(), score: Decimal::from(50) },
            AssessmentScore { label: "Quiz #1".into(), score: Decimal::from(90) },
        ]);

        assert_eq!(sheet.labels(), vec!["Quiz #1", "Quiz #2"]);
        assert_eq!(sheet.get("Quiz #1"), Some(Decimal::from(90)));
    }

    #[test]
    fn test_get_missing_label() {
        assert_eq!(ScoreSheet::new().get("Quiz #1"), None);
    }
}
