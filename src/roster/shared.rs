use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::sync::Mutex;

use crate::errors::RosterError;
use crate::intelligence::classifier::{self, PassingReport};
use crate::intelligence::prefix_sum::{self, ScorePrefixSums};
use crate::intelligence::scorer::{self, ScoreSummary};
use crate::models::{ScoreSheet, StudentRecord, UpsertOutcome};

use super::RosterStore;

/// Roster shared across request handlers.
///
/// Every operation takes the lock for its whole duration, so two upserts on
/// the same id can never interleave between the scan and the write.
#[derive(Clone, Default)]
pub struct SharedRoster {
    inner: Arc<Mutex<RosterStore>>,
}

impl SharedRoster {
    pub fn new(store: RosterStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub async fn upsert(&self, id: String, name: String, scores: ScoreSheet) -> UpsertOutcome {
        let mut store = self.inner.lock().await;
        store.upsert(id, name, scores)
    }

    pub async fn get(&self, id: &str) -> Result<StudentRecord, RosterError> {
        let store = self.inner.lock().await;
        store.find_by_id(id).into_result().cloned()
    }

    pub async fn list(&self) -> Vec<StudentRecord> {
        let store = self.inner.lock().await;
        store.iter().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn check_passing(
        &self,
        id: &str,
        threshold: Decimal,
    ) -> Result<PassingReport, RosterError> {
        let store = self.inner.lock().await;
        classifier::check_passing(&store, id, threshold)
    }

    /// Classification of every student, in roster order.
    pub async fn classify_all(&self, threshold: Decimal) -> Vec<Result<PassingReport, RosterError>> {
        let store = self.inner.lock().await;
        classifier::classify_roster(&store, threshold)
    }

    /// `Ok(None)` when the student has no scores.
    pub async fn summary(&self, id: &str) -> Result<Option<ScoreSummary>, RosterError> {
        let store = self.inner.lock().await;
        let record = store.find_by_id(id).into_result()?;
        scorer::score_summary(&record.scores).map_err(|reason| RosterError::InvalidState {
            id: record.id.clone(),
            reason: reason.into(),
        })
    }

    pub async fn prefix_sums(&self, id: &str) -> Result<ScorePrefixSums, RosterError> {
        let store = self.inner.lock().await;
        let record = store.find_by_id(id).into_result()?;
        prefix_sum::record_prefix_sum(record)
    }

    pub async fn range_sum(&self, id: &str, start: usize, end: usize) -> Result<Decimal, RosterError> {
        self.prefix_sums(id).await?.range_sum(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(values: &[i64]) -> ScoreSheet {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("Quiz #{}", i + 1), Decimal::from(*v)))
            .collect()
    }

    #[tokio::test]
    async fn test_concurrent_upserts_same_id_keep_one_record() {
        let roster = SharedRoster::default();

        let mut handles = Vec::new();
        for i in 0..20 {
            let r = roster.clone();
            handles.push(tokio::spawn(async move {
                r.upsert("1111111-1".into(), format!("Name {i}"), sheet(&[i])).await
            }));
        }
        for h in handles {
            h.await.unwrap();
        }

        assert_eq!(roster.len().await, 1);
    }

    #[tokio::test]
    async fn test_range_sum_through_shared_roster() {
        let roster = SharedRoster::default();
        roster.upsert("1".into(), "A".into(), sheet(&[10, 20, 30])).await;

        assert_eq!(roster.range_sum("1", 1, 2).await.unwrap(), Decimal::from(50));
        assert_eq!(
            roster.range_sum("1", 0, 3).await.unwrap_err(),
            RosterError::OutOfRange { start: 0, end: 3, len: 3 }
        );
        assert_eq!(
            roster.range_sum("2", 0, 0).await.unwrap_err(),
            RosterError::NotFound { id: "2".into() }
        );
    }
}
