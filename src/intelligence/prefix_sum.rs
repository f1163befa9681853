use metrics::counter;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::RosterError;
use crate::models::StudentRecord;

use super::scorer::TOTAL_OVERFLOW;

/// Prefix sums of a student's scores, paired with the assessment labels
/// they were taken from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorePrefixSums {
    pub student_id: String,
    pub labels: Vec<String>,
    pub prefix_sums: Vec<Decimal>,
}

/// `out[i] = values[0] + ... + values[i]`. Empty input gives empty output.
///
/// Returns `None` if a running total does not fit in a `Decimal`.
pub fn compute_prefix_sum(values: &[Decimal]) -> Option<Vec<Decimal>> {
    let mut running = Decimal::ZERO;
    values
        .iter()
        .map(|v| {
            running = running.checked_add(*v)?;
            Some(running)
        })
        .collect()
}

/// Sum of the source values in `start..=end`, using two prefix-sum lookups.
///
/// Returns `OutOfRange` when `end` is past the sequence or `start > end`.
/// A sub-range total that does not fit in a `Decimal` (possible when
/// negative and positive scores mix) is `InvalidState` with an empty id;
/// `ScorePrefixSums::range_sum` fills in the student.
pub fn range_sum(prefix_sum: &[Decimal], start: usize, end: usize) -> Result<Decimal, RosterError> {
    counter!("range_queries_total").increment(1);

    let len = prefix_sum.len();
    if end >= len || start > end {
        return Err(RosterError::OutOfRange { start, end, len });
    }

    if start == 0 {
        return Ok(prefix_sum[end]);
    }

    prefix_sum[end]
        .checked_sub(prefix_sum[start - 1])
        .ok_or_else(|| RosterError::InvalidState {
            id: String::new(),
            reason: TOTAL_OVERFLOW.into(),
        })
}

impl ScorePrefixSums {
    /// Range total over this student's scores.
    pub fn range_sum(&self, start: usize, end: usize) -> Result<Decimal, RosterError> {
        range_sum(&self.prefix_sums, start, end).map_err(|e| match e {
            RosterError::InvalidState { reason, .. } => RosterError::InvalidState {
                id: self.student_id.clone(),
                reason,
            },
            other => other,
        })
    }
}

/// Prefix sums over a record's scores, in the sheet's declared order.
pub fn record_prefix_sum(record: &StudentRecord) -> Result<ScorePrefixSums, RosterError> {
    let prefix_sums =
        compute_prefix_sum(&record.scores.values()).ok_or_else(|| RosterError::InvalidState {
            id: record.id.clone(),
            reason: TOTAL_OVERFLOW.into(),
        })?;

    Ok(ScorePrefixSums {
        student_id: record.id.clone(),
        labels: record.scores.labels(),
        prefix_sums,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
