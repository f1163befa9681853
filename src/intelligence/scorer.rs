use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ScoreSheet;

/// Aggregate view of a student's score sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub total: Decimal,
    pub count: usize,
    pub average: Decimal,
    pub min: Decimal,
    pub max: Decimal,
}

/// Reason reported when a sheet has no scores to average.
pub const NO_SCORES: &str = "no assessment scores recorded";

/// Reason reported when a running total leaves the `Decimal` range.
pub const TOTAL_OVERFLOW: &str = "score total overflows";

/// Sum of the scores. `None` if the total does not fit in a `Decimal`.
pub fn checked_total(scores: &[Decimal]) -> Option<Decimal> {
    scores
        .iter()
        .try_fold(Decimal::ZERO, |total, score| total.checked_add(*score))
}

/// Arithmetic mean of the scores.
pub fn average(scores: &[Decimal]) -> Result<Decimal, &'static str> {
    if scores.is_empty() {
        return Err(NO_SCORES);
    }

    let total = checked_total(scores).ok_or(TOTAL_OVERFLOW)?;
    Ok(total / Decimal::from(scores.len() as i64))
}

/// Total, count, mean and extremes of a score sheet. `Ok(None)` when empty.
pub fn score_summary(sheet: &ScoreSheet) -> Result<Option<ScoreSummary>, &'static str> {
    let values = sheet.values();
    let (Some(min), Some(max)) = (values.iter().copied().min(), values.iter().copied().max()) else {
        return Ok(None);
    };

    let total = checked_total(&values).ok_or(TOTAL_OVERFLOW)?;

    Ok(Some(ScoreSummary {
        total,
        count: values.len(),
        average: total / Decimal::from(values.len() as i64),
        min,
        max,
    }))
}
