use std::collections::HashSet;

use axum::extract::{Path, Query, State};
use axum::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::intelligence::{PassingReport, ScorePrefixSums, ScoreSummary};
use crate::models::{AssessmentScore, ScoreSheet, StudentRecord, UpsertOutcome};
use crate::AppState;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

/// GET /api/students: All students in roster order.
pub async fn list(State(state): State<AppState>) -> Json<ApiResponse<Vec<StudentRecord>>> {
    ApiResponse::ok(state.roster.list().await)
}

/// GET /api/students/:id
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<StudentRecord>>, AppError> {
    let record = state.roster.get(&id).await?;
    Ok(ApiResponse::ok(record))
}

#[derive(Deserialize)]
pub struct UpsertStudentRequest {
    pub name: String,
    /// Ordered scores. Each label may appear once; repeats are rejected with 400.
    #[serde(default)]
    pub scores: Vec<AssessmentScore>,
}

fn into_score_sheet(scores: Vec<AssessmentScore>) -> Result<ScoreSheet, AppError> {
    let mut seen = HashSet::new();
    if let Some(dup) = scores.iter().find(|s| !seen.insert(s.label.as_str())) {
        return Err(AppError::BadRequest(format!(
            "duplicate assessment label: {}",
            dup.label
        )));
    }
    Ok(ScoreSheet::from(scores))
}

/// PUT /api/students/:id: Insert or fully replace a student.
pub async fn upsert(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpsertStudentRequest>,
) -> Result<Json<ApiResponse<UpsertOutcome>>, AppError> {
    if id.trim().is_empty() {
        return Err(AppError::BadRequest("student id must not be empty".into()));
    }

    let scores = into_score_sheet(body.scores)?;
    let outcome = state.roster.upsert(id, body.name, scores).await;
    tracing::info!(student_id = %outcome.id(), created = outcome.is_created(), "{outcome}");
    Ok(ApiResponse::ok(outcome))
}

#[derive(Deserialize)]
pub struct PassingQuery {
    pub threshold: Option<Decimal>,
}

/// GET /api/students/:id/passing?threshold=
pub async fn passing(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<PassingQuery>,
) -> Result<Json<ApiResponse<PassingReport>>, AppError> {
    let threshold = query.threshold.unwrap_or(state.config.passing_threshold);
    let report = state.roster.check_passing(&id, threshold).await?;
    Ok(ApiResponse::ok(report))
}

/// GET /api/students/:id/summary: `data` is null when the student has no scores.
pub async fn summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Option<ScoreSummary>>>, AppError> {
    let summary = state.roster.summary(&id).await?;
    Ok(ApiResponse::ok(summary))
}

/// GET /api/students/:id/prefix-sum
pub async fn prefix_sum(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ScorePrefixSums>>, AppError> {
    let sums = state.roster.prefix_sums(&id).await?;
    Ok(ApiResponse::ok(sums))
}

#[derive(Deserialize)]
pub struct RangeQuery {
    pub start: usize,
    pub end: usize,
}

#[derive(Serialize)]
pub struct RangeSumResponse {
    pub student_id: String,
    pub start: usize,
    pub end: usize,
    pub total: Decimal,
}

/// GET /api/students/:id/range-sum?start=&end=: Inclusive score total.
pub async fn range_sum(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<ApiResponse<RangeSumResponse>>, AppError> {
    let total = state.roster.range_sum(&id, query.start, query.end).await?;
    Ok(ApiResponse::ok(RangeSumResponse {
        student_id: id,
        start: query.start,
        end: query.end,
        total,
    }))
}
