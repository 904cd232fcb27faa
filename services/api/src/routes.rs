use crate::infra::{AppState, SharedCalculator};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use employability::error::AppError;
use employability::profile::{NormalizationReport, ProfileImporter};
use employability::scoring::{CohortSummary, ScoreInsights, ScoreResult, StudentScore};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, info};

#[derive(Debug, Serialize)]
pub(crate) struct ScoreResponse {
    pub(crate) result: ScoreResult,
    pub(crate) insights: ScoreInsights,
    pub(crate) normalization: NormalizationReport,
}

#[derive(Debug, Serialize)]
pub(crate) struct CohortResponse {
    pub(crate) students: Vec<StudentScore>,
    pub(crate) summary: CohortSummary,
}

pub(crate) fn with_scoring_routes(calculator: SharedCalculator) -> Router {
    Router::new()
        .route("/api/v1/employability/score", post(score_endpoint))
        .route("/api/v1/employability/cohort", post(cohort_endpoint))
        .with_state(calculator)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn score_endpoint(
    State(calculator): State<SharedCalculator>,
    Json(document): Json<Value>,
) -> Json<ScoreResponse> {
    let scored = calculator.score_document(&document);
    debug!(
        score = scored.result.employability_score,
        dropped = scored.normalization.total_dropped(),
        "profile scored"
    );

    Json(ScoreResponse {
        insights: scored.result.insights(),
        result: scored.result,
        normalization: scored.normalization,
    })
}

pub(crate) async fn cohort_endpoint(
    State(calculator): State<SharedCalculator>,
    Json(body): Json<Value>,
) -> Result<Json<CohortResponse>, AppError> {
    let students = ProfileImporter::cohort_from_value(&body)?;
    let scores = calculator.score_cohort(&students);
    let summary = CohortSummary::from_results(&scores);
    info!(
        students = summary.students,
        average = summary.average_score,
        "cohort scored"
    );

    Ok(Json(CohortResponse {
        students: scores,
        summary,
    }))
}
