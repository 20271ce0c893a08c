//! Axum route handlers for the Matching API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::questions::{question_catalog, AssessmentQuestion};
use crate::matching::scoring::{Jitter, TherapistMatch};
use crate::models::assessment::{AssessmentResponse, TherapistAssessment};
use crate::models::therapist::TherapistProfile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: &'static [AssessmentQuestion],
}

#[derive(Debug, Serialize)]
pub struct TherapistsResponse {
    pub therapists: Vec<TherapistProfile>,
}

#[derive(Debug, Deserialize)]
pub struct MatchPreviewRequest {
    #[serde(default)]
    pub responses: Vec<AssessmentResponse>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitAssessmentRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub responses: Vec<AssessmentResponse>,
    #[serde(default)]
    pub selected_therapist_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct MatchesResponse {
    pub matches: Vec<TherapistMatch>,
}

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct SelectTherapistRequest {
    pub user_id: Uuid,
    pub therapist_id: Uuid,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/assessment/questions
pub async fn handle_get_questions() -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        questions: question_catalog(),
    })
}

/// GET /api/v1/therapists
///
/// An empty list means the catalog is temporarily unavailable.
pub async fn handle_list_therapists(State(state): State<AppState>) -> Json<TherapistsResponse> {
    Json(TherapistsResponse {
        therapists: state.matching.list_active_therapists().await,
    })
}

/// POST /api/v1/matches
///
/// Ranks the catalog without persisting anything. No jitter, so previews are stable.
pub async fn handle_preview_matches(
    State(state): State<AppState>,
    Json(request): Json<MatchPreviewRequest>,
) -> Json<MatchesResponse> {
    let therapists = state.matching.list_active_therapists().await;
    let matches = state
        .matching
        .compute_matches(&therapists, &request.responses, Jitter::Disabled);
    Json(MatchesResponse { matches })
}

/// POST /api/v1/assessments
///
/// Ranks the catalog for the user and saves the assessment with its top matches.
pub async fn handle_submit_assessment(
    State(state): State<AppState>,
    Json(request): Json<SubmitAssessmentRequest>,
) -> Result<Json<MatchesResponse>, AppError> {
    let matches = state
        .matching
        .submit_assessment(
            request.user_id,
            &request.responses,
            request.selected_therapist_id,
        )
        .await?;
    Ok(Json(MatchesResponse { matches }))
}

/// GET /api/v1/assessments/latest
pub async fn handle_get_latest_assessment(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<TherapistAssessment>, AppError> {
    state
        .matching
        .get_latest_assessment(params.user_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No assessment found for user {}", params.user_id)))
}

/// PUT /api/v1/assessments/selection
///
/// The therapist must be in the active catalog.
pub async fn handle_select_therapist(
    State(state): State<AppState>,
    Json(request): Json<SelectTherapistRequest>,
) -> Result<Json<TherapistAssessment>, AppError> {
    let updated = state
        .matching
        .select_therapist(request.user_id, request.therapist_id)
        .await?;
    Ok(Json(updated))
}
