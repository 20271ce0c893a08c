//! Composes the repository and the scorer.
//!
//! Reads degrade to empty/`None` and log, so the UI can show an empty state.
//! Writes log and propagate, so a lost assessment surfaces as a retryable error.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::repository::{MatchRepository, RepositoryError};
use crate::matching::scoring::{CompatibilityScorer, Jitter, TherapistMatch};
use crate::models::assessment::{
    AnswerValue, AssessmentResponse, AssessmentUpsert, RecommendedTherapist, TherapistAssessment,
};
use crate::models::therapist::TherapistProfile;

/// Number of matches snapshotted into a saved assessment.
pub const RECOMMENDED_LIMIT: usize = 3;

#[derive(Clone)]
pub struct MatchingService {
    repository: Arc<dyn MatchRepository>,
    scorer: Arc<dyn CompatibilityScorer>,
    jitter_amplitude: f64,
}

impl MatchingService {
    pub fn new(
        repository: Arc<dyn MatchRepository>,
        scorer: Arc<dyn CompatibilityScorer>,
        jitter_amplitude: f64,
    ) -> Self {
        Self {
            repository,
            scorer,
            jitter_amplitude,
        }
    }

    /// Active therapists by name. Empty on storage failure.
    pub async fn list_active_therapists(&self) -> Vec<TherapistProfile> {
        match self.repository.active_therapists().await {
            Ok(therapists) => therapists,
            Err(e) => {
                error!("Failed to load therapist catalog: {e}");
                Vec::new()
            }
        }
    }

    pub fn compute_matches(
        &self,
        therapists: &[TherapistProfile],
        responses: &[AssessmentResponse],
        jitter: Jitter,
    ) -> Vec<TherapistMatch> {
        self.scorer.compute_matches(therapists, responses, jitter)
    }

    /// Upserts the user's assessment with the top matches. Errors propagate.
    pub async fn save_assessment(
        &self,
        user_id: Uuid,
        responses: &[AssessmentResponse],
        matches: &[TherapistMatch],
        selected_therapist_id: Option<Uuid>,
    ) -> Result<TherapistAssessment, RepositoryError> {
        let upsert = AssessmentUpsert {
            user_id,
            responses: flatten_responses(responses),
            recommended_therapists: matches
                .iter()
                .take(RECOMMENDED_LIMIT)
                .map(|m| RecommendedTherapist {
                    therapist_id: m.therapist.id,
                    compatibility_score: m.compatibility_score,
                    reasoning: m.reasoning.clone(),
                })
                .collect(),
            selected_therapist_id,
        };

        self.repository
            .upsert_assessment(upsert)
            .await
            .inspect(|saved| info!("Saved assessment {} for user {user_id}", saved.id))
            .inspect_err(|e| error!("Failed to save assessment for user {user_id}: {e}"))
    }

    /// Most recent assessment for the user. `None` when absent or on storage failure.
    pub async fn get_latest_assessment(&self, user_id: Uuid) -> Option<TherapistAssessment> {
        match self.repository.latest_assessment(user_id).await {
            Ok(found) => found,
            Err(e) => {
                error!("Failed to load latest assessment for user {user_id}: {e}");
                None
            }
        }
    }

    /// Loads the catalog, ranks it with a per-user jitter seed, and saves the result.
    pub async fn submit_assessment(
        &self,
        user_id: Uuid,
        responses: &[AssessmentResponse],
        selected_therapist_id: Option<Uuid>,
    ) -> Result<Vec<TherapistMatch>, AppError> {
        let therapists = self.list_active_therapists().await;
        if therapists.is_empty() {
            return Err(AppError::Unavailable(
                "No therapists are available right now".to_string(),
            ));
        }
        if let Some(id) = selected_therapist_id {
            ensure_in_catalog(&therapists, id)?;
        }

        let jitter = Jitter::for_user(user_id, self.jitter_amplitude);
        let matches = self.compute_matches(&therapists, responses, jitter);
        self.save_assessment(user_id, responses, &matches, selected_therapist_id)
            .await?;

        Ok(matches)
    }

    /// Commits the user to one therapist on their current assessment.
    pub async fn select_therapist(
        &self,
        user_id: Uuid,
        therapist_id: Uuid,
    ) -> Result<TherapistAssessment, AppError> {
        let therapists = self.list_active_therapists().await;
        if therapists.is_empty() {
            return Err(AppError::Unavailable(
                "Therapist catalog is temporarily unavailable".to_string(),
            ));
        }
        ensure_in_catalog(&therapists, therapist_id)?;

        let updated = self
            .repository
            .select_therapist(user_id, therapist_id)
            .await
            .inspect_err(|e| error!("Failed to record selection for user {user_id}: {e}"))?;

        updated.ok_or_else(|| AppError::NotFound(format!("No assessment found for user {user_id}")))
    }
}

fn ensure_in_catalog(therapists: &[TherapistProfile], therapist_id: Uuid) -> Result<(), AppError> {
    if therapists.iter().any(|t| t.id == therapist_id) {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Therapist {therapist_id} is not available"
        )))
    }
}

/// Answer list → map keyed by question id. A repeated question keeps its last answer.
pub fn flatten_responses(responses: &[AssessmentResponse]) -> BTreeMap<String, AnswerValue> {
    responses
        .iter()
        .map(|r| (r.question_id.clone(), r.value.clone()))
        .collect()
}
