//! Storage boundary for the matching engine.
//!
//! `MatchRepository` is injected into `MatchingService` so the engine can be
//! exercised without a live database. `PgMatchRepository` is the production
//! backend.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::models::assessment::{AssessmentRow, AssessmentUpsert, TherapistAssessment};
use crate::models::therapist::{TherapistProfile, TherapistRow};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                RepositoryError::Unavailable(e.to_string())
            }
            other => RepositoryError::Database(other),
        }
    }
}

#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Active therapist profiles ordered by name.
    async fn active_therapists(&self) -> Result<Vec<TherapistProfile>, RepositoryError>;

    /// Creates or replaces the user's assessment and refreshes `updated_at`.
    /// A `None` selection keeps whatever selection was already stored.
    async fn upsert_assessment(
        &self,
        assessment: AssessmentUpsert,
    ) -> Result<TherapistAssessment, RepositoryError>;

    /// Most recently updated assessment for the user.
    async fn latest_assessment(
        &self,
        user_id: Uuid,
    ) -> Result<Option<TherapistAssessment>, RepositoryError>;

    /// Records the user's chosen therapist. `None` when the user has no assessment.
    async fn select_therapist(
        &self,
        user_id: Uuid,
        therapist_id: Uuid,
    ) -> Result<Option<TherapistAssessment>, RepositoryError>;
}

#[derive(Clone)]
pub struct PgMatchRepository {
    pool: PgPool,
}

impl PgMatchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MatchRepository for PgMatchRepository {
    async fn active_therapists(&self) -> Result<Vec<TherapistProfile>, RepositoryError> {
        let rows = sqlx::query_as::<_, TherapistRow>(
            r#"
            SELECT id, name, title, description, approach, specialties,
                   communication_style, experience_level,
                   effectiveness_areas, personality_traits, is_active
            FROM therapist_personalities
            WHERE is_active = true
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let total = rows.len();
        let profiles: Vec<TherapistProfile> = rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                TherapistProfile::try_from(row)
                    .map_err(|e| warn!("Skipping malformed therapist {id}: {e}"))
                    .ok()
            })
            .collect();

        debug!("Loaded {} of {total} active therapist profiles", profiles.len());
        Ok(profiles)
    }

    async fn upsert_assessment(
        &self,
        assessment: AssessmentUpsert,
    ) -> Result<TherapistAssessment, RepositoryError> {
        let row = sqlx::query_as::<_, AssessmentRow>(
            r#"
            INSERT INTO therapist_assessments
                (id, user_id, responses, recommended_therapists, selected_therapist_id,
                 created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, now(), now())
            ON CONFLICT (user_id) DO UPDATE SET
                responses = EXCLUDED.responses,
                recommended_therapists = EXCLUDED.recommended_therapists,
                selected_therapist_id = COALESCE(
                    EXCLUDED.selected_therapist_id,
                    therapist_assessments.selected_therapist_id
                ),
                updated_at = now()
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(assessment.user_id)
        .bind(Json(&assessment.responses))
        .bind(Json(&assessment.recommended_therapists))
        .bind(assessment.selected_therapist_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn latest_assessment(
        &self,
        user_id: Uuid,
    ) -> Result<Option<TherapistAssessment>, RepositoryError> {
        let row = sqlx::query_as::<_, AssessmentRow>(
            r#"
            SELECT * FROM therapist_assessments
            WHERE user_id = $1
            ORDER BY updated_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn select_therapist(
        &self,
        user_id: Uuid,
        therapist_id: Uuid,
    ) -> Result<Option<TherapistAssessment>, RepositoryError> {
        let row = sqlx::query_as::<_, AssessmentRow>(
            r#"
            UPDATE therapist_assessments
            SET selected_therapist_id = $2, updated_at = now()
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(therapist_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }
}
