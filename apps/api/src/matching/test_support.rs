//! Shared fixtures for matching tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::matching::repository::{MatchRepository, RepositoryError};
use crate::models::assessment::{AssessmentUpsert, TherapistAssessment};
use crate::models::therapist::{CommunicationStyle, ExperienceLevel, TherapistProfile};

pub fn therapist(name: &str, specialties: &[&str], style: CommunicationStyle) -> TherapistProfile {
    TherapistProfile {
        id: Uuid::new_v4(),
        name: name.to_string(),
        title: "Cognitive Behavioral Therapist".to_string(),
        description: format!("{name} helps people build practical coping skills."),
        approach: "Structured, skills-based sessions".to_string(),
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        communication_style: style,
        experience_level: ExperienceLevel::Intermediate,
        effectiveness_areas: BTreeMap::from([
            ("anxiety_management".to_string(), 0.9),
            ("stress_reduction".to_string(), 0.8),
        ]),
        personality_traits: BTreeMap::from([
            ("empathetic".to_string(), 0.9),
            ("patient".to_string(), 0.8),
        ]),
        is_active: true,
    }
}

/// In-process repository with switchable failures.
#[derive(Default)]
pub struct MemoryRepository {
    therapists: Mutex<Vec<TherapistProfile>>,
    assessments: Mutex<Vec<TherapistAssessment>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryRepository {
    pub fn with_therapists(therapists: Vec<TherapistProfile>) -> Self {
        let repo = Self::default();
        *repo.therapists.lock().unwrap() = therapists;
        repo
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn stored(&self) -> Vec<TherapistAssessment> {
        self.assessments.lock().unwrap().clone()
    }

    fn check(&self, flag: &AtomicBool) -> Result<(), RepositoryError> {
        if flag.load(Ordering::SeqCst) {
            Err(RepositoryError::Unavailable("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl MatchRepository for MemoryRepository {
    async fn active_therapists(&self) -> Result<Vec<TherapistProfile>, RepositoryError> {
        self.check(&self.fail_reads)?;
        let mut active: Vec<_> = self
            .therapists
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.is_active)
            .cloned()
            .collect();
        active.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(active)
    }

    async fn upsert_assessment(
        &self,
        assessment: AssessmentUpsert,
    ) -> Result<TherapistAssessment, RepositoryError> {
        self.check(&self.fail_writes)?;
        let now = Utc::now();
        let mut stored = self.assessments.lock().unwrap();

        if let Some(existing) = stored.iter_mut().find(|a| a.user_id == assessment.user_id) {
            existing.responses = assessment.responses;
            existing.recommended_therapists = assessment.recommended_therapists;
            if assessment.selected_therapist_id.is_some() {
                existing.selected_therapist_id = assessment.selected_therapist_id;
            }
            existing.updated_at = now;
            return Ok(existing.clone());
        }

        let record = TherapistAssessment {
            id: Uuid::new_v4(),
            user_id: assessment.user_id,
            responses: assessment.responses,
            recommended_therapists: assessment.recommended_therapists,
            selected_therapist_id: assessment.selected_therapist_id,
            created_at: now,
            updated_at: now,
        };
        stored.push(record.clone());
        Ok(record)
    }

    async fn latest_assessment(
        &self,
        user_id: Uuid,
    ) -> Result<Option<TherapistAssessment>, RepositoryError> {
        self.check(&self.fail_reads)?;
        Ok(self
            .assessments
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.user_id == user_id)
            .max_by_key(|a| a.updated_at)
            .cloned())
    }

    async fn select_therapist(
        &self,
        user_id: Uuid,
        therapist_id: Uuid,
    ) -> Result<Option<TherapistAssessment>, RepositoryError> {
        self.check(&self.fail_writes)?;
        let mut stored = self.assessments.lock().unwrap();
        Ok(stored
            .iter_mut()
            .find(|a| a.user_id == user_id)
            .map(|existing| {
                existing.selected_therapist_id = Some(therapist_id);
                existing.updated_at = Utc::now();
                existing.clone()
            }))
    }
}
