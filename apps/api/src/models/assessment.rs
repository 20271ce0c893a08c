use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// A single answer. Shape depends on the question type:
/// scale → number, multiple_choice → string, multi_select → list of strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl AnswerValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AnswerValue::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResponse {
    pub question_id: String,
    pub value: AnswerValue,
}

#[cfg(test)]
impl AssessmentResponse {
    pub fn new(question_id: impl Into<String>, value: AnswerValue) -> Self {
        Self {
            question_id: question_id.into(),
            value,
        }
    }
}

/// Snapshot of one recommended match at save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedTherapist {
    pub therapist_id: Uuid,
    pub compatibility_score: f64,
    pub reasoning: Vec<String>,
}

/// The user's current assessment. At most one per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TherapistAssessment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub responses: BTreeMap<String, AnswerValue>,
    pub recommended_therapists: Vec<RecommendedTherapist>,
    pub selected_therapist_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields written by an upsert; id and timestamps are owned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentUpsert {
    pub user_id: Uuid,
    pub responses: BTreeMap<String, AnswerValue>,
    pub recommended_therapists: Vec<RecommendedTherapist>,
    pub selected_therapist_id: Option<Uuid>,
}

/// Raw `therapist_assessments` row.
#[derive(Debug, Clone, FromRow)]
pub struct AssessmentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub responses: Json<BTreeMap<String, AnswerValue>>,
    pub recommended_therapists: Json<Vec<RecommendedTherapist>>,
    pub selected_therapist_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AssessmentRow> for TherapistAssessment {
    fn from(row: AssessmentRow) -> Self {
        TherapistAssessment {
            id: row.id,
            user_id: row.user_id,
            responses: row.responses.0,
            recommended_therapists: row.recommended_therapists.0,
            selected_therapist_id: row.selected_therapist_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
