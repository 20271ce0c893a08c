use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use thiserror::Error;
use uuid::Uuid;

/// How a therapist persona talks to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationStyle {
    Direct,
    Supportive,
    Encouraging,
    Analytical,
    Exploratory,
}

impl CommunicationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommunicationStyle::Direct => "direct",
            CommunicationStyle::Supportive => "supportive",
            CommunicationStyle::Encouraging => "encouraging",
            CommunicationStyle::Analytical => "analytical",
            CommunicationStyle::Exploratory => "exploratory",
        }
    }
}

impl fmt::Display for CommunicationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommunicationStyle {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "direct" => Ok(CommunicationStyle::Direct),
            "supportive" => Ok(CommunicationStyle::Supportive),
            "encouraging" => Ok(CommunicationStyle::Encouraging),
            "analytical" => Ok(CommunicationStyle::Analytical),
            "exploratory" => Ok(CommunicationStyle::Exploratory),
            other => Err(ProfileError::UnknownCommunicationStyle(other.to_string())),
        }
    }
}

/// Experience level a persona is pitched at. Ordered from least to most experienced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    /// Number of steps between two levels (0, 1 or 2).
    pub fn distance(self, other: ExperienceLevel) -> u8 {
        (self as i8 - other as i8).unsigned_abs()
    }
}

impl FromStr for ExperienceLevel {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(ExperienceLevel::Beginner),
            "intermediate" => Ok(ExperienceLevel::Intermediate),
            "advanced" => Ok(ExperienceLevel::Advanced),
            other => Err(ProfileError::UnknownExperienceLevel(other.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("unknown communication style '{0}'")]
    UnknownCommunicationStyle(String),

    #[error("unknown experience level '{0}'")]
    UnknownExperienceLevel(String),

    #[error("active therapist has no specialties")]
    MissingSpecialties,
}

/// A therapist persona as used by the matching engine.
/// Read-only here; administrators maintain the catalog out of band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TherapistProfile {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub description: String,
    pub approach: String,
    pub specialties: Vec<String>,
    pub communication_style: CommunicationStyle,
    pub experience_level: ExperienceLevel,
    pub effectiveness_areas: BTreeMap<String, f64>,
    pub personality_traits: BTreeMap<String, f64>,
    pub is_active: bool,
}

impl TherapistProfile {
    /// Case-insensitive specialty lookup.
    pub fn has_specialty(&self, specialty: &str) -> bool {
        self.specialties
            .iter()
            .any(|s| s.eq_ignore_ascii_case(specialty.trim()))
    }
}

/// Raw `therapist_personalities` row.
#[derive(Debug, Clone, FromRow)]
pub struct TherapistRow {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub approach: Option<String>,
    pub specialties: Vec<String>,
    pub communication_style: String,
    pub experience_level: String,
    pub effectiveness_areas: Json<BTreeMap<String, f64>>,
    pub personality_traits: Json<BTreeMap<String, f64>>,
    pub is_active: bool,
}

impl TryFrom<TherapistRow> for TherapistProfile {
    type Error = ProfileError;

    fn try_from(row: TherapistRow) -> Result<Self, Self::Error> {
        if row.is_active && row.specialties.iter().all(|s| s.trim().is_empty()) {
            return Err(ProfileError::MissingSpecialties);
        }

        Ok(TherapistProfile {
            id: row.id,
            name: row.name,
            title: row.title,
            description: row.description.unwrap_or_default(),
            approach: row.approach.unwrap_or_default(),
            specialties: row.specialties,
            communication_style: row.communication_style.parse()?,
            experience_level: row.experience_level.parse()?,
            effectiveness_areas: clamp_unit(row.effectiveness_areas.0),
            personality_traits: clamp_unit(row.personality_traits.0),
            is_active: row.is_active,
        })
    }
}

/// Stored weights are expected in [0,1]; anything outside is pulled back in.
fn clamp_unit(values: BTreeMap<String, f64>) -> BTreeMap<String, f64> {
    values
        .into_iter()
        .map(|(k, v)| (k, if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }))
        .collect()
}
