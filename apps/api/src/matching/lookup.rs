//! Lookup tables that translate questionnaire answers into therapist attributes.
//!
//! These ship alongside the question catalog so that scoring never has to
//! pattern-match on free text. Any answer missing from a table is treated as
//! "no information" by the scorer.

use std::collections::HashMap;

use crate::models::therapist::{CommunicationStyle, ExperienceLevel};

/// How a `therapy_experience` answer maps onto the therapist's level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceAnswer {
    Level(ExperienceLevel),
    Undisclosed,
}

const PRACTICAL_TITLES: &[&str] = &[
    "Cognitive Behavioral Therapist",
    "Solution-Focused Coach",
    "Stress Management Specialist",
];
const INSIGHT_TITLES: &[&str] = &[
    "Cognitive Behavioral Therapist",
    "Person-Centered Counselor",
    "Psychodynamic Therapist",
];
const MINDFULNESS_TITLES: &[&str] = &["Mindfulness Coach", "Acceptance and Commitment Therapist"];
const PAST_TITLES: &[&str] = &["Psychodynamic Therapist", "Trauma-Informed Therapist"];
const SOLUTION_TITLES: &[&str] = &["Solution-Focused Coach", "Life Transitions Coach"];

#[derive(Debug, Clone)]
pub struct MatchingTables {
    communication: HashMap<&'static str, CommunicationStyle>,
    experience: HashMap<&'static str, ExperienceAnswer>,
    support_titles: HashMap<&'static str, &'static [&'static str]>,
}

impl Default for MatchingTables {
    fn default() -> Self {
        let communication = HashMap::from([
            ("Direct and straightforward", CommunicationStyle::Direct),
            ("Gentle and supportive", CommunicationStyle::Supportive),
            ("Encouraging and motivating", CommunicationStyle::Encouraging),
            ("Analytical and logical", CommunicationStyle::Analytical),
            ("Exploratory and curious", CommunicationStyle::Exploratory),
        ]);

        let experience = HashMap::from([
            (
                "This is my first time",
                ExperienceAnswer::Level(ExperienceLevel::Beginner),
            ),
            (
                "I've had a few sessions",
                ExperienceAnswer::Level(ExperienceLevel::Intermediate),
            ),
            (
                "I have extensive experience",
                ExperienceAnswer::Level(ExperienceLevel::Advanced),
            ),
            (super::questions::PREFER_NOT_TO_SAY, ExperienceAnswer::Undisclosed),
        ]);

        let support_titles = HashMap::from([
            ("Practical tools and techniques", PRACTICAL_TITLES),
            ("Understanding my thoughts and feelings", INSIGHT_TITLES),
            ("Mindfulness and acceptance", MINDFULNESS_TITLES),
            ("Exploring my past", PAST_TITLES),
            ("Focusing on solutions", SOLUTION_TITLES),
        ]);

        Self {
            communication,
            experience,
            support_titles,
        }
    }
}

impl MatchingTables {
    pub fn communication_style(&self, label: &str) -> Option<CommunicationStyle> {
        self.communication.get(label.trim()).copied()
    }

    pub fn experience(&self, answer: &str) -> Option<ExperienceAnswer> {
        self.experience.get(answer.trim()).copied()
    }

    /// Therapist titles known to deliver the given support approach.
    pub fn titles_for_support(&self, approach: &str) -> &'static [&'static str] {
        self.support_titles
            .get(approach.trim())
            .copied()
            .unwrap_or(&[])
    }
}

/// Lowercases and folds `-` and spaces into `_` so goal words compare against
/// effectiveness-area keys like `self_confidence`.
pub fn normalize_key(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c.is_whitespace() { '_' } else { c })
        .collect()
}

/// First word of a goal label, normalized for key comparison.
pub fn goal_keyword(goal: &str) -> Option<String> {
    goal.split_whitespace().next().map(normalize_key)
}
