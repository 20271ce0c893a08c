//! The fixed assessment questionnaire. Immutable at runtime; ids are unique.

use serde::Serialize;

pub const PRIMARY_CONCERN: &str = "primary_concern";
pub const COMMUNICATION_PREFERENCE: &str = "communication_preference";
pub const THERAPY_EXPERIENCE: &str = "therapy_experience";
pub const SUPPORT_STYLE: &str = "support_style";
pub const SESSION_GOALS: &str = "session_goals";
pub const STRESS_LEVEL: &str = "stress_level";
pub const MOTIVATION_LEVEL: &str = "motivation_level";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Scale,
    MultipleChoice,
    MultiSelect,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentQuestion {
    pub id: &'static str,
    pub question: &'static str,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(skip_serializing_if = "has_no_options")]
    pub options: &'static [&'static str],
    /// Inclusive (min, max) for scale questions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<(u8, u8)>,
    pub category: &'static str,
    /// Relative importance in the weighted response score.
    pub weight: f64,
}

fn has_no_options(options: &&'static [&'static str]) -> bool {
    options.is_empty()
}

pub const PREFER_NOT_TO_SAY: &str = "Prefer not to say";

static QUESTIONS: [AssessmentQuestion; 7] = [
    AssessmentQuestion {
        id: PRIMARY_CONCERN,
        question: "What is the main thing you would like support with right now?",
        question_type: QuestionType::MultipleChoice,
        options: &[
            "Anxiety",
            "Depression",
            "Stress",
            "Relationships",
            "Trauma Recovery",
            "Grief",
            "Self-esteem",
            "Life Transitions",
        ],
        scale: None,
        category: "concerns",
        weight: 3.0,
    },
    AssessmentQuestion {
        id: COMMUNICATION_PREFERENCE,
        question: "How would you like your therapist to communicate with you?",
        question_type: QuestionType::MultipleChoice,
        options: &[
            "Direct and straightforward",
            "Gentle and supportive",
            "Encouraging and motivating",
            "Analytical and logical",
            "Exploratory and curious",
        ],
        scale: None,
        category: "communication",
        weight: 2.5,
    },
    AssessmentQuestion {
        id: THERAPY_EXPERIENCE,
        question: "How much experience do you have with therapy?",
        question_type: QuestionType::MultipleChoice,
        options: &[
            "This is my first time",
            "I've had a few sessions",
            "I have extensive experience",
            PREFER_NOT_TO_SAY,
        ],
        scale: None,
        category: "background",
        weight: 1.5,
    },
    AssessmentQuestion {
        id: SUPPORT_STYLE,
        question: "Which kind of support sounds most helpful?",
        question_type: QuestionType::MultipleChoice,
        options: &[
            "Practical tools and techniques",
            "Understanding my thoughts and feelings",
            "Mindfulness and acceptance",
            "Exploring my past",
            "Focusing on solutions",
        ],
        scale: None,
        category: "approach",
        weight: 2.0,
    },
    AssessmentQuestion {
        id: SESSION_GOALS,
        question: "What would you like to get out of your sessions?",
        question_type: QuestionType::MultiSelect,
        options: &[
            "Anxiety reduction",
            "Mood improvement",
            "Stress management",
            "Relationship skills",
            "Trauma healing",
            "Self-confidence building",
            "Mindfulness practice",
            "Sleep improvement",
        ],
        scale: None,
        category: "goals",
        weight: 2.0,
    },
    AssessmentQuestion {
        id: STRESS_LEVEL,
        question: "On a scale of 1 to 10, how stressed have you felt this past week?",
        question_type: QuestionType::Scale,
        options: &[],
        scale: Some((1, 10)),
        category: "wellbeing",
        weight: 1.0,
    },
    AssessmentQuestion {
        id: MOTIVATION_LEVEL,
        question: "On a scale of 1 to 10, how motivated are you to make changes?",
        question_type: QuestionType::Scale,
        options: &[],
        scale: Some((1, 10)),
        category: "wellbeing",
        weight: 1.0,
    },
];

/// The full questionnaire in presentation order.
pub fn question_catalog() -> &'static [AssessmentQuestion] {
    &QUESTIONS
}

pub fn find_question(id: &str) -> Option<&'static AssessmentQuestion> {
    QUESTIONS.iter().find(|q| q.id == id)
}
