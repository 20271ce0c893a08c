//! Compatibility scoring — ranks therapist profiles against one assessment.
//!
//! Default: `WeightedCompatibilityScorer` (pure, no I/O, deterministic once the
//! jitter source is fixed).
//!
//! Score per therapist:
//! 1. baseline (0.6)
//! 2. weighted response score: Σ(question score × weight) / Σ(weight), 0.5 when
//!    no recognized question was answered
//! 3. personality bonus in [0.1, 0.15] from the average trait strength
//! 4. jitter drawn from an explicit, seedable source
//! 5. clamp(baseline + weighted × 0.3 + bonus + jitter) to [0.65, 0.98], 2 decimals

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::lookup::{goal_keyword, normalize_key, ExperienceAnswer, MatchingTables};
use crate::matching::questions::{
    find_question, AssessmentQuestion, COMMUNICATION_PREFERENCE, MOTIVATION_LEVEL,
    PRIMARY_CONCERN, SESSION_GOALS, STRESS_LEVEL, SUPPORT_STYLE, THERAPY_EXPERIENCE,
};
use crate::matching::reasoning::{generate_reasoning, identify_strengths};
use crate::models::assessment::AssessmentResponse;
use crate::models::therapist::TherapistProfile;

// ────────────────────────────────────────────────────────────────────────────
// Parameters and output models
// ────────────────────────────────────────────────────────────────────────────

/// Tuning constants for the final score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringParams {
    pub baseline: f64,
    pub response_weight: f64,
    pub neutral_score: f64,
    pub bonus_floor: f64,
    pub bonus_ceiling: f64,
    /// Average trait strength that earns exactly `bonus_floor`.
    pub bonus_pivot: f64,
    pub score_floor: f64,
    pub score_ceiling: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            baseline: 0.6,
            response_weight: 0.3,
            neutral_score: 0.5,
            bonus_floor: 0.1,
            bonus_ceiling: 0.15,
            bonus_pivot: 0.7,
            score_floor: 0.65,
            score_ceiling: 0.98,
        }
    }
}

/// Noise added to each therapist's score.
///
/// `Seeded` draws one value per active therapist, in catalog order, from a
/// `StdRng` seeded with `seed`, so identical inputs always rank identically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Jitter {
    Disabled,
    Seeded { seed: u64, amplitude: f64 },
}

impl Jitter {
    /// Stable per-user seed so a resubmitted assessment keeps its ordering.
    pub fn for_user(user_id: Uuid, amplitude: f64) -> Self {
        let bits = user_id.as_u128();
        Jitter::Seeded {
            seed: (bits as u64) ^ ((bits >> 64) as u64),
            amplitude,
        }
    }

    fn sampler(self) -> JitterSampler {
        match self {
            Jitter::Seeded { seed, amplitude } if amplitude.is_finite() && amplitude > 0.0 => {
                JitterSampler {
                    rng: Some(StdRng::seed_from_u64(seed)),
                    amplitude,
                }
            }
            _ => JitterSampler {
                rng: None,
                amplitude: 0.0,
            },
        }
    }
}

struct JitterSampler {
    rng: Option<StdRng>,
    amplitude: f64,
}

impl JitterSampler {
    fn next(&mut self) -> f64 {
        match self.rng.as_mut() {
            Some(rng) => rng.gen_range(-self.amplitude..=self.amplitude),
            None => 0.0,
        }
    }
}

/// The individual terms that produced a compatibility score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub baseline: f64,
    pub weighted_score: f64,
    pub personality_bonus: f64,
    pub jitter: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TherapistMatch {
    pub therapist: TherapistProfile,
    pub compatibility_score: f64, // 0.65 – 0.98, 2 decimals
    pub reasoning: Vec<String>,
    pub strengths: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Ranks a therapist catalog against one set of responses.
///
/// Carried by `MatchingService` as `Arc<dyn CompatibilityScorer>`.
pub trait CompatibilityScorer: Send + Sync {
    fn compute_matches(
        &self,
        therapists: &[TherapistProfile],
        responses: &[AssessmentResponse],
        jitter: Jitter,
    ) -> Vec<TherapistMatch>;
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedCompatibilityScorer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct WeightedCompatibilityScorer {
    pub params: ScoringParams,
    pub tables: MatchingTables,
}

impl CompatibilityScorer for WeightedCompatibilityScorer {
    fn compute_matches(
        &self,
        therapists: &[TherapistProfile],
        responses: &[AssessmentResponse],
        jitter: Jitter,
    ) -> Vec<TherapistMatch> {
        let mut sampler = jitter.sampler();
        let responses = latest_answers(responses);
        let responses = responses.as_slice();

        let mut matches: Vec<TherapistMatch> = therapists
            .iter()
            .filter(|t| t.is_active)
            .map(|therapist| {
                let breakdown = ScoreBreakdown {
                    baseline: self.params.baseline,
                    weighted_score: self.weighted_score(therapist, responses),
                    personality_bonus: self.personality_bonus(therapist),
                    jitter: sampler.next(),
                };
                TherapistMatch {
                    therapist: therapist.clone(),
                    compatibility_score: self.final_score(&breakdown),
                    reasoning: generate_reasoning(therapist, responses, &self.tables),
                    strengths: identify_strengths(therapist),
                    breakdown,
                }
            })
            .collect();

        // sort_by is stable: ties keep catalog order
        matches.sort_by(|a, b| b.compatibility_score.total_cmp(&a.compatibility_score));
        matches
    }
}

/// One answer per question id, keeping the last one given. Order follows the
/// first time each question id appears.
pub fn latest_answers(responses: &[AssessmentResponse]) -> Vec<AssessmentResponse> {
    let mut collapsed: Vec<AssessmentResponse> = Vec::with_capacity(responses.len());
    for response in responses {
        match collapsed
            .iter_mut()
            .find(|r| r.question_id == response.question_id)
        {
            Some(existing) => existing.value = response.value.clone(),
            None => collapsed.push(response.clone()),
        }
    }
    collapsed
}

impl WeightedCompatibilityScorer {
    /// Weighted average of per-question scores over recognized questions.
    pub fn weighted_score(
        &self,
        therapist: &TherapistProfile,
        responses: &[AssessmentResponse],
    ) -> f64 {
        let mut total_score = 0.0_f64;
        let mut total_weight = 0.0_f64;

        for response in responses {
            let Some(question) = find_question(&response.question_id) else {
                continue;
            };
            total_score += self.score_question(therapist, question, response) * question.weight;
            total_weight += question.weight;
        }

        if total_weight > 0.0 {
            total_score / total_weight
        } else {
            self.params.neutral_score
        }
    }

    /// Per-question match score in [0, 1].
    pub fn score_question(
        &self,
        therapist: &TherapistProfile,
        question: &AssessmentQuestion,
        response: &AssessmentResponse,
    ) -> f64 {
        let neutral = self.params.neutral_score;
        let value = &response.value;

        match question.id {
            PRIMARY_CONCERN => match value.as_text() {
                Some(concern) if therapist.has_specialty(concern) => 1.0,
                Some(_) => 0.3,
                None => neutral,
            },
            COMMUNICATION_PREFERENCE => match value.as_text() {
                Some(label) => match self.tables.communication_style(label) {
                    Some(style) if style == therapist.communication_style => 1.0,
                    _ => 0.2,
                },
                None => neutral,
            },
            THERAPY_EXPERIENCE => match value.as_text() {
                Some(answer) => match self.tables.experience(answer) {
                    Some(ExperienceAnswer::Level(level)) => {
                        match level.distance(therapist.experience_level) {
                            0 => 1.0,
                            1 => 0.8,
                            _ => 0.7,
                        }
                    }
                    Some(ExperienceAnswer::Undisclosed) | None => 0.8,
                },
                None => neutral,
            },
            SUPPORT_STYLE => match value.as_text() {
                Some(approach) => {
                    let titles = self.tables.titles_for_support(approach);
                    if titles.iter().any(|t| t.eq_ignore_ascii_case(&therapist.title)) {
                        1.0
                    } else {
                        0.3
                    }
                }
                None => neutral,
            },
            SESSION_GOALS => match value.as_list() {
                Some([]) => neutral,
                Some(goals) => {
                    overlapping_goals(therapist, goals).len() as f64 / goals.len() as f64
                }
                None => neutral,
            },
            STRESS_LEVEL => match value.as_number() {
                Some(level) if level > 6.0 && therapist.has_specialty("Stress") => 1.0,
                Some(_) => 0.7,
                None => neutral,
            },
            MOTIVATION_LEVEL => match value.as_number() {
                Some(level) if level > 5.0 => 0.8,
                Some(_) => 0.6,
                None => neutral,
            },
            _ => neutral,
        }
    }

    /// Average trait strength mapped linearly onto [bonus_floor, bonus_ceiling].
    pub fn personality_bonus(&self, therapist: &TherapistProfile) -> f64 {
        let p = &self.params;
        let traits = &therapist.personality_traits;
        if traits.is_empty() {
            return p.bonus_floor;
        }
        let average = traits.values().sum::<f64>() / traits.len() as f64;
        let slope = (p.bonus_ceiling - p.bonus_floor) / (1.0 - p.bonus_pivot);
        (p.bonus_floor + (average - p.bonus_pivot) * slope).clamp(p.bonus_floor, p.bonus_ceiling)
    }

    fn final_score(&self, breakdown: &ScoreBreakdown) -> f64 {
        let p = &self.params;
        let raw = breakdown.baseline
            + breakdown.weighted_score * p.response_weight
            + breakdown.personality_bonus
            + breakdown.jitter;
        round2(raw.clamp(p.score_floor, p.score_ceiling))
    }
}

/// Goals whose first word appears in any of the therapist's effectiveness areas.
pub fn overlapping_goals<'a>(therapist: &TherapistProfile, goals: &'a [String]) -> Vec<&'a String> {
    let area_keys: Vec<String> = therapist
        .effectiveness_areas
        .keys()
        .map(|k| normalize_key(k))
        .collect();

    goals
        .iter()
        .filter(|goal| match goal_keyword(goal) {
            Some(word) => area_keys.iter().any(|key| key.contains(&word)),
            None => false,
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::test_support::therapist;
    use crate::models::assessment::AnswerValue;
    use crate::models::therapist::{CommunicationStyle, ExperienceLevel};

    fn text(id: &str, value: &str) -> AssessmentResponse {
        AssessmentResponse::new(id, AnswerValue::Text(value.to_string()))
    }

    fn number(id: &str, value: f64) -> AssessmentResponse {
        AssessmentResponse::new(id, AnswerValue::Number(value))
    }

    fn list(id: &str, values: &[&str]) -> AssessmentResponse {
        AssessmentResponse::new(
            id,
            AnswerValue::List(values.iter().map(|v| v.to_string()).collect()),
        )
    }

    fn score(
        scorer: &WeightedCompatibilityScorer,
        t: &TherapistProfile,
        response: &AssessmentResponse,
    ) -> f64 {
        let question = find_question(&response.question_id).unwrap();
        scorer.score_question(t, question, response)
    }

    #[test]
    fn test_repeated_question_uses_last_answer() {
        let scorer = WeightedCompatibilityScorer::default();
        let catalog = vec![therapist("Grief", &["Grief"], CommunicationStyle::Supportive)];

        let repeated = scorer.compute_matches(
            &catalog,
            &[text(PRIMARY_CONCERN, "Grief"), text(PRIMARY_CONCERN, "Anxiety")],
            Jitter::Disabled,
        );
        let single =
            scorer.compute_matches(&catalog, &[text(PRIMARY_CONCERN, "Anxiety")], Jitter::Disabled);

        assert!((repeated[0].breakdown.weighted_score - 0.3).abs() < 1e-9);
        assert!(repeated[0].reasoning.is_empty());
        assert_eq!(repeated[0].compatibility_score, single[0].compatibility_score);
        assert_eq!(repeated[0].reasoning, single[0].reasoning);
    }

    #[test]
    fn test_latest_answers_keeps_first_position() {
        let collapsed = latest_answers(&[
            text(PRIMARY_CONCERN, "Grief"),
            number(STRESS_LEVEL, 4.0),
            text(PRIMARY_CONCERN, "Anxiety"),
        ]);
        assert_eq!(collapsed.len(), 2);
        assert_eq!(collapsed[0].question_id, PRIMARY_CONCERN);
        assert_eq!(collapsed[0].value.as_text(), Some("Anxiety"));
        assert_eq!(collapsed[1].question_id, STRESS_LEVEL);
    }

    #[test]
    fn test_primary_concern_rewards_specialty() {
        let scorer = WeightedCompatibilityScorer::default();
        let t = therapist("A", &["Anxiety"], CommunicationStyle::Supportive);
        assert_eq!(score(&scorer, &t, &text(PRIMARY_CONCERN, "Anxiety")), 1.0);
        assert_eq!(score(&scorer, &t, &text(PRIMARY_CONCERN, "Grief")), 0.3);
    }

    #[test]
    fn test_communication_preference_exact_match_only() {
        let scorer = WeightedCompatibilityScorer::default();
        let t = therapist("A", &["Anxiety"], CommunicationStyle::Supportive);
        let gentle = text(COMMUNICATION_PREFERENCE, "Gentle and supportive");
        let direct = text(COMMUNICATION_PREFERENCE, "Direct and straightforward");
        let unknown = text(COMMUNICATION_PREFERENCE, "Silent treatment");
        assert_eq!(score(&scorer, &t, &gentle), 1.0);
        assert_eq!(score(&scorer, &t, &direct), 0.2);
        assert_eq!(score(&scorer, &t, &unknown), 0.2);
    }

    #[test]
    fn test_therapy_experience_is_never_harsh() {
        let scorer = WeightedCompatibilityScorer::default();
        let mut t = therapist("A", &["Anxiety"], CommunicationStyle::Direct);
        t.experience_level = ExperienceLevel::Beginner;

        assert_eq!(score(&scorer, &t, &text(THERAPY_EXPERIENCE, "This is my first time")), 1.0);
        assert_eq!(score(&scorer, &t, &text(THERAPY_EXPERIENCE, "I've had a few sessions")), 0.8);
        assert_eq!(
            score(&scorer, &t, &text(THERAPY_EXPERIENCE, "I have extensive experience")),
            0.7
        );
        assert_eq!(score(&scorer, &t, &text(THERAPY_EXPERIENCE, "Prefer not to say")), 0.8);
    }

    #[test]
    fn test_support_style_uses_title_whitelist() {
        let scorer = WeightedCompatibilityScorer::default();
        let mut t = therapist("A", &["Anxiety"], CommunicationStyle::Direct);
        t.title = "Mindfulness Coach".to_string();
        assert_eq!(score(&scorer, &t, &text(SUPPORT_STYLE, "Mindfulness and acceptance")), 1.0);
        assert_eq!(score(&scorer, &t, &text(SUPPORT_STYLE, "Exploring my past")), 0.3);
    }

    #[test]
    fn test_session_goals_fraction() {
        let scorer = WeightedCompatibilityScorer::default();
        let t = therapist("A", &["Anxiety"], CommunicationStyle::Direct);
        // fixture areas: anxiety_management, stress_reduction
        let goals = list(SESSION_GOALS, &["Anxiety reduction", "Trauma healing"]);
        assert!((score(&scorer, &t, &goals) - 0.5).abs() < 1e-9);

        let all = list(SESSION_GOALS, &["Anxiety reduction", "Stress management"]);
        assert_eq!(score(&scorer, &t, &all), 1.0);

        let none = list(SESSION_GOALS, &[]);
        assert_eq!(score(&scorer, &t, &none), 0.5);
    }

    #[test]
    fn test_scale_questions() {
        let scorer = WeightedCompatibilityScorer::default();
        let stress = therapist("S", &["Stress"], CommunicationStyle::Direct);
        let other = therapist("O", &["Grief"], CommunicationStyle::Direct);

        assert_eq!(score(&scorer, &stress, &number(STRESS_LEVEL, 8.0)), 1.0);
        assert_eq!(score(&scorer, &stress, &number(STRESS_LEVEL, 6.0)), 0.7);
        assert_eq!(score(&scorer, &other, &number(STRESS_LEVEL, 9.0)), 0.7);
        assert_eq!(score(&scorer, &other, &number(MOTIVATION_LEVEL, 6.0)), 0.8);
        assert_eq!(score(&scorer, &other, &number(MOTIVATION_LEVEL, 5.0)), 0.6);
    }

    #[test]
    fn test_wrong_answer_shape_is_neutral() {
        let scorer = WeightedCompatibilityScorer::default();
        let t = therapist("A", &["Anxiety"], CommunicationStyle::Direct);
        assert_eq!(score(&scorer, &t, &number(PRIMARY_CONCERN, 3.0)), 0.5);
        assert_eq!(score(&scorer, &t, &text(STRESS_LEVEL, "very")), 0.5);
    }

    #[test]
    fn test_empty_responses_use_neutral_weighted_score() {
        let scorer = WeightedCompatibilityScorer::default();
        let catalog = vec![
            therapist("A", &["Anxiety"], CommunicationStyle::Supportive),
            therapist("B", &["Grief"], CommunicationStyle::Direct),
        ];
        let matches = scorer.compute_matches(&catalog, &[], Jitter::Disabled);
        assert_eq!(matches.len(), 2);
        for m in &matches {
            assert_eq!(m.breakdown.weighted_score, 0.5);
        }
    }

    #[test]
    fn test_inactive_therapists_are_excluded() {
        let scorer = WeightedCompatibilityScorer::default();
        let mut hidden = therapist("Hidden", &["Anxiety"], CommunicationStyle::Direct);
        hidden.is_active = false;
        let catalog = vec![hidden, therapist("B", &["Grief"], CommunicationStyle::Direct)];
        let matches = scorer.compute_matches(&catalog, &[], Jitter::Disabled);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].therapist.name, "B");
    }

    #[test]
    fn test_scores_stay_within_bounds() {
        let scorer = WeightedCompatibilityScorer::default();
        let mut weak = therapist("Weak", &["Grief"], CommunicationStyle::Analytical);
        weak.personality_traits.clear();
        let strong = therapist("Strong", &["Anxiety", "Stress"], CommunicationStyle::Supportive);
        let catalog = vec![weak, strong];
        let responses = vec![
            text(PRIMARY_CONCERN, "Anxiety"),
            text(COMMUNICATION_PREFERENCE, "Gentle and supportive"),
            number(STRESS_LEVEL, 9.0),
        ];

        for seed in 0..50 {
            let jitter = Jitter::Seeded {
                seed,
                amplitude: 0.05,
            };
            for m in scorer.compute_matches(&catalog, &responses, jitter) {
                assert!(
                    (0.65..=0.98).contains(&m.compatibility_score),
                    "score {} out of range",
                    m.compatibility_score
                );
                assert!(m.breakdown.jitter.abs() <= 0.05);
            }
        }
    }

    #[test]
    fn test_score_is_rounded_to_two_decimals() {
        let scorer = WeightedCompatibilityScorer::default();
        let catalog = vec![therapist("A", &["Anxiety"], CommunicationStyle::Direct)];
        let jitter = Jitter::Seeded {
            seed: 7,
            amplitude: 0.05,
        };
        let m = &scorer.compute_matches(&catalog, &[], jitter)[0];
        let scaled = m.compatibility_score * 100.0;
        assert!((scaled - scaled.round()).abs() < 1e-9);
    }

    #[test]
    fn test_anxiety_supportive_scenario_ranks_a_first() {
        let scorer = WeightedCompatibilityScorer::default();
        let b = therapist("B", &["Trauma Recovery"], CommunicationStyle::Direct);
        let a = therapist("A", &["Anxiety"], CommunicationStyle::Supportive);
        let responses = vec![
            text(PRIMARY_CONCERN, "Anxiety"),
            text(COMMUNICATION_PREFERENCE, "Gentle and supportive"),
        ];

        let matches = scorer.compute_matches(&[b, a], &responses, Jitter::Disabled);
        assert_eq!(matches[0].therapist.name, "A");
        assert!(matches[0].breakdown.weighted_score > matches[1].breakdown.weighted_score);
    }

    #[test]
    fn test_specialty_match_is_monotonic() {
        let scorer = WeightedCompatibilityScorer::default();
        let with = therapist("With", &["Grief"], CommunicationStyle::Direct);
        let without = therapist("Without", &["Anxiety"], CommunicationStyle::Direct);
        let responses = vec![
            text(PRIMARY_CONCERN, "Grief"),
            text(COMMUNICATION_PREFERENCE, "Exploratory and curious"),
            number(MOTIVATION_LEVEL, 1.0),
        ];

        let matches = scorer.compute_matches(&[without, with], &responses, Jitter::Disabled);
        assert_eq!(matches[0].therapist.name, "With");
        assert!(matches[0].compatibility_score > matches[1].compatibility_score);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let scorer = WeightedCompatibilityScorer::default();
        let catalog: Vec<_> = ["First", "Second", "Third"]
            .iter()
            .map(|name| therapist(name, &["Anxiety"], CommunicationStyle::Direct))
            .collect();
        let responses = vec![text(PRIMARY_CONCERN, "Anxiety")];

        let names: Vec<_> = scorer
            .compute_matches(&catalog, &responses, Jitter::Disabled)
            .into_iter()
            .map(|m| m.therapist.name)
            .collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_unknown_question_is_ignored() {
        let scorer = WeightedCompatibilityScorer::default();
        let catalog = vec![
            therapist("A", &["Anxiety"], CommunicationStyle::Supportive),
            therapist("B", &["Grief"], CommunicationStyle::Direct),
        ];
        let base = vec![text(PRIMARY_CONCERN, "Grief")];
        let mut with_bogus = base.clone();
        with_bogus.push(text("bogus_question", "whatever"));

        let jitter = Jitter::Seeded {
            seed: 42,
            amplitude: 0.05,
        };
        assert_eq!(
            scorer.compute_matches(&catalog, &base, jitter),
            scorer.compute_matches(&catalog, &with_bogus, jitter)
        );
    }

    #[test]
    fn test_seeded_jitter_is_reproducible() {
        let scorer = WeightedCompatibilityScorer::default();
        let catalog = vec![
            therapist("A", &["Anxiety"], CommunicationStyle::Supportive),
            therapist("B", &["Grief"], CommunicationStyle::Direct),
        ];
        let jitter = Jitter::for_user(Uuid::new_v4(), 0.05);
        assert_eq!(
            scorer.compute_matches(&catalog, &[], jitter),
            scorer.compute_matches(&catalog, &[], jitter)
        );
    }

    #[test]
    fn test_personality_bonus_mapping() {
        let scorer = WeightedCompatibilityScorer::default();
        let mut t = therapist("A", &["Anxiety"], CommunicationStyle::Direct);

        t.personality_traits = [("calm".to_string(), 0.7)].into_iter().collect();
        assert!((scorer.personality_bonus(&t) - 0.1).abs() < 1e-9);

        t.personality_traits = [("calm".to_string(), 1.0)].into_iter().collect();
        assert!((scorer.personality_bonus(&t) - 0.15).abs() < 1e-9);

        t.personality_traits = [("calm".to_string(), 0.2)].into_iter().collect();
        assert_eq!(scorer.personality_bonus(&t), 0.1);

        t.personality_traits.clear();
        assert_eq!(scorer.personality_bonus(&t), 0.1);
    }

    #[test]
    fn test_zero_amplitude_disables_jitter() {
        let scorer = WeightedCompatibilityScorer::default();
        let catalog = vec![therapist("A", &["Anxiety"], CommunicationStyle::Direct)];
        let jitter = Jitter::Seeded {
            seed: 1,
            amplitude: 0.0,
        };
        assert_eq!(scorer.compute_matches(&catalog, &[], jitter)[0].breakdown.jitter, 0.0);
    }
}
