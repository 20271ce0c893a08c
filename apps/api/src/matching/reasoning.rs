//! Human-readable explanations attached to each match.

use crate::matching::lookup::MatchingTables;
use crate::matching::questions::{COMMUNICATION_PREFERENCE, PRIMARY_CONCERN, SESSION_GOALS};
use crate::matching::scoring::overlapping_goals;
use crate::models::assessment::{AnswerValue, AssessmentResponse};
use crate::models::therapist::TherapistProfile;

/// One sentence per factor that actually contributed. Factors whose response
/// is missing are left out entirely.
pub fn generate_reasoning(
    therapist: &TherapistProfile,
    responses: &[AssessmentResponse],
    tables: &MatchingTables,
) -> Vec<String> {
    let mut reasoning = Vec::new();

    if let Some(concern) = answer(responses, PRIMARY_CONCERN).and_then(AnswerValue::as_text) {
        if therapist.has_specialty(concern) {
            reasoning.push(format!(
                "Specializes in {concern}, which you named as your primary concern"
            ));
        }
    }

    if let Some(label) = answer(responses, COMMUNICATION_PREFERENCE).and_then(AnswerValue::as_text)
    {
        if tables.communication_style(label) == Some(therapist.communication_style) {
            reasoning.push(format!(
                "Uses a {} communication style that matches your preference",
                therapist.communication_style
            ));
        }
    }

    if let Some(goals) = answer(responses, SESSION_GOALS).and_then(AnswerValue::as_list) {
        let overlap = overlapping_goals(therapist, goals);
        if !overlap.is_empty() {
            let joined = overlap
                .iter()
                .map(|g| g.to_lowercase())
                .collect::<Vec<_>>()
                .join(", ");
            reasoning.push(format!("Effective in areas that support your goals: {joined}"));
        }
    }

    reasoning
}

/// Top two personality traits and top two effectiveness areas, title-cased and
/// deduplicated in first-seen order. At most four entries.
pub fn identify_strengths(therapist: &TherapistProfile) -> Vec<String> {
    let mut strengths: Vec<String> = Vec::with_capacity(4);

    let candidates = top_two(therapist.personality_traits.iter())
        .into_iter()
        .chain(top_two(therapist.effectiveness_areas.iter()));

    for name in candidates {
        let titled = title_case(name);
        if !strengths.contains(&titled) {
            strengths.push(titled);
        }
    }
    strengths
}

fn answer<'a>(responses: &'a [AssessmentResponse], question_id: &str) -> Option<&'a AnswerValue> {
    responses
        .iter()
        .find(|r| r.question_id == question_id)
        .map(|r| &r.value)
}

/// Keys with the two highest values; equal values keep key order.
fn top_two<'a>(entries: impl Iterator<Item = (&'a String, &'a f64)>) -> Vec<&'a str> {
    let mut ranked: Vec<_> = entries.collect();
    ranked.sort_by(|a, b| b.1.total_cmp(a.1));
    ranked.into_iter().take(2).map(|(k, _)| k.as_str()).collect()
}

fn title_case(name: &str) -> String {
    name.replace(['_', '-'], " ")
        .split_whitespace()
        .map(|w| {
            let mut c = w.chars();
            match c.next() {
                None => String::new(),
                Some(f) => f.to_uppercase().to_string() + &c.as_str().to_lowercase(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
