// Therapist matching: questionnaire, compatibility scoring, reasoning, persistence.
// Scoring is pure; all storage goes through `repository::MatchRepository`.

pub mod handlers;
pub mod lookup;
pub mod questions;
pub mod reasoning;
pub mod repository;
pub mod scoring;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;
