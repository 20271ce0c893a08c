use crate::matching::service::MatchingService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Matching engine with its repository. Built over an in-memory repository in tests.
    pub matching: MatchingService,
}
