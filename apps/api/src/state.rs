use std::sync::Arc;

use crate::analysis::experience::ExperiencePatterns;
use crate::analysis::skill_match::SkillMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Nothing here is mutable across requests: each analysis call is stateless
/// given its two text inputs, so concurrent requests need no coordination.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable skill matcher. Default: LlmSkillMatcher over the Groq client;
    /// tests substitute a stub.
    pub skill_matcher: Arc<dyn SkillMatcher>,
    /// Pre-compiled extraction patterns, built once at startup.
    pub patterns: Arc<ExperiencePatterns>,
}
