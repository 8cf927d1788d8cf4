//! Skill matching — pluggable, trait-based comparison of a resume against a JD.
//!
//! Default: `LlmSkillMatcher`, one schema-enforced Groq call per invocation.
//! `AppState` holds an `Arc<dyn SkillMatcher>` so tests substitute a stub
//! without touching the endpoint, handler, or orchestration code.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::analysis::prompts::{build_skill_match_prompt, SKILL_MATCH_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// Structured skill comparison produced wholesale by the model call.
///
/// Only the schema is enforced here; the semantic quality of the lists and
/// score is whatever the model returns. The score is clamped to 0–100 when
/// merged into the final result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillAnalysis {
    pub overall_match_score: i64,
    pub required_skills: Vec<String>,
    pub candidate_skills: Vec<String>,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub improvement_suggestions: Vec<String>,
}

/// The skill matcher trait. Implement this to swap backends without touching
/// caller code. Carried in `AppState` as `Arc<dyn SkillMatcher>`.
#[async_trait]
pub trait SkillMatcher: Send + Sync {
    async fn compare(&self, resume_text: &str, jd_text: &str) -> Result<SkillAnalysis, AppError>;
}

/// Default backend: one outbound LLM call per invocation, deterministic
/// decoding, no retries, no caching. A provider failure is fatal to the
/// request and propagates as `AppError::Llm`.
pub struct LlmSkillMatcher {
    llm: LlmClient,
}

impl LlmSkillMatcher {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl SkillMatcher for LlmSkillMatcher {
    async fn compare(&self, resume_text: &str, jd_text: &str) -> Result<SkillAnalysis, AppError> {
        let prompt = build_skill_match_prompt(resume_text, jd_text);
        self.llm
            .call_json::<SkillAnalysis>(&prompt, SKILL_MATCH_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Skill matching failed: {e}")))
    }
}
