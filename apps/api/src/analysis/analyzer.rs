//! Analysis pipeline: deterministic experience extraction, gap classification,
//! one LLM skill-match call, and the flat merge returned to callers.

use serde::{Deserialize, Serialize};

use crate::analysis::experience::ExperiencePatterns;
use crate::analysis::gap;
use crate::analysis::skill_match::SkillMatcher;
use crate::errors::AppError;

/// Flat merge of the deterministic experience fields and the LLM skill
/// analysis. One value per invocation; nothing is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_match_score: u32,
    pub required_skills: Vec<String>,
    pub candidate_skills: Vec<String>,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub required_experience_min: u32,
    pub required_experience_max: u32,
    pub candidate_experience_years: f64,
    pub experience_gap_analysis: String,
    pub improvement_suggestions: Vec<String>,
}

/// Runs the full analysis over plain resume and job-description text.
///
/// The two extractors and the gap rule are pure local computation; the skill
/// matcher is the single outbound call. A matcher failure is fatal to the
/// request — no partial result is returned.
pub async fn analyze(
    resume_text: &str,
    jd_text: &str,
    patterns: &ExperiencePatterns,
    matcher: &dyn SkillMatcher,
) -> Result<AnalysisResult, AppError> {
    let required = patterns.extract_required_range(jd_text);
    let candidate_years = patterns.estimate_candidate_years(resume_text);
    let verdict = gap::classify(required, candidate_years);

    let skills = matcher.compare(resume_text, jd_text).await?;

    Ok(AnalysisResult {
        overall_match_score: skills.overall_match_score.clamp(0, 100) as u32,
        required_skills: skills.required_skills,
        candidate_skills: skills.candidate_skills,
        matching_skills: skills.matching_skills,
        missing_skills: skills.missing_skills,
        required_experience_min: required.min,
        required_experience_max: required.max,
        candidate_experience_years: candidate_years,
        experience_gap_analysis: verdict.description().to_string(),
        improvement_suggestions: skills.improvement_suggestions,
    })
}
