// All LLM prompt constants for the Analysis module.
// The single call site is skill_match.rs — keep schema and prompt in sync.

/// System prompt for skill matching — enforces JSON-only output.
pub const SKILL_MATCH_SYSTEM: &str = "You are a senior technical recruiter performing a strict \
    comparison of a resume against a job description. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Skill matching prompt template. Replace `{resume}` and `{job}` before sending.
pub const SKILL_MATCH_PROMPT_TEMPLATE: &str = r#"Strictly compare the resume and the job description below.

Extract:
- Required skills (from the job description)
- Candidate skills (from the resume)
- Matching skills (present in both)
- Missing skills (required but absent from the resume)
- A realistic overall match score (strict evaluation)
- Strong, concrete improvement suggestions

Return a JSON object with this EXACT schema (no extra fields):
{
  "overall_match_score": 72,
  "required_skills": ["Rust", "PostgreSQL"],
  "candidate_skills": ["Rust", "Redis"],
  "matching_skills": ["Rust"],
  "missing_skills": ["PostgreSQL"],
  "improvement_suggestions": ["Add a project demonstrating PostgreSQL schema design"]
}

Rules:
- overall_match_score is an integer from 0 to 100. Score strictly; do not inflate.
- Every list is an array of short strings, most important first.
- Base every claim on the texts below. Do NOT invent skills that appear in neither.

Resume:
{resume}

Job Description:
{job}"#;

/// Builds the skill-match prompt by embedding both texts verbatim.
pub fn build_skill_match_prompt(resume_text: &str, jd_text: &str) -> String {
    SKILL_MATCH_PROMPT_TEMPLATE
        .replace("{resume}", resume_text)
        .replace("{job}", jd_text)
}
