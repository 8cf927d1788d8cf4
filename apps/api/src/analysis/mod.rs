// Resume analysis pipeline.
// Implements: experience extraction, gap classification, LLM skill matching,
// and the merged analysis result. All LLM calls go through llm_client —
// no direct provider calls here.

pub mod analyzer;
pub mod experience;
pub mod gap;
pub mod handlers;
pub mod prompts;
pub mod skill_match;
