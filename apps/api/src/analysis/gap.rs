//! Experience gap classification — a total, deterministic rule comparing the
//! candidate's estimated years against the JD's required range.

use serde::{Deserialize, Serialize};

use crate::analysis::experience::ExperienceRange;

/// Categorical judgment of candidate experience against the required range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GapVerdict {
    NotSpecified,
    BelowMinimum,
    WithinRange,
    ExceedsRange,
}

impl GapVerdict {
    /// The fixed sentence reported for this verdict in analysis output.
    pub fn description(&self) -> &'static str {
        match self {
            GapVerdict::NotSpecified => "Experience requirement not clearly specified.",
            GapVerdict::BelowMinimum => {
                "Candidate does not meet the minimum required experience."
            }
            GapVerdict::WithinRange => "Candidate meets the required experience range.",
            GapVerdict::ExceedsRange => "Candidate exceeds the required experience range.",
        }
    }
}

/// Classifies candidate experience against the required range.
/// Total function: every input falls into exactly one verdict.
pub fn classify(required: ExperienceRange, candidate_years: f64) -> GapVerdict {
    if !required.is_specified() {
        GapVerdict::NotSpecified
    } else if candidate_years < f64::from(required.min) {
        GapVerdict::BelowMinimum
    } else if candidate_years <= f64::from(required.max) {
        GapVerdict::WithinRange
    } else {
        GapVerdict::ExceedsRange
    }
}
