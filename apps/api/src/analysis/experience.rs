//! Experience extraction — deterministic, regex-based heuristics over raw text.
//!
//! Two independent extractors: the required-years range from a job description
//! and the candidate's total experience from résumé employment date ranges.
//! Both are pure functions of their input text; "nothing found" is a sentinel
//! value, never an error.
//!
//! The patterns are heuristic and English-centric (3-letter month
//! abbreviations, hyphen/en-dash separators). They live in a single
//! `ExperiencePatterns` value compiled once at startup so the pattern set is
//! configuration, not inline magic scattered through the matching code.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Required years-of-experience range extracted from a job description.
///
/// `(0, 0)` is the sentinel for "no requirement found". When non-zero,
/// `min <= max` holds for any text the range pattern accepts in order
/// (a reversed mention like "5-3 years" is taken at face value and
/// classified downstream as written).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRange {
    pub min: u32,
    pub max: u32,
}

impl ExperienceRange {
    pub const NOT_SPECIFIED: ExperienceRange = ExperienceRange { min: 0, max: 0 };

    pub fn is_specified(&self) -> bool {
        !(self.min == 0 && self.max == 0)
    }
}

/// Pre-compiled extraction patterns. Built once at startup and shared via
/// `AppState`; every extraction call borrows it.
#[derive(Debug)]
pub struct ExperiencePatterns {
    /// "3-5 years", "3 to 5 years"
    required_range: Regex,
    /// "5+ years", "5 years"
    required_plus: Regex,
    /// "Jul 2024 – Dec 2025", "Feb 2024 - Jun 2024"
    date_span: Regex,
}

impl ExperiencePatterns {
    pub fn new() -> Self {
        Self {
            required_range: Regex::new(r"(\d+)\s*(?:-|to)\s*(\d+)\s*years")
                .expect("valid required-range pattern"),
            required_plus: Regex::new(r"(\d+)\+?\s*years").expect("valid required-plus pattern"),
            date_span: Regex::new(r"([A-Za-z]{3})\s*(\d{4})\s*[–-]\s*([A-Za-z]{3})\s*(\d{4})")
                .expect("valid date-span pattern"),
        }
    }

    /// Extracts the required years-of-experience range from a job description.
    ///
    /// The range pattern wins over the plus pattern, and only the first match
    /// in the text is used; multiple mentions are not aggregated.
    pub fn extract_required_range(&self, job_text: &str) -> ExperienceRange {
        let job_text = job_text.to_lowercase();

        if let Some(caps) = self.required_range.captures(&job_text) {
            if let (Ok(min), Ok(max)) = (caps[1].parse::<u32>(), caps[2].parse::<u32>()) {
                return ExperienceRange { min, max };
            }
        }

        if let Some(caps) = self.required_plus.captures(&job_text) {
            if let Ok(val) = caps[1].parse::<u32>() {
                return ExperienceRange { min: val, max: val };
            }
        }

        ExperienceRange::NOT_SPECIFIED
    }

    /// Estimates total candidate experience in years from employment date
    /// ranges like "Jul 2024 – Dec 2025".
    ///
    /// Whole months are summed across every matched range and converted to
    /// years rounded to one decimal. The sum is naive: overlapping or
    /// concurrent roles are double-counted. That mirrors the shipped
    /// heuristic and is a documented limitation, not a bug to fix here.
    pub fn estimate_candidate_years(&self, resume_text: &str) -> f64 {
        let mut total_months: i32 = 0;

        for caps in self.date_span.captures_iter(resume_text) {
            let start_month = month_number(&caps[1]);
            let end_month = month_number(&caps[3]);
            let (start_year, end_year) = match (caps[2].parse::<i32>(), caps[4].parse::<i32>()) {
                (Ok(s), Ok(e)) => (s, e),
                _ => continue,
            };

            let diff = (end_year - start_year) * 12 + (end_month - start_month);

            // Reversed or zero-length ranges contribute nothing.
            if diff > 0 {
                total_months += diff;
            }
        }

        (f64::from(total_months) / 12.0 * 10.0).round() / 10.0
    }
}

impl Default for ExperiencePatterns {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a month abbreviation to 1–12, case-insensitively.
/// Unrecognized abbreviations fall back to January rather than erroring.
fn month_number(abbr: &str) -> i32 {
    match abbr.to_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" | "june" => 6,
        "jul" | "july" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> ExperiencePatterns {
        ExperiencePatterns::new()
    }

    // ── Required range extraction ───────────────────────────────────────────

    #[test]
    fn test_range_with_hyphen() {
        let range = patterns().extract_required_range("We need 3-5 years of Rust experience.");
        assert_eq!(range, ExperienceRange { min: 3, max: 5 });
    }

    #[test]
    fn test_range_with_to() {
        let range = patterns().extract_required_range("Requires 3 to 5 years in backend roles.");
        assert_eq!(range, ExperienceRange { min: 3, max: 5 });
    }

    #[test]
    fn test_plus_pattern() {
        let range = patterns().extract_required_range("Minimum 5+ years experience.");
        assert_eq!(range, ExperienceRange { min: 5, max: 5 });
    }

    #[test]
    fn test_plain_years_mention() {
        let range = patterns().extract_required_range("At least 5 years writing services.");
        assert_eq!(range, ExperienceRange { min: 5, max: 5 });
    }

    #[test]
    fn test_no_years_mention_is_sentinel() {
        let range = patterns().extract_required_range("Strong communicator, team player.");
        assert_eq!(range, ExperienceRange::NOT_SPECIFIED);
        assert!(!range.is_specified());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let range = patterns().extract_required_range("3-5 YEARS of experience REQUIRED");
        assert_eq!(range, ExperienceRange { min: 3, max: 5 });
    }

    #[test]
    fn test_only_first_mention_is_used() {
        let range =
            patterns().extract_required_range("2-4 years preferred, though 8-10 years is ideal.");
        assert_eq!(range, ExperienceRange { min: 2, max: 4 });
    }

    #[test]
    fn test_range_pattern_wins_over_plus_pattern() {
        // "10+ years" appears first in the text, but the range pattern is
        // tried first across the whole input.
        let range = patterns().extract_required_range("10+ years total, 3-5 years with Kafka.");
        assert_eq!(range, ExperienceRange { min: 3, max: 5 });
    }

    // ── Candidate experience estimation ─────────────────────────────────────

    #[test]
    fn test_single_range_with_en_dash() {
        // Jul 2024 → Dec 2025 is 17 whole months → 1.4 years.
        let years = patterns().estimate_candidate_years("Backend Engineer, Jul 2024 – Dec 2025");
        assert_eq!(years, 1.4);
    }

    #[test]
    fn test_single_range_with_hyphen() {
        // Feb 2024 → Jun 2024 is 4 months → 0.3 years.
        let years = patterns().estimate_candidate_years("Intern, Feb 2024 - Jun 2024");
        assert_eq!(years, 0.3);
    }

    #[test]
    fn test_sequential_ranges_sum() {
        let resume = "Acme Corp, Jan 2020 - Jan 2021\nGlobex, Feb 2021 - Feb 2022";
        // 12 + 12 months → 2.0 years.
        assert_eq!(patterns().estimate_candidate_years(resume), 2.0);
    }

    #[test]
    fn test_overlapping_ranges_are_double_counted() {
        // 24 months plus a fully-contained 12-month role. The naive sum gives
        // 36 months → 3.0 years; overlaps are intentionally not merged.
        let resume = "Staff Eng, Jan 2020 - Jan 2022\nAdvisor (concurrent), Jun 2020 - Jun 2021";
        assert_eq!(patterns().estimate_candidate_years(resume), 3.0);
    }

    #[test]
    fn test_reversed_range_contributes_nothing() {
        let years = patterns().estimate_candidate_years("Typo Inc, Dec 2025 - Jul 2024");
        assert_eq!(years, 0.0);
    }

    #[test]
    fn test_zero_length_range_contributes_nothing() {
        let years = patterns().estimate_candidate_years("One-day gig, Mar 2023 - Mar 2023");
        assert_eq!(years, 0.0);
    }

    #[test]
    fn test_no_date_ranges_returns_zero() {
        let years = patterns().estimate_candidate_years("Skills: Rust, Tokio, Postgres.");
        assert_eq!(years, 0.0);
    }

    #[test]
    fn test_unrecognized_month_defaults_to_january() {
        // "Xyz 2020" parses with month 1, so the span is Jan 2020 → Dec 2020,
        // 11 months → 0.9 years.
        let years = patterns().estimate_candidate_years("Xyz 2020 - Dec 2020");
        assert_eq!(years, 0.9);
    }

    #[test]
    fn test_month_lookup_is_case_insensitive() {
        let lower = patterns().estimate_candidate_years("jul 2024 – dec 2025");
        let upper = patterns().estimate_candidate_years("JUL 2024 – DEC 2025");
        assert_eq!(lower, 1.4);
        assert_eq!(upper, 1.4);
    }

    #[test]
    fn test_month_number_aliases() {
        assert_eq!(month_number("jun"), 6);
        assert_eq!(month_number("june"), 6);
        assert_eq!(month_number("jul"), 7);
        assert_eq!(month_number("july"), 7);
        assert_eq!(month_number("???"), 1);
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        // 15 months → 1.25 years: a tie at the first decimal rounds up to 1.3.
        let years = patterns().estimate_candidate_years("Mar 2020 - Jun 2021");
        assert_eq!(years, 1.3);
    }

    #[test]
    fn test_years_are_rounded_to_one_decimal() {
        // 5 months → 0.41666... → 0.4
        let years = patterns().estimate_candidate_years("Aug 2023 - Jan 2024");
        assert_eq!(years, 0.4);
    }
}
