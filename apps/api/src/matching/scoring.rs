use std::collections::HashSet;

/// Interest fit used for every role until interest matching exists.
pub const INTEREST_MATCH_PLACEHOLDER: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct ScoringWeights {
    pub skill: f64,
    pub interest: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 0.7,
            interest: 0.3,
        }
    }
}

/// Fraction of `required` covered by `user_skills`. Exact, case-sensitive labels.
///
/// The numerator counts distinct shared labels, the denominator counts the
/// listed requirements. Returns `None` for an empty requirement list.
pub fn compute_skill_match(user_skills: &HashSet<&str>, required: &[String]) -> Option<f64> {
    if required.is_empty() {
        return None;
    }
    let role_skills: HashSet<&str> = required.iter().map(String::as_str).collect();
    let shared = user_skills.intersection(&role_skills).count();
    Some(shared as f64 / required.len() as f64)
}

/// Interests are accepted but do not influence the score yet.
pub fn compute_interest_match(_interests: &[String]) -> f64 {
    INTEREST_MATCH_PLACEHOLDER
}

/// Weighted blend: skill * 0.7 + interest * 0.3 with default weights.
pub fn compute_overall_match(skill_match: f64, interest_match: f64, weights: &ScoringWeights) -> f64 {
    skill_match * weights.skill + interest_match * weights.interest
}

/// Percentage rounded to one decimal place.
pub fn to_match_score(overall_match: f64) -> f64 {
    round_to_tenth(overall_match * 100.0)
}

/// Rounds the exact decimal value of `value`; ties go to the even digit.
fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
