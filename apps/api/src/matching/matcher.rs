//! Role matcher: ranks catalog roles against a user's skills.
//!
//! Algorithm:
//! 1. skill_match = |user ∩ required| / |required|
//! 2. interest_match = 0.5 (placeholder)
//! 3. match_score = round((0.7 * skill_match + 0.3 * interest_match) * 100, 1)
//! 4. Stable sort by match_score descending, keep the top 5.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::CatalogStore;
use crate::errors::AppError;
use crate::matching::scoring::{
    compute_interest_match, compute_overall_match, compute_skill_match, to_match_score,
    ScoringWeights,
};
use crate::models::catalog::Role;

pub const TOP_MATCHES: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleMatch {
    pub title: String,
    pub description: String,
    pub avg_salary: i64,
    pub growth_rate: f64,
    pub match_score: f64, // 0 – 100, one decimal
    pub required_skills: Vec<String>,
}

#[derive(Clone)]
pub struct RoleMatcher {
    catalog: Arc<dyn CatalogStore>,
    weights: ScoringWeights,
}

impl RoleMatcher {
    pub fn new(catalog: Arc<dyn CatalogStore>) -> Self {
        Self {
            catalog,
            weights: ScoringWeights::default(),
        }
    }

    /// Returns up to five best-matching roles, best first.
    pub async fn match_roles(
        &self,
        skills: &[String],
        interests: &[String],
    ) -> Result<Vec<RoleMatch>, AppError> {
        let roles = self.catalog.list_roles().await?;
        debug!("Scoring {} roles against {} skills", roles.len(), skills.len());
        rank_roles(roles, skills, interests, &self.weights)
    }
}

/// Scores every role and keeps the top five. Equal scores keep catalog order.
pub fn rank_roles(
    roles: Vec<Role>,
    skills: &[String],
    interests: &[String],
    weights: &ScoringWeights,
) -> Result<Vec<RoleMatch>, AppError> {
    let user_skills: HashSet<&str> = skills.iter().map(String::as_str).collect();
    let interest_match = compute_interest_match(interests);

    let mut matches = Vec::with_capacity(roles.len());
    for role in roles {
        let skill_match = compute_skill_match(&user_skills, &role.required_skills).ok_or_else(|| {
            AppError::DataInvariant(format!("role '{}' has no required skills", role.title))
        })?;
        let overall = compute_overall_match(skill_match, interest_match, weights);

        matches.push(RoleMatch {
            title: role.title,
            description: role.description,
            avg_salary: role.avg_salary,
            growth_rate: role.growth_rate,
            match_score: to_match_score(overall),
            required_skills: role.required_skills,
        });
    }

    // sort_by is stable
    matches.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    matches.truncate(TOP_MATCHES);
    Ok(matches)
}
