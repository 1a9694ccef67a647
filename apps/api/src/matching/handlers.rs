use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::charts::ChartDescription;
use crate::errors::AppError;
use crate::matching::matcher::RoleMatch;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Body of POST /analyze, echoed back as `user_profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default = "default_experience")]
    pub experience: String,
}

fn default_experience() -> String {
    "entry".to_string()
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub roles: Vec<RoleMatch>,
    pub salary_chart: Option<ChartDescription>,
    pub job_chart: Option<ChartDescription>,
    pub user_profile: UserProfile,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze
///
/// Ranks roles for the submitted skills and attaches trend charts for the
/// top-ranked role.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<UserProfile>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(profile) = payload?;

    let roles = state
        .matcher
        .match_roles(&profile.skills, &profile.interests)
        .await?;

    let (salary_chart, job_chart) = match roles.first() {
        Some(top) => {
            info!("Top match '{}' ({:.1})", top.title, top.match_score);
            let charts = state.charts.build_trend_charts(&top.title).await?;
            (charts.salary_chart, charts.job_chart)
        }
        None => (None, None),
    };

    Ok(Json(AnalyzeResponse {
        roles,
        salary_chart,
        job_chart,
        user_profile: profile,
    }))
}
