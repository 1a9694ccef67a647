use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Separator used by the `roles.required_skills` text column.
pub const SKILL_SEPARATOR: char = ',';

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Skill {
    pub name: String,
    pub category: String,
}

/// Row shape of the `roles` table; `required_skills` is comma-joined.
#[derive(Debug, Clone, FromRow)]
pub struct RoleRow {
    pub title: String,
    pub description: String,
    pub avg_salary: i64,
    pub growth_rate: f64,
    pub required_skills: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub title: String,
    pub description: String,
    pub avg_salary: i64,
    pub growth_rate: f64,
    pub required_skills: Vec<String>,
}

impl From<RoleRow> for Role {
    fn from(row: RoleRow) -> Self {
        Role {
            title: row.title,
            description: row.description,
            avg_salary: row.avg_salary,
            growth_rate: row.growth_rate,
            required_skills: split_required_skills(&row.required_skills),
        }
    }
}

/// Splits a stored skill list. Labels are kept verbatim (no trimming, no case folding).
/// An empty column yields an empty list.
pub fn split_required_skills(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(SKILL_SEPARATOR).map(str::to_string).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SalaryDataPoint {
    pub role: String,
    pub year: i32,
    pub salary: i64,
    pub job_openings: i64,
}

/// `career_map` rows. The table is part of the schema but nothing writes to it yet.
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerTransition {
    pub from_role: String,
    pub to_role: String,
    /// Months.
    pub transition_time: i64,
    pub difficulty: String,
}
