//! Fixture catalog for unit tests.

use async_trait::async_trait;

use crate::catalog::CatalogStore;
use crate::errors::AppError;
use crate::models::catalog::{Role, SalaryDataPoint, Skill};

#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    pub roles: Vec<Role>,
    pub salary_points: Vec<SalaryDataPoint>,
    pub skills: Vec<Skill>,
}

impl InMemoryCatalog {
    pub fn with_role(mut self, title: &str, required_skills: &[&str]) -> Self {
        self.roles.push(Role {
            title: title.to_string(),
            description: format!("{title} description"),
            avg_salary: 100_000,
            growth_rate: 10.0,
            required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    pub fn with_point(mut self, role: &str, year: i32, salary: i64, job_openings: i64) -> Self {
        self.salary_points.push(SalaryDataPoint {
            role: role.to_string(),
            year,
            salary,
            job_openings,
        });
        self
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn list_roles(&self) -> Result<Vec<Role>, AppError> {
        Ok(self.roles.clone())
    }

    async fn list_salary_points(&self, role_title: &str) -> Result<Vec<SalaryDataPoint>, AppError> {
        Ok(self
            .salary_points
            .iter()
            .filter(|p| p.role == role_title)
            .cloned()
            .collect())
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        let mut skills = self.skills.clone();
        skills.sort_by(|a, b| (&a.category, &a.name).cmp(&(&b.category, &b.name)));
        Ok(skills)
    }
}
