use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::catalog::CatalogStore;
use crate::errors::AppError;
use crate::models::catalog::{Role, RoleRow, SalaryDataPoint, Skill};

/// SQLite-backed catalog. Cloning shares the underlying pool.
#[derive(Clone)]
pub struct SqliteCatalog {
    pool: SqlitePool,
}

impl SqliteCatalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for SqliteCatalog {
    async fn list_roles(&self) -> Result<Vec<Role>, AppError> {
        let rows = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT title, description, avg_salary, growth_rate, required_skills
            FROM roles
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Role::from).collect())
    }

    async fn list_salary_points(&self, role_title: &str) -> Result<Vec<SalaryDataPoint>, AppError> {
        Ok(sqlx::query_as::<_, SalaryDataPoint>(
            "SELECT role, year, salary, job_openings FROM salary_data WHERE role = ?",
        )
        .bind(role_title)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        Ok(
            sqlx::query_as::<_, Skill>("SELECT name, category FROM skills ORDER BY category, name")
                .fetch_all(&self.pool)
                .await?,
        )
    }
}
