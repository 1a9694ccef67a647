//! Catalog store: the read-mostly reference data (skills, roles, salary series).
//!
//! The matcher and chart builder only ever see `Arc<dyn CatalogStore>`, so the
//! SQLite backend can be replaced by fixture data in tests.

pub mod handlers;
#[cfg(test)]
pub mod memory;
pub mod schema;
pub mod seed;
pub mod sqlite;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::catalog::{Role, SalaryDataPoint, Skill};

pub use sqlite::SqliteCatalog;

#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All roles, in catalog (insertion) order.
    async fn list_roles(&self) -> Result<Vec<Role>, AppError>;

    /// Salary points for one role title. No ordering guarantee.
    async fn list_salary_points(&self, role_title: &str) -> Result<Vec<SalaryDataPoint>, AppError>;

    /// All skills, ordered by category then name.
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;
}
