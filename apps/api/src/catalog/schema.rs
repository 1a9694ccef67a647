use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::info;

/// Catalog tables. Applied in order on every startup; each statement is idempotent.
pub const SCHEMA: &[&str] = &[
    r#"
CREATE TABLE IF NOT EXISTS skills (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    category TEXT NOT NULL
);
"#,
    r#"
CREATE TABLE IF NOT EXISTS roles (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL UNIQUE,
    description TEXT NOT NULL,
    avg_salary INTEGER NOT NULL,
    growth_rate REAL NOT NULL,
    required_skills TEXT NOT NULL
);
"#,
    r#"
CREATE TABLE IF NOT EXISTS career_map (
    id INTEGER PRIMARY KEY,
    from_role TEXT NOT NULL,
    to_role TEXT NOT NULL,
    transition_time INTEGER NOT NULL,
    difficulty TEXT NOT NULL
);
"#,
    // role is matched by title, not a foreign key
    r#"
CREATE TABLE IF NOT EXISTS salary_data (
    id INTEGER PRIMARY KEY,
    role TEXT NOT NULL,
    year INTEGER NOT NULL,
    salary INTEGER NOT NULL,
    job_openings INTEGER NOT NULL,
    UNIQUE (role, year)
);
"#,
];

pub async fn apply_schema(pool: &SqlitePool) -> Result<()> {
    for (idx, statement) in SCHEMA.iter().enumerate() {
        sqlx::query(statement)
            .execute(pool)
            .await
            .with_context(|| format!("Failed to apply schema statement #{}", idx + 1))?;
    }
    info!("Catalog schema ready ({} statements)", SCHEMA.len());
    Ok(())
}
