//! Sample catalog data and the idempotent seeding routine.
//!
//! Every insert is `INSERT OR IGNORE` against a UNIQUE key, so seeding an
//! already-populated database only fills in what is missing. Salary jitter is
//! drawn before any database work so the generator never crosses an `.await`.

use std::ops::RangeInclusive;

use anyhow::Result;
use rand::Rng;
use sqlx::SqlitePool;
use tracing::info;

use crate::models::catalog::SalaryDataPoint;

pub struct RoleSeed {
    pub title: &'static str,
    pub description: &'static str,
    pub avg_salary: i64,
    pub growth_rate: f64,
    pub required_skills: &'static str,
}

pub const SAMPLE_SKILLS: &[(&str, &str)] = &[
    ("Python", "Programming"),
    ("JavaScript", "Programming"),
    ("React", "Frontend"),
    ("Node.js", "Backend"),
    ("SQL", "Database"),
    ("Machine Learning", "AI/ML"),
    ("Data Analysis", "Analytics"),
    ("Project Management", "Management"),
    ("Communication", "Soft Skills"),
    ("Leadership", "Soft Skills"),
];

pub const SAMPLE_ROLES: &[RoleSeed] = &[
    RoleSeed {
        title: "Frontend Developer",
        description: "Build user interfaces and web applications",
        avg_salary: 75_000,
        growth_rate: 15.2,
        required_skills: "JavaScript,React,HTML,CSS",
    },
    RoleSeed {
        title: "Backend Developer",
        description: "Develop server-side applications and APIs",
        avg_salary: 85_000,
        growth_rate: 12.8,
        required_skills: "Python,Node.js,SQL,API Development",
    },
    RoleSeed {
        title: "Full Stack Developer",
        description: "Work on both frontend and backend development",
        avg_salary: 90_000,
        growth_rate: 18.5,
        required_skills: "JavaScript,Python,React,Node.js,SQL",
    },
    RoleSeed {
        title: "Data Scientist",
        description: "Analyze data and build predictive models",
        avg_salary: 110_000,
        growth_rate: 22.3,
        required_skills: "Python,Machine Learning,Data Analysis,SQL",
    },
    RoleSeed {
        title: "Product Manager",
        description: "Manage product development and strategy",
        avg_salary: 120_000,
        growth_rate: 14.7,
        required_skills: "Project Management,Communication,Leadership,Data Analysis",
    },
    RoleSeed {
        title: "DevOps Engineer",
        description: "Manage infrastructure and deployment pipelines",
        avg_salary: 95_000,
        growth_rate: 20.1,
        required_skills: "Python,Linux,Docker,AWS,CI/CD",
    },
    RoleSeed {
        title: "UI/UX Designer",
        description: "Design user interfaces and experiences",
        avg_salary: 70_000,
        growth_rate: 13.4,
        required_skills: "Design,Figma,User Research,Prototyping",
    },
    RoleSeed {
        title: "Software Architect",
        description: "Design software systems and architecture",
        avg_salary: 140_000,
        growth_rate: 8.9,
        required_skills: "System Design,Leadership,Multiple Programming Languages",
    },
];

/// (role, base salary, base job openings) for the roles that get a trend series.
pub const SALARY_BASELINES: &[(&str, i64, i64)] = &[
    ("Frontend Developer", 65_000, 1_200),
    ("Backend Developer", 75_000, 1_000),
    ("Data Scientist", 95_000, 800),
    ("Product Manager", 105_000, 600),
];

pub const SERIES_YEARS: i32 = 5;
const SALARY_STEP: i64 = 5_000;
const OPENINGS_STEP: i64 = 100;
const SALARY_JITTER: RangeInclusive<i64> = -3_000..=3_000;
const OPENINGS_JITTER: RangeInclusive<i64> = -50..=150;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SeedReport {
    pub skills_inserted: u64,
    pub roles_inserted: u64,
    pub salary_points_inserted: u64,
}

/// Builds the yearly series for every baseline role: a five-year window ending
/// at `current_year`, with a linear trend plus uniform jitter.
pub fn generate_salary_series<R: Rng + ?Sized>(current_year: i32, rng: &mut R) -> Vec<SalaryDataPoint> {
    let mut points = Vec::with_capacity(SALARY_BASELINES.len() * SERIES_YEARS as usize);
    for (role, base_salary, base_openings) in SALARY_BASELINES {
        for i in 0..SERIES_YEARS {
            let step = i64::from(i);
            points.push(SalaryDataPoint {
                role: role.to_string(),
                year: current_year - (SERIES_YEARS - 1) + i,
                salary: base_salary + step * SALARY_STEP + rng.random_range(SALARY_JITTER),
                job_openings: base_openings + step * OPENINGS_STEP + rng.random_range(OPENINGS_JITTER),
            });
        }
    }
    points
}

/// Inserts the sample skills and roles plus `series` in one transaction.
pub async fn seed_catalog(pool: &SqlitePool, series: &[SalaryDataPoint]) -> Result<SeedReport> {
    let mut report = SeedReport::default();
    let mut tx = pool.begin().await?;

    for (name, category) in SAMPLE_SKILLS {
        report.skills_inserted += sqlx::query("INSERT OR IGNORE INTO skills (name, category) VALUES (?, ?)")
            .bind(*name)
            .bind(*category)
            .execute(&mut *tx)
            .await?
            .rows_affected();
    }

    for role in SAMPLE_ROLES {
        report.roles_inserted += sqlx::query(
            r#"
            INSERT OR IGNORE INTO roles (title, description, avg_salary, growth_rate, required_skills)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(role.title)
        .bind(role.description)
        .bind(role.avg_salary)
        .bind(role.growth_rate)
        .bind(role.required_skills)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    for point in series {
        report.salary_points_inserted += sqlx::query(
            "INSERT OR IGNORE INTO salary_data (role, year, salary, job_openings) VALUES (?, ?, ?, ?)",
        )
        .bind(&point.role)
        .bind(point.year)
        .bind(point.salary)
        .bind(point.job_openings)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    tx.commit().await?;

    info!(
        "Catalog seeded: {} skills, {} roles, {} salary points inserted",
        report.skills_inserted, report.roles_inserted, report.salary_points_inserted
    );
    Ok(report)
}
