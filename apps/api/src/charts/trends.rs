//! Trend chart builder: salary and job-opening series for one role title.
//!
//! A title with no salary rows yields `None`, whether or not the role exists
//! in the catalog.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::CatalogStore;
use crate::charts::description::{Axis, ChartDescription, ChartKind, ChartStyle};
use crate::errors::AppError;
use crate::models::catalog::SalaryDataPoint;

const YEAR_LABEL: &str = "Year";
const CHART_HEIGHT: u32 = 400;
const CHART_THEME: &str = "plotly_white";
const SALARY_COLOR: &str = "#3b82f6";
const OPENINGS_COLOR: &str = "#10b981";

/// Both charts for one role, serialized with `null` for missing data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendCharts {
    pub salary_chart: Option<ChartDescription>,
    pub job_chart: Option<ChartDescription>,
}

#[derive(Clone)]
pub struct TrendChartBuilder {
    catalog: Arc<dyn CatalogStore>,
}

impl TrendChartBuilder {
    pub fn new(catalog: Arc<dyn CatalogStore>) -> Self {
        Self { catalog }
    }

    pub async fn build_salary_chart(
        &self,
        role_title: &str,
    ) -> Result<Option<ChartDescription>, AppError> {
        let points = self.catalog.list_salary_points(role_title).await?;
        Ok(salary_chart(role_title, points))
    }

    pub async fn build_job_openings_chart(
        &self,
        role_title: &str,
    ) -> Result<Option<ChartDescription>, AppError> {
        let points = self.catalog.list_salary_points(role_title).await?;
        Ok(job_openings_chart(role_title, points))
    }

    /// Builds both charts for one role.
    pub async fn build_trend_charts(&self, role_title: &str) -> Result<TrendCharts, AppError> {
        debug!("Building trend charts for '{role_title}'");
        Ok(TrendCharts {
            salary_chart: self.build_salary_chart(role_title).await?,
            job_chart: self.build_job_openings_chart(role_title).await?,
        })
    }
}

pub fn salary_chart(role_title: &str, points: Vec<SalaryDataPoint>) -> Option<ChartDescription> {
    let points = by_year(points)?;
    Some(ChartDescription {
        kind: ChartKind::LineMarkers,
        title: format!("Salary Trend for {role_title}"),
        series_name: "Average Salary".to_string(),
        x_axis: year_axis(&points),
        y_axis: Axis {
            label: "Salary (USD)".to_string(),
            values: points.iter().map(|p| p.salary).collect(),
        },
        style: ChartStyle {
            color: SALARY_COLOR.to_string(),
            line_width: Some(3),
            marker_size: Some(8),
            height: CHART_HEIGHT,
            theme: CHART_THEME.to_string(),
        },
    })
}

pub fn job_openings_chart(role_title: &str, points: Vec<SalaryDataPoint>) -> Option<ChartDescription> {
    let points = by_year(points)?;
    Some(ChartDescription {
        kind: ChartKind::Bar,
        title: format!("Job Market Trend for {role_title}"),
        series_name: "Job Openings".to_string(),
        x_axis: year_axis(&points),
        y_axis: Axis {
            label: "Number of Job Openings".to_string(),
            values: points.iter().map(|p| p.job_openings).collect(),
        },
        style: ChartStyle {
            color: OPENINGS_COLOR.to_string(),
            line_width: None,
            marker_size: None,
            height: CHART_HEIGHT,
            theme: CHART_THEME.to_string(),
        },
    })
}

/// Sorts ascending by year; `None` when there is nothing to plot.
fn by_year(mut points: Vec<SalaryDataPoint>) -> Option<Vec<SalaryDataPoint>> {
    if points.is_empty() {
        return None;
    }
    points.sort_by_key(|p| p.year);
    Some(points)
}

fn year_axis(points: &[SalaryDataPoint]) -> Axis<i32> {
    Axis {
        label: YEAR_LABEL.to_string(),
        values: points.iter().map(|p| p.year).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use crate::catalog::memory::InMemoryCatalog;

    fn builder() -> TrendChartBuilder {
        // deliberately out of year order
        let catalog = InMemoryCatalog::default()
            .with_role("Data Scientist", &["Python"])
            .with_role("DevOps Engineer", &["Linux"])
            .with_point("Data Scientist", 2024, 104_100, 1_010)
            .with_point("Data Scientist", 2022, 95_500, 820)
            .with_point("Data Scientist", 2026, 113_900, 1_190)
            .with_point("Data Scientist", 2023, 99_000, 870)
            .with_point("Data Scientist", 2025, 110_200, 1_120)
            .with_point("Backend Developer", 2026, 90_000, 1_400);
        TrendChartBuilder::new(Arc::new(catalog))
    }

    #[tokio::test]
    async fn test_salary_chart_years_ascending_with_matching_values() {
        let chart = builder()
            .build_salary_chart("Data Scientist")
            .await
            .unwrap()
            .expect("chart");

        assert_eq!(chart.kind, ChartKind::LineMarkers);
        assert_eq!(chart.title, "Salary Trend for Data Scientist");
        assert_eq!(chart.x_axis.label, "Year");
        assert_eq!(chart.y_axis.label, "Salary (USD)");
        assert_eq!(chart.x_axis.values, vec![2022, 2023, 2024, 2025, 2026]);

        let by_year: BTreeMap<i32, i64> = chart
            .x_axis
            .values
            .iter()
            .copied()
            .zip(chart.y_axis.values.iter().copied())
            .collect();
        let expected: BTreeMap<i32, i64> = [
            (2022, 95_500),
            (2023, 99_000),
            (2024, 104_100),
            (2025, 110_200),
            (2026, 113_900),
        ]
        .into_iter()
        .collect();
        assert_eq!(by_year, expected);
    }

    #[tokio::test]
    async fn test_job_chart_is_bar_of_openings() {
        let chart = builder()
            .build_job_openings_chart("Data Scientist")
            .await
            .unwrap()
            .expect("chart");

        assert_eq!(chart.kind, ChartKind::Bar);
        assert_eq!(chart.title, "Job Market Trend for Data Scientist");
        assert_eq!(chart.y_axis.label, "Number of Job Openings");
        assert_eq!(chart.y_axis.values, vec![820, 870, 1_010, 1_120, 1_190]);
        assert_eq!(chart.style.height, 400);
    }

    #[tokio::test]
    async fn test_unknown_role_has_no_charts() {
        let b = builder();
        assert!(b.build_salary_chart("Nonexistent Role").await.unwrap().is_none());
        assert!(b.build_job_openings_chart("Nonexistent Role").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_catalog_role_without_series_has_no_charts() {
        let charts = builder().build_trend_charts("DevOps Engineer").await.unwrap();
        assert_eq!(
            charts,
            TrendCharts {
                salary_chart: None,
                job_chart: None
            }
        );
    }

    #[tokio::test]
    async fn test_trend_charts_match_individual_builders() {
        let b = builder();
        let charts = b.build_trend_charts("Backend Developer").await.unwrap();
        assert_eq!(charts.salary_chart, b.build_salary_chart("Backend Developer").await.unwrap());
        assert_eq!(charts.job_chart, b.build_job_openings_chart("Backend Developer").await.unwrap());
    }

    #[test]
    fn test_chart_serializes_neutral_shape() {
        let chart = job_openings_chart(
            "QA",
            vec![SalaryDataPoint {
                role: "QA".to_string(),
                year: 2026,
                salary: 1,
                job_openings: 7,
            }],
        )
        .unwrap();
        let json = serde_json::to_value(&chart).unwrap();

        assert_eq!(json["kind"], "bar");
        assert_eq!(json["x_axis"]["values"][0], 2026);
        assert_eq!(json["y_axis"]["values"][0], 7);
        assert!(json["style"].get("line_width").is_none());
    }
}
