use axum::{
    extract::{Path, State},
    Json,
};

use crate::charts::trends::TrendCharts;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /role/:title
///
/// Trend charts for any title; fields are `null` when no series exists.
pub async fn handle_role_details(
    State(state): State<AppState>,
    Path(role_title): Path<String>,
) -> Result<Json<TrendCharts>, AppError> {
    let charts = state.charts.build_trend_charts(&role_title).await?;
    Ok(Json(charts))
}
