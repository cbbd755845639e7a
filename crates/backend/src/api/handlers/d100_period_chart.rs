use axum::{extract::Query, http::StatusCode, Json};
use contracts::dashboards::d100_period_chart::{PeriodChartRequest, PeriodChartResponse};

use super::status_for;
use crate::dashboards::d100_period_chart::service;
use crate::shared::data::db::get_connection;

/// GET /api/d100/chart?domain=valuable_drops&period=Previous%20Week&metric=value
pub async fn get_period_chart(
    Query(request): Query<PeriodChartRequest>,
) -> Result<Json<PeriodChartResponse>, StatusCode> {
    tracing::info!(
        "D100 Dashboard: Getting {:?} chart of {} for '{}'",
        request.metric,
        request.domain.display_name(),
        request.period
    );

    let db = get_connection().map_err(|e| {
        tracing::error!("D100 Dashboard: {e:#}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    match service::get_period_chart(db, request).await {
        Ok(response) => {
            tracing::info!(
                "D100 Dashboard: Returning {} points for {}",
                response.points.len(),
                response.suffix.suffix()
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D100 Dashboard: Failed to get chart: {}", e);
            Err(status_for(&e))
        }
    }
}
