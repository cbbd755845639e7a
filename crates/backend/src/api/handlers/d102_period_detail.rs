use axum::{extract::Query, http::StatusCode, Json};
use contracts::dashboards::d102_period_detail::{PeriodDetailRequest, PeriodDetailResponse};

use super::status_for;
use crate::dashboards::d102_period_detail::service;
use crate::shared::data::db::get_connection;

/// GET /api/d102/detail?domain=valuable_drops&period=Previous%20Week
pub async fn get_period_detail(
    Query(request): Query<PeriodDetailRequest>,
) -> Result<Json<PeriodDetailResponse>, StatusCode> {
    tracing::info!(
        "D102 Dashboard: Getting {} detail for '{}'",
        request.domain.display_name(),
        request.period
    );

    let db = get_connection().map_err(|e| {
        tracing::error!("D102 Dashboard: {e:#}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    match service::get_period_detail(db, request).await {
        Ok(response) => {
            tracing::info!("D102 Dashboard: Returning {} rows", response.rows.len());
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D102 Dashboard: Failed to get detail: {}", e);
            Err(status_for(&e))
        }
    }
}
