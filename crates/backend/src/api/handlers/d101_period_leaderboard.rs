use axum::{extract::Query, http::StatusCode, Json};
use contracts::dashboards::d101_period_leaderboard::{
    PeriodLeaderboardRequest, PeriodLeaderboardResponse,
};

use super::status_for;
use crate::dashboards::d101_period_leaderboard::service;
use crate::shared::data::db::get_connection;

/// GET /api/d101/leaderboard?domain=pvp_kills&period=Year-to-Date&limit=10
pub async fn get_period_leaderboard(
    Query(request): Query<PeriodLeaderboardRequest>,
) -> Result<Json<PeriodLeaderboardResponse>, StatusCode> {
    tracing::info!(
        "D101 Dashboard: Getting {} leaderboard for '{}'",
        request.domain.display_name(),
        request.period
    );

    let db = get_connection().map_err(|e| {
        tracing::error!("D101 Dashboard: {e:#}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    match service::get_period_leaderboard(db, request).await {
        Ok(response) => {
            tracing::info!("D101 Dashboard: Returning {} rows", response.rows.len());
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D101 Dashboard: Failed to get leaderboard: {}", e);
            Err(status_for(&e))
        }
    }
}
