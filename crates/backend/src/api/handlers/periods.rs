use axum::{http::StatusCode, Json};
use contracts::shared::periods::PeriodOptionsResponse;

use crate::shared::dashboard_context::DashboardContext;
use crate::shared::data::db::get_connection;

/// GET /api/periods
pub async fn get_period_options() -> Result<Json<PeriodOptionsResponse>, StatusCode> {
    let db = get_connection().map_err(|e| {
        tracing::error!("Periods: {e:#}");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let ctx = DashboardContext::load(db).await;
    tracing::info!("Periods: run time {}", ctx.run_time.to_rfc3339());

    Ok(Json(PeriodOptionsResponse {
        run_time: ctx.run_time,
        options: ctx.options.into_vec(),
    }))
}
