use anyhow::Result;
use chrono::{DateTime, Utc};
use contracts::dashboards::d100_period_chart::{PeriodChartRequest, PeriodChartResponse};
use contracts::shared::metric_domain::MetricDomain;
use contracts::shared::periods::PeriodSpec;
use contracts::shared::timeseries::{Metric, TimeseriesPoint};
use sea_orm::DatabaseConnection;

use crate::shared::dashboard_context::DashboardContext;
use crate::shared::data::etl_tables;
use crate::shared::timeseries::window_series;

/// Get the zero-anchored chart of a domain for the selected period.
///
/// Fails only for an unknown period label (`PeriodError` inside the error);
/// a missing timeseries table yields an empty chart.
pub async fn get_period_chart(
    db: &DatabaseConnection,
    request: PeriodChartRequest,
) -> Result<PeriodChartResponse> {
    let ctx = DashboardContext::load(db).await;
    let period = ctx.resolve(&request.period)?;

    let points = etl_tables::load_timeseries(db, request.domain)
        .await
        .unwrap_or_else(|e| {
            tracing::warn!(
                "D100 Dashboard: no timeseries for {}: {e:#}",
                request.domain.display_name()
            );
            Vec::new()
        });

    Ok(build_period_chart(
        request.domain,
        request.metric,
        &period,
        &points,
        ctx.run_time,
    ))
}

/// Assemble the response from already loaded data
pub fn build_period_chart(
    domain: MetricDomain,
    metric: Metric,
    period: &PeriodSpec,
    points: &[TimeseriesPoint],
    run_time: DateTime<Utc>,
) -> PeriodChartResponse {
    let series = window_series(points, period, metric);
    let period_total = series.period_total();

    PeriodChartResponse {
        domain,
        metric,
        label: period.label.clone(),
        suffix: period.kind,
        start: period.start,
        end: period.end,
        frequency: period.target_frequency,
        run_time,
        points: series.points,
        period_total,
    }
}
