use anyhow::Result;
use contracts::dashboards::d101_period_leaderboard::{
    LeaderboardRow, PeriodLeaderboardRequest, PeriodLeaderboardResponse,
};
use sea_orm::DatabaseConnection;
use std::cmp::Ordering;

use crate::shared::dashboard_context::DashboardContext;
use crate::shared::data::etl_tables::{self, SummaryRow};
use crate::shared::format::format_gp;

/// Get the players active in the selected period, best first
pub async fn get_period_leaderboard(
    db: &DatabaseConnection,
    request: PeriodLeaderboardRequest,
) -> Result<PeriodLeaderboardResponse> {
    let ctx = DashboardContext::load(db).await;
    let period = ctx.resolve(&request.period)?;

    let summary = etl_tables::load_period_summary(db, request.domain, period.kind)
        .await
        .unwrap_or_else(|e| {
            tracing::warn!(
                "D101 Dashboard: no {} summary for {}: {e:#}",
                request.domain.display_name(),
                period.suffix()
            );
            Vec::new()
        });

    Ok(PeriodLeaderboardResponse {
        domain: request.domain,
        label: period.label,
        suffix: period.kind,
        rows: rank_leaderboard(summary, request.limit),
    })
}

/// Drop inactive rows, sort by value then count (both descending), then by name.
pub fn rank_leaderboard(rows: Vec<SummaryRow>, limit: Option<usize>) -> Vec<LeaderboardRow> {
    let mut ranked: Vec<LeaderboardRow> = rows
        .into_iter()
        .filter(|r| r.count > 0.0)
        .filter_map(|r| {
            let username = r.username.filter(|u| !u.trim().is_empty())?;
            Some(LeaderboardRow {
                username,
                value: r.value,
                count: r.count as i64,
                value_display: format_gp(r.value),
            })
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.count.cmp(&a.count))
            .then_with(|| a.username.cmp(&b.username))
    });

    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    ranked
}
