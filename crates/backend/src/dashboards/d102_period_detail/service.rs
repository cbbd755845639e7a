use anyhow::Result;
use contracts::dashboards::d102_period_detail::{
    DetailRow, PeriodDetailRequest, PeriodDetailResponse,
};
use contracts::shared::periods::PeriodKind;
use sea_orm::DatabaseConnection;

use crate::shared::dashboard_context::DashboardContext;
use crate::shared::data::etl_tables::{self, DetailEvent};
use crate::shared::format::format_gp;

/// Get the drop / PvP events of the selected period
pub async fn get_period_detail(
    db: &DatabaseConnection,
    request: PeriodDetailRequest,
) -> Result<PeriodDetailResponse> {
    let ctx = DashboardContext::load(db).await;
    let period = ctx.resolve(&request.period)?;

    let events = etl_tables::load_period_detail(db, request.domain, period.kind)
        .await
        .unwrap_or_else(|e| {
            tracing::warn!(
                "D102 Dashboard: no {} detail for {}: {e:#}",
                request.domain.display_name(),
                period.suffix()
            );
            Vec::new()
        });

    let top_limit = top_limit_for(period.kind, ctx.config.top_drops_limit);

    Ok(PeriodDetailResponse {
        domain: request.domain,
        label: period.label,
        suffix: period.kind,
        top_limit,
        rows: select_detail_rows(events, top_limit),
    })
}

/// YTD and all-time feeds are too long to list; they keep only the top rows.
pub fn top_limit_for(kind: PeriodKind, top_drops_limit: usize) -> Option<usize> {
    match kind {
        PeriodKind::Ytd | PeriodKind::AllTime => Some(top_drops_limit),
        PeriodKind::CustomDays | PeriodKind::PrevWeek | PeriodKind::PrevMonth => None,
    }
}

/// Without a limit rows stay in table order; with one, the most valuable
/// `limit` rows are returned, highest first.
pub fn select_detail_rows(events: Vec<DetailEvent>, top_limit: Option<usize>) -> Vec<DetailRow> {
    let mut rows: Vec<DetailRow> = events
        .into_iter()
        .map(|e| DetailRow {
            timestamp: e.timestamp,
            username: e.username.unwrap_or_default(),
            item_name: e.item_name,
            opponent: e.opponent,
            item_value: e.item_value,
            value_display: format_gp(e.item_value),
        })
        .collect();

    if let Some(limit) = top_limit {
        rows.sort_by(|a, b| b.item_value.total_cmp(&a.item_value));
        rows.truncate(limit);
    }
    rows
}
