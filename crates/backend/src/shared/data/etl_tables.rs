//! Read access to the tables published by the ETL pipeline.
//!
//! Every table is owned by the pipeline and rewritten on each run; the
//! dashboard only reads. Column names follow the pipeline's pandas export
//! (`Date`, `Cumulative_Value`, `Value_<suffix>`, ...), so queries alias them
//! to the snake_case fields below.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use contracts::shared::metric_domain::MetricDomain;
use contracts::shared::periods::PeriodKind;
use contracts::shared::timeseries::{SamplingFrequency, TimeseriesPoint};
use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, Statement};

use crate::shared::dashboard_config::DashboardConfig;

// ---------------------------------------------------------------------------
// Raw rows
// ---------------------------------------------------------------------------

#[derive(Debug, FromQueryResult)]
struct TimeseriesRow {
    date: Option<String>,
    frequency: Option<String>,
    cumulative_value: f64,
    cumulative_count: f64,
}

/// One player's totals for a single period, from `<domain>_summary`.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct SummaryRow {
    pub username: Option<String>,
    pub value: f64,
    pub count: f64,
}

#[derive(Debug, FromQueryResult)]
struct DetailTableRow {
    timestamp: Option<String>,
    username: Option<String>,
    item_name: Option<String>,
    opponent: Option<String>,
    item_value: f64,
}

/// One event of a period, from `<domain>_detail_<suffix>`.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailEvent {
    pub timestamp: Option<DateTime<Utc>>,
    pub username: Option<String>,
    pub item_name: Option<String>,
    pub opponent: Option<String>,
    pub item_value: f64,
}

#[derive(Debug, FromQueryResult)]
struct RunMetadataRow {
    last_updated_utc: Option<String>,
}

#[derive(Debug, FromQueryResult)]
struct ConfigRow {
    key: Option<String>,
    value: Option<String>,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Load the cumulative timeseries of a domain, all frequencies.
///
/// Rows with an unparsable date or an unknown frequency code are skipped.
pub async fn load_timeseries(
    db: &DatabaseConnection,
    domain: MetricDomain,
) -> Result<Vec<TimeseriesPoint>> {
    let sql = format!(
        r#"
        SELECT
            CAST([Date] AS TEXT)                                AS date,
            CAST([Frequency] AS TEXT)                           AS frequency,
            COALESCE(CAST([Cumulative_Value] AS REAL), 0.0)     AS cumulative_value,
            COALESCE(CAST([Cumulative_Count] AS REAL), 0.0)     AS cumulative_count
        FROM [{}]
    "#,
        domain.timeseries_table()
    );

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql);
    let rows = TimeseriesRow::find_by_statement(stmt).all(db).await?;

    let total = rows.len();
    let points: Vec<TimeseriesPoint> = rows
        .into_iter()
        .filter_map(|row| {
            let timestamp = row.date.as_deref().and_then(parse_etl_timestamp)?;
            let frequency = row.frequency.as_deref().and_then(SamplingFrequency::from_code)?;
            Some(TimeseriesPoint {
                timestamp,
                frequency,
                cumulative_value: row.cumulative_value,
                cumulative_count: row.cumulative_count,
            })
        })
        .collect();

    if points.len() < total {
        tracing::warn!(
            "{}: skipped {} of {} rows with unreadable date or frequency",
            domain.timeseries_table(),
            total - points.len(),
            total
        );
    }

    Ok(points)
}

/// Load `Username`, `Value_<suffix>`, `Count_<suffix>` for players active in the period.
pub async fn load_period_summary(
    db: &DatabaseConnection,
    domain: MetricDomain,
    period: PeriodKind,
) -> Result<Vec<SummaryRow>> {
    let suffix = period.suffix();
    let sql = format!(
        r#"
        SELECT
            CAST([Username] AS TEXT)                            AS username,
            COALESCE(CAST([Value_{suffix}] AS REAL), 0.0)       AS value,
            COALESCE(CAST([Count_{suffix}] AS REAL), 0.0)       AS count
        FROM [{table}]
        WHERE [Count_{suffix}] > 0
    "#,
        suffix = suffix,
        table = domain.summary_table()
    );

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql);
    let rows = SummaryRow::find_by_statement(stmt).all(db).await?;
    Ok(rows)
}

/// Load the events of one period in table order.
///
/// Drop tables carry `Item_Name`, PvP tables carry `Opponent`; the column the
/// domain lacks comes back as `None`. An unparsable `Timestamp` is kept as `None`.
pub async fn load_period_detail(
    db: &DatabaseConnection,
    domain: MetricDomain,
    period: PeriodKind,
) -> Result<Vec<DetailEvent>> {
    let (item_name, opponent) = match domain {
        MetricDomain::ValuableDrops => ("CAST([Item_Name] AS TEXT)", "NULL"),
        MetricDomain::PvpKills | MetricDomain::PvpDeaths => ("NULL", "CAST([Opponent] AS TEXT)"),
    };
    let sql = format!(
        r#"
        SELECT
            CAST([Timestamp] AS TEXT)                           AS timestamp,
            CAST([Username] AS TEXT)                            AS username,
            {item_name}                                         AS item_name,
            {opponent}                                          AS opponent,
            COALESCE(CAST([Item_Value] AS REAL), 0.0)           AS item_value
        FROM [{table}]
    "#,
        item_name = item_name,
        opponent = opponent,
        table = domain.detail_table(period)
    );

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, sql);
    let rows = DetailTableRow::find_by_statement(stmt).all(db).await?;

    Ok(rows
        .into_iter()
        .map(|r| DetailEvent {
            timestamp: r.timestamp.as_deref().and_then(parse_etl_timestamp),
            username: r.username,
            item_name: r.item_name,
            opponent: r.opponent,
            item_value: r.item_value,
        })
        .collect())
}

/// Timestamp of the last successful ETL run, if recorded.
pub async fn load_run_time(db: &DatabaseConnection) -> Result<Option<DateTime<Utc>>> {
    let stmt = Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"SELECT CAST(last_updated_utc AS TEXT) AS last_updated_utc FROM run_metadata LIMIT 1"#
            .to_string(),
    );
    let row = RunMetadataRow::find_by_statement(stmt).one(db).await?;

    Ok(row
        .and_then(|r| r.last_updated_utc)
        .as_deref()
        .and_then(parse_etl_timestamp))
}

/// Parse the `dashboard_config` key/value table.
pub async fn load_dashboard_config(db: &DatabaseConnection) -> Result<DashboardConfig> {
    let stmt = Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"SELECT CAST([key] AS TEXT) AS key, CAST([value] AS TEXT) AS value FROM dashboard_config"#
            .to_string(),
    );
    let rows = ConfigRow::find_by_statement(stmt).all(db).await?;

    Ok(DashboardConfig::from_pairs(rows.into_iter().filter_map(
        |r| match (r.key, r.value) {
            (Some(key), Some(value)) => Some((key, value)),
            _ => None,
        },
    )))
}

// ---------------------------------------------------------------------------
// Timestamp parsing
// ---------------------------------------------------------------------------

/// Parse a timestamp as the pipeline writes it. Naive values are UTC.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS[.f][+HH:MM]` and bare `YYYY-MM-DD`.
pub fn parse_etl_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }
    if let Ok(t) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(t.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(t) = NaiveDateTime::parse_from_str(s, format) {
            return Some(Utc.from_utc_datetime(&t));
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| Utc.from_utc_datetime(&d.and_time(NaiveTime::MIN)))
}
