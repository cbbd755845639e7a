use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use contracts::shared::periods::{PeriodKind, PeriodSpec};
use contracts::shared::timeseries::SamplingFrequency;

use super::error::PeriodError;
use super::options::PeriodOptions;
use crate::shared::dashboard_config::DashboardConfig;

/// Lookbacks up to this many days are charted from the 6-hourly series.
pub const SIX_HOURLY_MAX_LOOKBACK_DAYS: u32 = 14;

/// Resolve a selector label against `run_time`.
///
/// `run_time` is the timestamp of the last ETL run (or now, when unknown).
pub fn resolve_period(
    label: &str,
    run_time: DateTime<Utc>,
    config: &DashboardConfig,
    options: &PeriodOptions,
) -> Result<PeriodSpec, PeriodError> {
    let kind = options.kind_for_label(label)?;
    Ok(resolve_kind(kind, label, run_time, config))
}

/// Compute the window and sampling frequency of a known period.
pub fn resolve_kind(
    kind: PeriodKind,
    label: &str,
    run_time: DateTime<Utc>,
    config: &DashboardConfig,
) -> PeriodSpec {
    let (start, end, target_frequency) = match kind {
        PeriodKind::CustomDays => {
            let days = config.custom_lookback_days;
            let frequency = if days <= SIX_HOURLY_MAX_LOOKBACK_DAYS {
                SamplingFrequency::SixHourly
            } else {
                SamplingFrequency::Daily
            };
            // Lookbacks past the calendar's range start at its first day.
            let start = run_time
                .checked_sub_signed(Duration::days(i64::from(days)))
                .map_or(DateTime::<Utc>::MIN_UTC, midnight);
            (Some(start), Some(run_time), frequency)
        }
        PeriodKind::PrevWeek => {
            let end = start_of_week(run_time, config);
            (
                Some(end - Duration::days(7)),
                Some(end),
                SamplingFrequency::Daily,
            )
        }
        PeriodKind::PrevMonth => {
            let this_month = first_of_month(run_time.date_naive());
            let prev_month = first_of_month(this_month - Duration::days(1));
            (
                Some(at_midnight(prev_month)),
                Some(at_midnight(this_month)),
                SamplingFrequency::Daily,
            )
        }
        PeriodKind::Ytd => {
            let date = run_time.date_naive();
            let jan_first = date - Duration::days(i64::from(date.ordinal0()));
            (
                Some(at_midnight(jan_first)),
                Some(run_time),
                SamplingFrequency::Weekly,
            )
        }
        PeriodKind::AllTime => (None, None, SamplingFrequency::Weekly),
    };

    PeriodSpec {
        label: label.to_string(),
        kind,
        start,
        end,
        target_frequency,
    }
}

/// Midnight of the most recent configured week-start day (today included).
fn start_of_week(run_time: DateTime<Utc>, config: &DashboardConfig) -> DateTime<Utc> {
    let today = run_time.weekday().num_days_from_monday();
    let week_start = config.week_start_day.num_days_from_monday();
    let days_since = (today + 7 - week_start) % 7;
    midnight(run_time - Duration::days(i64::from(days_since)))
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

fn midnight(t: DateTime<Utc>) -> DateTime<Utc> {
    at_midnight(t.date_naive())
}

fn at_midnight(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}
