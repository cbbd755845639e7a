use chrono::{DateTime, Duration, Utc};
use contracts::shared::periods::PeriodSpec;
use contracts::shared::timeseries::{ChartPoint, Metric, TimeseriesPoint, WindowedSeries};

/// Offset of the synthetic zero point before the first weekly all-time sample.
pub const ALL_TIME_ANCHOR_OFFSET_DAYS: i64 = 7;

/// Turn a cumulative multi-frequency table into the series charted for `period`.
///
/// Only rows at the period's target frequency are used. Bounded periods yield
/// the change since `start` (value minus the last cumulative value before the
/// window) prefixed with `(start, 0)`; the all-time period yields the raw
/// running total prefixed with a zero a week before the first sample.
///
/// No rows at the target frequency gives an empty series. Deltas are not
/// clamped, so a non-monotonic source produces negative values.
pub fn window_series(
    points: &[TimeseriesPoint],
    period: &PeriodSpec,
    metric: Metric,
) -> WindowedSeries {
    let mut rows: Vec<&TimeseriesPoint> = points
        .iter()
        .filter(|p| p.frequency == period.target_frequency)
        .collect();

    if rows.is_empty() {
        return WindowedSeries::empty();
    }

    // Stable: rows sharing a timestamp keep their table order.
    rows.sort_by_key(|p| p.timestamp);

    match period.start {
        Some(start) => bounded(&rows, start, period.end, metric),
        None => all_time(&rows, metric),
    }
}

fn bounded(
    rows: &[&TimeseriesPoint],
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
    metric: Metric,
) -> WindowedSeries {
    let cut = rows.partition_point(|p| p.timestamp < start);
    let baseline = cut
        .checked_sub(1)
        .and_then(|i| rows.get(i))
        .map_or(0.0, |p| p.metric(metric));

    let mut points = vec![ChartPoint::new(start, 0.0)];
    points.extend(
        rows[cut..]
            .iter()
            .take_while(|p| end.map_or(true, |end| p.timestamp < end))
            .map(|p| ChartPoint::new(p.timestamp, p.metric(metric) - baseline)),
    );

    WindowedSeries { points }
}

fn all_time(rows: &[&TimeseriesPoint], metric: Metric) -> WindowedSeries {
    let Some(first) = rows.first() else {
        return WindowedSeries::empty();
    };

    let anchor = first.timestamp - Duration::days(ALL_TIME_ANCHOR_OFFSET_DAYS);
    let mut points = Vec::with_capacity(rows.len() + 1);
    points.push(ChartPoint::new(anchor, 0.0));
    points.extend(
        rows.iter()
            .map(|p| ChartPoint::new(p.timestamp, p.metric(metric))),
    );

    WindowedSeries { points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use contracts::shared::periods::PeriodKind;
    use contracts::shared::timeseries::SamplingFrequency;

    fn origin() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, 0, 0, 0).unwrap()
    }

    /// Day offset from `origin()`.
    fn day(n: i64) -> DateTime<Utc> {
        origin() + Duration::days(n)
    }

    fn row(t: DateTime<Utc>, frequency: SamplingFrequency, value: f64, count: f64) -> TimeseriesPoint {
        TimeseriesPoint {
            timestamp: t,
            frequency,
            cumulative_value: value,
            cumulative_count: count,
        }
    }

    fn daily(n: i64, value: f64) -> TimeseriesPoint {
        row(day(n), SamplingFrequency::Daily, value, 0.0)
    }

    fn bounded_spec(start: i64, end: i64) -> PeriodSpec {
        PeriodSpec {
            label: "Previous Week".to_string(),
            kind: PeriodKind::PrevWeek,
            start: Some(day(start)),
            end: Some(day(end)),
            target_frequency: SamplingFrequency::Daily,
        }
    }

    fn all_time_spec() -> PeriodSpec {
        PeriodSpec {
            label: "All-Time".to_string(),
            kind: PeriodKind::AllTime,
            start: None,
            end: None,
            target_frequency: SamplingFrequency::Weekly,
        }
    }

    fn values(series: &WindowedSeries) -> Vec<(DateTime<Utc>, f64)> {
        series.points.iter().map(|p| (p.timestamp, p.value)).collect()
    }

    #[test]
    fn test_baseline_from_last_point_before_start() {
        let table = vec![daily(-2, 10.0), daily(-1, 15.0), daily(1, 25.0), daily(3, 40.0)];

        let series = window_series(&table, &bounded_spec(0, 2), Metric::Value);

        assert_eq!(values(&series), vec![(day(0), 0.0), (day(1), 10.0)]);
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let table = vec![daily(3, 40.0), daily(1, 25.0), daily(-1, 15.0), daily(-2, 10.0)];

        let series = window_series(&table, &bounded_spec(0, 4), Metric::Value);

        assert_eq!(
            values(&series),
            vec![(day(0), 0.0), (day(1), 10.0), (day(3), 25.0)]
        );
    }

    #[test]
    fn test_no_history_before_start_uses_zero_baseline() {
        let table = vec![daily(1, 7.0), daily(2, 9.0)];

        let series = window_series(&table, &bounded_spec(0, 5), Metric::Value);

        assert_eq!(
            values(&series),
            vec![(day(0), 0.0), (day(1), 7.0), (day(2), 9.0)]
        );
    }

    #[test]
    fn test_window_is_half_open() {
        let table = vec![daily(-1, 5.0), daily(0, 8.0), daily(2, 12.0)];

        let series = window_series(&table, &bounded_spec(0, 2), Metric::Value);

        // The real point at `start` follows the synthetic anchor; `end` is excluded.
        assert_eq!(values(&series), vec![(day(0), 0.0), (day(0), 3.0)]);
    }

    #[test]
    fn test_anchor_added_even_without_points_in_window() {
        let table = vec![daily(-3, 5.0), daily(9, 8.0)];

        let series = window_series(&table, &bounded_spec(0, 7), Metric::Value);

        assert_eq!(values(&series), vec![(day(0), 0.0)]);
    }

    #[test]
    fn test_only_target_frequency_is_used() {
        let table = vec![
            row(day(-1), SamplingFrequency::Weekly, 1000.0, 0.0),
            daily(-1, 10.0),
            row(day(1), SamplingFrequency::SixHourly, 500.0, 0.0),
            daily(1, 30.0),
        ];

        let series = window_series(&table, &bounded_spec(0, 2), Metric::Value);

        assert_eq!(values(&series), vec![(day(0), 0.0), (day(1), 20.0)]);
    }

    #[test]
    fn test_missing_frequency_gives_empty_series() {
        let table = vec![row(day(1), SamplingFrequency::Weekly, 10.0, 1.0)];

        assert!(window_series(&table, &bounded_spec(0, 2), Metric::Value).is_empty());
        assert!(window_series(&[], &bounded_spec(0, 2), Metric::Value).is_empty());
        assert!(window_series(&[], &all_time_spec(), Metric::Value).is_empty());
    }

    #[test]
    fn test_count_metric_shares_window_logic() {
        let table = vec![
            row(day(-1), SamplingFrequency::Daily, 100.0, 4.0),
            row(day(1), SamplingFrequency::Daily, 900.0, 6.0),
        ];

        let series = window_series(&table, &bounded_spec(0, 2), Metric::Count);

        assert_eq!(values(&series), vec![(day(0), 0.0), (day(1), 2.0)]);
    }

    #[test]
    fn test_baseline_tie_uses_last_row_in_table_order() {
        let table = vec![daily(-1, 10.0), daily(-1, 12.0), daily(1, 20.0)];

        let series = window_series(&table, &bounded_spec(0, 2), Metric::Value);

        assert_eq!(values(&series), vec![(day(0), 0.0), (day(1), 8.0)]);
    }

    #[test]
    fn test_negative_deltas_are_not_clamped() {
        let table = vec![daily(-1, 50.0), daily(1, 30.0)];

        let series = window_series(&table, &bounded_spec(0, 2), Metric::Value);

        assert_eq!(values(&series), vec![(day(0), 0.0), (day(1), -20.0)]);
    }

    #[test]
    fn test_open_ended_window() {
        let table = vec![daily(-1, 5.0), daily(1, 6.0), daily(300, 9.0)];
        let mut spec = bounded_spec(0, 2);
        spec.end = None;

        let series = window_series(&table, &spec, Metric::Value);

        assert_eq!(
            values(&series),
            vec![(day(0), 0.0), (day(1), 1.0), (day(300), 4.0)]
        );
    }

    #[test]
    fn test_all_time_keeps_raw_totals_with_anchor_week_before() {
        let table = vec![
            row(day(14), SamplingFrequency::Weekly, 30.0, 3.0),
            row(day(7), SamplingFrequency::Weekly, 10.0, 1.0),
            daily(8, 99.0),
        ];

        let series = window_series(&table, &all_time_spec(), Metric::Value);

        assert_eq!(
            values(&series),
            vec![(day(0), 0.0), (day(7), 10.0), (day(14), 30.0)]
        );

        let counts = window_series(&table, &all_time_spec(), Metric::Count);
        assert_eq!(
            values(&counts),
            vec![(day(0), 0.0), (day(7), 1.0), (day(14), 3.0)]
        );
    }

    #[test]
    fn test_bounded_series_start_at_zero_and_stay_monotonic() {
        let table: Vec<TimeseriesPoint> = (-10..20)
            .map(|n| daily(n, f64::from((n + 10) as i32 * 3)))
            .collect();

        for (start, end) in [(0, 7), (-20, 5), (5, 6), (15, 40)] {
            let series = window_series(&table, &bounded_spec(start, end), Metric::Value);
            assert_eq!(series.points[0].value, 0.0);
            assert_eq!(series.points[0].timestamp, day(start));
            assert!(series.points.windows(2).all(|w| w[0].value <= w[1].value));
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let table = vec![daily(-2, 10.0), daily(1, 25.0), daily(2, 31.0)];
        let spec = bounded_spec(0, 3);

        let first = window_series(&table, &spec, Metric::Value);
        let second = window_series(&table, &spec, Metric::Value);

        assert_eq!(first, second);
        assert_eq!(table.len(), 3);
    }
}
