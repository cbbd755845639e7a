use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Source rows (produced by the ETL pipeline)
// ---------------------------------------------------------------------------

/// Resolution at which the ETL pre-aggregates a cumulative metric.
///
/// The same logical metric is stored once per frequency, side by side in one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SamplingFrequency {
    #[serde(rename = "6H")]
    SixHourly,
    #[serde(rename = "D")]
    Daily,
    #[serde(rename = "W")]
    Weekly,
}

impl SamplingFrequency {
    /// Code stored in the `Frequency` column.
    pub fn code(&self) -> &'static str {
        match self {
            SamplingFrequency::SixHourly => "6H",
            SamplingFrequency::Daily => "D",
            SamplingFrequency::Weekly => "W",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "6H" => Some(SamplingFrequency::SixHourly),
            "D" => Some(SamplingFrequency::Daily),
            "W" => Some(SamplingFrequency::Weekly),
            _ => None,
        }
    }
}

/// Which running total of a timeseries row to chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// `Cumulative_Value` (e.g. total GP).
    #[default]
    Value,
    /// `Cumulative_Count` (e.g. number of kills).
    Count,
}

/// One row of a cumulative timeseries table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeseriesPoint {
    pub timestamp: DateTime<Utc>,
    pub frequency: SamplingFrequency,
    /// Running total from the start of recorded history through `timestamp`.
    pub cumulative_value: f64,
    pub cumulative_count: f64,
}

impl TimeseriesPoint {
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Value => self.cumulative_value,
            Metric::Count => self.cumulative_count,
        }
    }
}

// ---------------------------------------------------------------------------
// Chart output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Zero-anchored series of changes inside a period window.
///
/// When non-empty, the first point is always a synthetic zero anchor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WindowedSeries {
    pub points: Vec<ChartPoint>,
}

impl WindowedSeries {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest value in the series, 0 when empty.
    pub fn period_total(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.value)
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_frequency_codes() {
        for freq in [
            SamplingFrequency::SixHourly,
            SamplingFrequency::Daily,
            SamplingFrequency::Weekly,
        ] {
            assert_eq!(SamplingFrequency::from_code(freq.code()), Some(freq));
        }
        assert_eq!(SamplingFrequency::from_code(" D "), Some(SamplingFrequency::Daily));
        assert_eq!(SamplingFrequency::from_code("M"), None);
    }

    #[test]
    fn test_frequency_serializes_as_code() {
        let json = serde_json::to_string(&SamplingFrequency::SixHourly).unwrap();
        assert_eq!(json, "\"6H\"");
    }

    #[test]
    fn test_period_total() {
        let t = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(WindowedSeries::empty().period_total(), 0.0);

        let series = WindowedSeries {
            points: vec![
                ChartPoint::new(t, 0.0),
                ChartPoint::new(t, 120.0),
                ChartPoint::new(t, 80.0),
            ],
        };
        assert_eq!(series.period_total(), 120.0);

        let negative = WindowedSeries {
            points: vec![ChartPoint::new(t, -5.0), ChartPoint::new(t, -2.0)],
        };
        assert_eq!(negative.period_total(), -2.0);
    }
}
