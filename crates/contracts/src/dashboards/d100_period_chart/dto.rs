use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::metric_domain::MetricDomain;
use crate::shared::periods::PeriodKind;
use crate::shared::timeseries::{ChartPoint, Metric, SamplingFrequency};

/// Request for the period chart dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodChartRequest {
    pub domain: MetricDomain,
    /// Period label as shown in the selector (e.g. "Previous Week")
    pub period: String,
    #[serde(default)]
    pub metric: Metric,
}

/// Response for the period chart dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodChartResponse {
    pub domain: MetricDomain,
    pub metric: Metric,
    pub label: String,
    pub suffix: PeriodKind,
    /// Window start, `None` for all-time
    pub start: Option<DateTime<Utc>>,
    /// Window end (exclusive), `None` for all-time
    pub end: Option<DateTime<Utc>>,
    pub frequency: SamplingFrequency,
    pub run_time: DateTime<Utc>,
    /// Zero-anchored points, empty when there is no data at the target frequency
    pub points: Vec<ChartPoint>,
    /// Largest value of `points` ("total gained in period")
    pub period_total: f64,
}
