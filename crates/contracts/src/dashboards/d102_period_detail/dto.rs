use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::metric_domain::MetricDomain;
use crate::shared::periods::PeriodKind;

/// Request for the period detail feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodDetailRequest {
    pub domain: MetricDomain,
    /// Period label as shown in the selector
    pub period: String,
}

/// Response for the period detail feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodDetailResponse {
    pub domain: MetricDomain,
    pub label: String,
    pub suffix: PeriodKind,
    /// Set for YTD and all-time, which only return the most valuable rows
    pub top_limit: Option<usize>,
    pub rows: Vec<DetailRow>,
}

/// One drop or PvP event inside the period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailRow {
    pub timestamp: Option<DateTime<Utc>>,
    pub username: String,
    /// Item received (valuable drops only)
    pub item_name: Option<String>,
    /// Other side of the fight (PvP only)
    pub opponent: Option<String>,
    pub item_value: f64,
    pub value_display: String,
}
