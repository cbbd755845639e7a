use serde::{Deserialize, Serialize};

use crate::shared::metric_domain::MetricDomain;
use crate::shared::periods::PeriodKind;

/// Request for the period leaderboard dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodLeaderboardRequest {
    pub domain: MetricDomain,
    /// Period label as shown in the selector
    pub period: String,
    /// Keep only the first `limit` rows (MVP cards)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Response for the period leaderboard dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodLeaderboardResponse {
    pub domain: MetricDomain,
    pub label: String,
    pub suffix: PeriodKind,
    /// Rows with a non-zero count, best first
    pub rows: Vec<LeaderboardRow>,
}

/// Single player row of a period leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub username: String,
    /// `Value_<suffix>` column
    pub value: f64,
    /// `Count_<suffix>` column
    pub count: i64,
    /// Value formatted for display (e.g. "1,234,567 gp")
    pub value_display: String,
}
