use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timeseries::SamplingFrequency;

/// Reporting period offered by every dashboard page.
///
/// Serialized as its column suffix (`Prev_Week`, `YTD`, ...), the same key the
/// ETL uses for `Value_<suffix>` / `Count_<suffix>` summary columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodKind {
    #[serde(rename = "Custom_Days")]
    CustomDays,
    #[serde(rename = "Prev_Week")]
    PrevWeek,
    #[serde(rename = "Prev_Month")]
    PrevMonth,
    #[serde(rename = "YTD")]
    Ytd,
    #[serde(rename = "All_Time")]
    AllTime,
}

impl PeriodKind {
    /// Display order of the period selector.
    pub const ORDERED: [PeriodKind; 5] = [
        PeriodKind::CustomDays,
        PeriodKind::PrevWeek,
        PeriodKind::PrevMonth,
        PeriodKind::Ytd,
        PeriodKind::AllTime,
    ];

    pub fn suffix(&self) -> &'static str {
        match self {
            PeriodKind::CustomDays => "Custom_Days",
            PeriodKind::PrevWeek => "Prev_Week",
            PeriodKind::PrevMonth => "Prev_Month",
            PeriodKind::Ytd => "YTD",
            PeriodKind::AllTime => "All_Time",
        }
    }

    /// Label used when the clan config does not override it.
    pub fn default_label(&self) -> &'static str {
        match self {
            PeriodKind::CustomDays => "Last 14 Days",
            PeriodKind::PrevWeek => "Previous Week",
            PeriodKind::PrevMonth => "Previous Month",
            PeriodKind::Ytd => "Year-to-Date",
            PeriodKind::AllTime => "All-Time",
        }
    }
}

/// A period resolved against a run time.
///
/// `start`/`end` form the half-open window `[start, end)`; both are `None`
/// for the unbounded all-time period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSpec {
    pub label: String,
    #[serde(rename = "suffix")]
    pub kind: PeriodKind,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub target_frequency: SamplingFrequency,
}

impl PeriodSpec {
    pub fn suffix(&self) -> &'static str {
        self.kind.suffix()
    }
}

/// One entry of the period selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodOption {
    pub label: String,
    pub suffix: PeriodKind,
}

/// GET /api/periods
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodOptionsResponse {
    /// Timestamp of the last ETL run all periods are resolved against.
    pub run_time: DateTime<Utc>,
    pub options: Vec<PeriodOption>,
}
