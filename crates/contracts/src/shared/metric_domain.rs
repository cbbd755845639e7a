use serde::{Deserialize, Serialize};

use super::periods::PeriodKind;

/// Metric families the ETL publishes cumulative timeseries and period summaries for.
///
/// Closed set: table names are derived from it, never from request strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricDomain {
    ValuableDrops,
    PvpKills,
    PvpDeaths,
}

impl MetricDomain {
    pub fn table_prefix(&self) -> &'static str {
        match self {
            MetricDomain::ValuableDrops => "valuable_drops",
            MetricDomain::PvpKills => "pvp_kills",
            MetricDomain::PvpDeaths => "pvp_deaths",
        }
    }

    pub fn timeseries_table(&self) -> String {
        format!("{}_timeseries", self.table_prefix())
    }

    pub fn summary_table(&self) -> String {
        format!("{}_summary", self.table_prefix())
    }

    /// Per-event rows of one period, e.g. `valuable_drops_detail_prev_week`.
    pub fn detail_table(&self, period: PeriodKind) -> String {
        format!(
            "{}_detail_{}",
            self.table_prefix(),
            period.suffix().to_lowercase()
        )
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MetricDomain::ValuableDrops => "Valuable Drops",
            MetricDomain::PvpKills => "PvP Kills",
            MetricDomain::PvpDeaths => "PvP Deaths",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_names() {
        assert_eq!(
            MetricDomain::ValuableDrops.timeseries_table(),
            "valuable_drops_timeseries"
        );
        assert_eq!(MetricDomain::PvpDeaths.summary_table(), "pvp_deaths_summary");
        assert_eq!(
            MetricDomain::ValuableDrops.detail_table(PeriodKind::PrevWeek),
            "valuable_drops_detail_prev_week"
        );
        assert_eq!(
            MetricDomain::PvpKills.detail_table(PeriodKind::Ytd),
            "pvp_kills_detail_ytd"
        );
    }

    #[test]
    fn test_deserialize_from_query_value() {
        let domain: MetricDomain = serde_json::from_str("\"pvp_kills\"").unwrap();
        assert_eq!(domain, MetricDomain::PvpKills);
        assert!(serde_json::from_str::<MetricDomain>("\"bingo\"").is_err());
    }
}
