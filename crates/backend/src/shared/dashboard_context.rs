use chrono::{DateTime, Utc};
use contracts::shared::periods::PeriodSpec;
use sea_orm::DatabaseConnection;

use super::dashboard_config::DashboardConfig;
use super::data::etl_tables;
use super::periods::{resolve_period, PeriodError, PeriodOptions};

/// Per-request inputs shared by all period-aware dashboards.
///
/// Loaded fresh for every request; storage problems degrade to defaults
/// (default config, current time) instead of failing the page.
#[derive(Debug, Clone)]
pub struct DashboardContext {
    pub config: DashboardConfig,
    pub options: PeriodOptions,
    pub run_time: DateTime<Utc>,
}

impl DashboardContext {
    pub fn new(config: DashboardConfig, run_time: DateTime<Utc>) -> Self {
        let options = PeriodOptions::from_config(&config);
        Self {
            config,
            options,
            run_time,
        }
    }

    pub async fn load(db: &DatabaseConnection) -> Self {
        let config = etl_tables::load_dashboard_config(db)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!("dashboard_config unavailable, using defaults: {e:#}");
                DashboardConfig::default()
            });

        let run_time = match etl_tables::load_run_time(db).await {
            Ok(Some(t)) => t,
            Ok(None) => {
                tracing::warn!("run_metadata has no last_updated_utc, using current time");
                Utc::now()
            }
            Err(e) => {
                tracing::warn!("run_metadata unavailable, using current time: {e:#}");
                Utc::now()
            }
        };

        Self::new(config, run_time)
    }

    pub fn resolve(&self, label: &str) -> Result<PeriodSpec, PeriodError> {
        resolve_period(label, self.run_time, &self.config, &self.options)
    }
}
