use contracts::shared::periods::{PeriodKind, PeriodOption};

use super::error::PeriodError;
use crate::shared::dashboard_config::DashboardConfig;

/// Period selector entries, in display order, with their clan-configured labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodOptions {
    options: Vec<PeriodOption>,
}

impl PeriodOptions {
    pub fn from_config(config: &DashboardConfig) -> Self {
        let options = PeriodKind::ORDERED
            .into_iter()
            .map(|kind| PeriodOption {
                label: config.label_for(kind).to_string(),
                suffix: kind,
            })
            .collect();
        Self { options }
    }

    /// Map a selector label back to its period.
    ///
    /// Labels are matched exactly; if two periods share a label the earlier
    /// one in display order wins.
    pub fn kind_for_label(&self, label: &str) -> Result<PeriodKind, PeriodError> {
        self.options
            .iter()
            .find(|o| o.label == label)
            .map(|o| o.suffix)
            .ok_or_else(|| PeriodError::UnknownPeriod(label.to_string()))
    }

    pub fn into_vec(self) -> Vec<PeriodOption> {
        self.options
    }
}
