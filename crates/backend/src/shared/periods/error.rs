use thiserror::Error;

/// Failure to turn a selector label into a period window
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    #[error("Unknown period: {0}")]
    UnknownPeriod(String),
}
