use axum::http::StatusCode;

use crate::shared::periods::PeriodError;

// Period selector
pub mod periods;

// Dashboard handlers (d100-d102)
pub mod d100_period_chart;
pub mod d101_period_leaderboard;
pub mod d102_period_detail;

/// Unknown period labels are the caller's mistake; anything else is ours.
pub(crate) fn status_for(err: &anyhow::Error) -> StatusCode {
    match err.downcast_ref::<PeriodError>() {
        Some(PeriodError::UnknownPeriod(_)) => StatusCode::NOT_FOUND,
        None => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_for_unknown_period() {
        let err = anyhow::Error::new(PeriodError::UnknownPeriod("Last Decade".into()));
        assert_eq!(status_for(&err), StatusCode::NOT_FOUND);

        let err = anyhow::anyhow!("database is locked");
        assert_eq!(status_for(&err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
