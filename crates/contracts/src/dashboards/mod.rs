pub mod d100_period_chart;
pub mod d101_period_leaderboard;
pub mod d102_period_detail;
