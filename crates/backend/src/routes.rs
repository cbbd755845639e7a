use axum::{routing::get, Router};

use crate::api::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Period selector shared by every page
        .route("/api/periods", get(handlers::periods::get_period_options))
        // D100 Period chart
        .route(
            "/api/d100/chart",
            get(handlers::d100_period_chart::get_period_chart),
        )
        // D101 Period leaderboard
        .route(
            "/api/d101/leaderboard",
            get(handlers::d101_period_leaderboard::get_period_leaderboard),
        )
        // D102 Period detail feed
        .route(
            "/api/d102/detail",
            get(handlers::d102_period_detail::get_period_detail),
        )
}
