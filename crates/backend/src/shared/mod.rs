pub mod config;
pub mod dashboard_config;
pub mod dashboard_context;
pub mod data;
pub mod format;
pub mod periods;
pub mod timeseries;
