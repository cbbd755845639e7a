pub mod metric_domain;
pub mod periods;
pub mod timeseries;
