//! Log querying, filter construction and dashboard aggregation

pub mod date_parser;
pub mod log_filter_builder;
pub mod log_seed_service;
pub mod log_service;
pub mod log_stats_service;
pub mod placeholder_metrics;
pub mod week_window;
