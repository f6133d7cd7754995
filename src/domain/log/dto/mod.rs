pub mod dashboard_stats;
