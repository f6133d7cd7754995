use std::sync::Arc;

use anyhow::Result;

use crate::config::AppConfig;
use crate::core::persistence::logs::log_fs_adapter::LogFsAdapter;
use crate::core::persistence::logs::log_repository::LogRepositoryImpl;
use crate::core::persistence::storage_path::logs_file_path;
use crate::domain::auth::service::auth_service::AuthService;
use crate::domain::common::clock::{Clock, SystemClock};
use crate::domain::log::service::log_service::LogService;
use crate::domain::log::service::log_stats_service::LogStatsService;
use crate::domain::log::service::placeholder_metrics::{
    PlaceholderMetrics, RandomPlaceholderMetrics,
};

#[derive(Clone)]
pub struct AppState {
    pub log_service: Arc<LogService<LogRepositoryImpl>>,
    pub log_stats_service: Arc<LogStatsService<LogRepositoryImpl>>,
    pub auth_service: Arc<AuthService>,
}

/// Opens the file-backed log repository under the configured data directory.
pub fn open_log_repository(config: &AppConfig) -> Result<Arc<LogRepositoryImpl>> {
    let adapter = LogFsAdapter::new(logs_file_path(&config.data_dir));
    Ok(Arc::new(LogRepositoryImpl::with_adapter(Box::new(adapter))?))
}

pub fn build_app_state(config: &AppConfig, repo: Arc<LogRepositoryImpl>) -> AppState {
    build_app_state_with(
        repo,
        Arc::new(SystemClock),
        Arc::new(RandomPlaceholderMetrics),
        &config.admin_username,
        &config.admin_password,
    )
}

pub fn build_app_state_with(
    repo: Arc<LogRepositoryImpl>,
    clock: Arc<dyn Clock>,
    placeholders: Arc<dyn PlaceholderMetrics>,
    admin_username: &str,
    admin_password: &str,
) -> AppState {
    AppState {
        log_service: Arc::new(LogService::new(repo.clone())),
        log_stats_service: Arc::new(LogStatsService::new(repo, clock, placeholders)),
        auth_service: Arc::new(AuthService::new(admin_username, admin_password)),
    }
}
