use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::api::dto::log_dto::LogListQuery;
use crate::api::dto::paginated_response::PaginatedResponse;
use crate::core::persistence::logs::log_entity::LogEntity;
use crate::core::persistence::logs::log_filter::LogSort;
use crate::core::persistence::logs::log_repository::LogRepository;
use crate::domain::common::domain_error::DomainError;

use super::log_filter_builder::{build_log_filter, parse_pagination};

/// Filtered, paginated access to stored logs.
pub struct LogService<R: LogRepository> {
    repo: Arc<R>,
}

impl<R: LogRepository> LogService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Newest first. `total` comes from a separate count and may drift from
    /// the page contents under concurrent inserts.
    pub async fn list_logs(&self, query: LogListQuery) -> Result<PaginatedResponse<LogEntity>> {
        let filter = build_log_filter(&query)?;
        let (page, limit) = parse_pagination(&query)?;
        let skip = (page - 1).saturating_mul(limit);

        let data = self
            .repo
            .find(&filter, LogSort::TimestampDesc, skip, Some(limit))
            .await?;
        let total = self.repo.count(&filter).await?;

        debug!(page, limit, total, returned = data.len(), "Listed logs");
        Ok(PaginatedResponse::new(data, total, page, limit))
    }

    pub async fn get_log(&self, id: &str) -> Result<LogEntity> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Log").into())
    }
}
