use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, error};

use crate::core::util::group_by::group_by;

use super::log_entity::LogEntity;
use super::log_filter::{GroupCount, GroupKey, LogFilter, LogSort};
use super::log_fs_adapter::LogFsAdapterTrait;

/// Queryable store of log records.
///
/// `count` and `find` are independent reads; callers must not assume they
/// observe the same snapshot.
#[async_trait]
pub trait LogRepository: Send + Sync {
    async fn find(
        &self,
        filter: &LogFilter,
        sort: LogSort,
        skip: usize,
        limit: Option<usize>,
    ) -> Result<Vec<LogEntity>>;

    async fn count(&self, filter: &LogFilter) -> Result<u64>;

    async fn find_by_id(&self, id: &str) -> Result<Option<LogEntity>>;

    /// Grouped count of matching records, sorted by key ascending.
    async fn aggregate_counts(&self, filter: &LogFilter, key: GroupKey) -> Result<Vec<GroupCount>>;

    async fn insert_many(&self, logs: Vec<LogEntity>) -> Result<usize>;

    async fn clear(&self) -> Result<()>;
}

/// In-memory record set, optionally written through to a file adapter.
pub struct LogRepositoryImpl {
    records: RwLock<Vec<LogEntity>>,
    adapter: Option<Box<dyn LogFsAdapterTrait>>,
}

impl LogRepositoryImpl {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            adapter: None,
        }
    }

    /// Loads existing records from `adapter` and persists future inserts to it.
    pub fn with_adapter(adapter: Box<dyn LogFsAdapterTrait>) -> Result<Self> {
        let records = adapter.load_all().map_err(|err| {
            error!(error = %err, "Failed to load persisted logs");
            err
        })?;
        Ok(Self {
            records: RwLock::new(records),
            adapter: Some(adapter),
        })
    }
}

impl Default for LogRepositoryImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogRepository for LogRepositoryImpl {
    async fn find(
        &self,
        filter: &LogFilter,
        sort: LogSort,
        skip: usize,
        limit: Option<usize>,
    ) -> Result<Vec<LogEntity>> {
        let records = self.records.read().await;
        let mut matched: Vec<&LogEntity> = records.iter().filter(|l| filter.matches(l)).collect();

        match sort {
            LogSort::TimestampDesc => matched.sort_by(|a, b| b.timestamp().cmp(&a.timestamp())),
        }

        let page = matched
            .into_iter()
            .skip(skip)
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();
        Ok(page)
    }

    async fn count(&self, filter: &LogFilter) -> Result<u64> {
        let records = self.records.read().await;
        Ok(records.iter().filter(|l| filter.matches(l)).count() as u64)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<LogEntity>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|l| l.id == id).cloned())
    }

    async fn aggregate_counts(&self, filter: &LogFilter, key: GroupKey) -> Result<Vec<GroupCount>> {
        let records = self.records.read().await;
        let buckets = group_by(records.iter().filter(|l| filter.matches(l)), |l| key.extract(l));
        Ok(buckets
            .into_iter()
            .map(|(key, count)| GroupCount { key, count })
            .collect())
    }

    async fn insert_many(&self, logs: Vec<LogEntity>) -> Result<usize> {
        let mut records = self.records.write().await;
        if let Some(adapter) = &self.adapter {
            adapter.append(&logs)?;
        }
        let inserted = logs.len();
        records.extend(logs);
        debug!(inserted, total = records.len(), "Inserted log records");
        Ok(inserted)
    }

    async fn clear(&self) -> Result<()> {
        let mut records = self.records.write().await;
        if let Some(adapter) = &self.adapter {
            adapter.truncate()?;
        }
        records.clear();
        Ok(())
    }
}
