use chrono::{DateTime, Datelike, Local, Utc};
use serde::Serialize;

use super::log_entity::{LogEntity, LogLevel};

/// Inclusive timestamp bounds. Either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimestampRange {
    pub gte: Option<DateTime<Utc>>,
    pub lte: Option<DateTime<Utc>>,
}

impl TimestampRange {
    pub fn between(gte: DateTime<Utc>, lte: DateTime<Utc>) -> Self {
        Self {
            gte: Some(gte),
            lte: Some(lte),
        }
    }

    pub fn since(gte: DateTime<Utc>) -> Self {
        Self {
            gte: Some(gte),
            lte: None,
        }
    }

    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.gte.map_or(true, |gte| ts >= gte) && self.lte.map_or(true, |lte| ts <= lte)
    }
}

/// Store-native predicate over log records. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilter {
    /// Case-insensitive literal substring of the application name.
    pub app_name: Option<String>,
    pub user_id: Option<i64>,
    pub log_id: Option<i64>,
    pub level: Option<LogLevel>,
    pub timestamp: TimestampRange,
}

impl LogFilter {
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_timestamp(mut self, range: TimestampRange) -> Self {
        self.timestamp = range;
        self
    }

    pub fn matches(&self, log: &LogEntity) -> bool {
        if let Some(needle) = &self.app_name {
            if !log.app_name.to_lowercase().contains(&needle.to_lowercase()) {
                return false;
            }
        }
        if self.user_id.is_some_and(|id| id != log.user_id) {
            return false;
        }
        if self.log_id.is_some_and(|id| id != log.log_id) {
            return false;
        }
        if self.level.is_some_and(|level| level != log.level()) {
            return false;
        }
        self.timestamp.contains(log.timestamp())
    }
}

/// Sort order applied by `find`. Only newest-first is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSort {
    TimestampDesc,
}

/// Field (or derived field) a grouped count is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    Level,
    AppName,
    /// Local weekday of the timestamp, 1 = Sunday .. 7 = Saturday.
    DayOfWeek,
}

impl GroupKey {
    pub fn extract(&self, log: &LogEntity) -> GroupValue {
        match self {
            GroupKey::Level => GroupValue::Text(log.level().as_code().to_string()),
            GroupKey::AppName => GroupValue::Text(log.app_name.clone()),
            GroupKey::DayOfWeek => GroupValue::Number(
                log.timestamp()
                    .with_timezone(&Local)
                    .weekday()
                    .number_from_sunday() as i64,
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum GroupValue {
    Number(i64),
    Text(String),
}

/// One bucket of a grouped count, serialized as `{"_id": .., "count": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    #[serde(rename = "_id")]
    pub key: GroupValue,
    pub count: u64,
}
