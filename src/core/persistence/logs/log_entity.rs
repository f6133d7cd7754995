use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a log record.
///
/// Variants are declared in name order so `Ord` sorts like the level codes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Error,
    Info,
    Warn,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [Self::Info, Self::Error, Self::Warn, Self::Debug];

    pub fn from_code<S: AsRef<str>>(code: S) -> Option<Self> {
        match code.as_ref().trim().to_lowercase().as_str() {
            "info" => Some(Self::Info),
            "error" => Some(Self::Error),
            "warn" => Some(Self::Warn),
            "debug" => Some(Self::Debug),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Debug => "debug",
        }
    }
}

/// Free-form payload: either plain text or a JSON object.
///
/// Arrays, null and scalar JSON values are rejected when deserializing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum LogDetails {
    Text(String),
    Object(serde_json::Map<String, serde_json::Value>),
}

/// The nested `Log` part of a stored document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogBody {
    #[serde(rename = "Level")]
    pub level: LogLevel,
    #[serde(rename = "TimeStamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "Details")]
    pub details: LogDetails,
}

/// A persisted log record. Immutable once inserted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogEntity {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "AppName")]
    pub app_name: String,
    #[serde(rename = "LogId")]
    pub log_id: i64,
    #[serde(rename = "UserId")]
    pub user_id: i64,
    #[serde(rename = "Log")]
    pub log: LogBody,
}

impl LogEntity {
    /// Builds a record with a freshly generated id.
    pub fn new(
        app_name: impl Into<String>,
        log_id: i64,
        user_id: i64,
        level: LogLevel,
        timestamp: DateTime<Utc>,
        details: LogDetails,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            app_name: app_name.into(),
            log_id,
            user_id,
            log: LogBody {
                level,
                timestamp,
                details,
            },
        }
    }

    pub fn level(&self) -> LogLevel {
        self.log.level
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.log.timestamp
    }
}
