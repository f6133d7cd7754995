//! Log API DTOs

use serde::Deserialize;

/// Query string of `GET /logs`.
///
/// Every field arrives as raw text so malformed values can be echoed back in
/// validation errors. Empty strings count as absent.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct LogListQuery {
    #[serde(rename = "AppName", alias = "appName")]
    pub app_name: Option<String>,
    #[serde(rename = "UserId", alias = "userId")]
    pub user_id: Option<String>,
    #[serde(rename = "LogId", alias = "logId")]
    pub log_id: Option<String>,
    #[serde(rename = "Level", alias = "level")]
    pub level: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Query string of `GET /logs/stats`.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct LogStatsQuery {
    #[serde(rename = "AppName", alias = "appName")]
    pub app_name: Option<String>,
    #[serde(rename = "Level", alias = "level")]
    pub level: Option<String>,
    pub week: Option<String>,
}
