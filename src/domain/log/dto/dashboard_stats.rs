use serde::Serialize;

use crate::core::persistence::logs::log_entity::LogEntity;
use crate::core::persistence::logs::log_filter::GroupCount;

/// Error count for one weekday of the selected week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTrend {
    /// 1 = Sunday .. 7 = Saturday.
    pub day_of_week: u32,
    pub day_name: &'static str,
    pub count: u64,
    /// Most recent past occurrence of this weekday relative to today,
    /// `YYYY-MM-DD`. Does not follow the selected week.
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedWeek {
    pub offset: i64,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_logs: u64,
    pub errors_today: u64,
    pub logs_by_level: Vec<GroupCount>,
    pub logs_by_app: Vec<GroupCount>,
    pub daily_trends: Vec<DailyTrend>,
    pub selected_week: SelectedWeek,
    pub recent_logs: Vec<LogEntity>,
    pub avg_response_time: u32,
    pub users_online: u32,
}
