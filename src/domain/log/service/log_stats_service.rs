use std::sync::Arc;

use anyhow::{anyhow, Result};
use tracing::debug;

use crate::api::dto::log_dto::LogStatsQuery;
use crate::core::persistence::logs::log_entity::LogLevel;
use crate::core::persistence::logs::log_filter::{
    GroupCount, GroupKey, GroupValue, LogFilter, LogSort, TimestampRange,
};
use crate::core::persistence::logs::log_repository::LogRepository;
use crate::domain::common::clock::Clock;
use crate::domain::common::domain_error::DomainError;
use crate::domain::log::dto::dashboard_stats::{DailyTrend, DashboardStats, SelectedWeek};

use super::date_parser::local_midnight;
use super::log_filter_builder::{build_app_filter, parse_week_offset};
use super::placeholder_metrics::PlaceholderMetrics;
use super::week_window::{day_name, most_recent_prior, WeekWindow};

pub const RECENT_LOGS_LIMIT: usize = 100;

/// Dashboard summary figures.
pub struct LogStatsService<R: LogRepository> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
    placeholders: Arc<dyn PlaceholderMetrics>,
}

impl<R: LogRepository> LogStatsService<R> {
    pub fn new(
        repo: Arc<R>,
        clock: Arc<dyn Clock>,
        placeholders: Arc<dyn PlaceholderMetrics>,
    ) -> Self {
        Self {
            repo,
            clock,
            placeholders,
        }
    }

    pub async fn compute_stats(&self, query: LogStatsQuery) -> Result<DashboardStats> {
        let app_filter = build_app_filter(&query)?;
        let week_offset = parse_week_offset(&query);

        let today = self.clock.now().date_naive();
        let week = WeekWindow::for_offset(today, week_offset).ok_or_else(|| {
            DomainError::validation("Invalid week: offset out of range", week_offset.to_string())
        })?;
        let week_range = week
            .to_timestamp_range()
            .ok_or_else(|| anyhow!("week {:?} has no local representation", week))?;
        let midnight = local_midnight(today)
            .ok_or_else(|| anyhow!("local midnight of {today} does not exist"))?;

        let everything = LogFilter::default();
        let errors_since_midnight = LogFilter::default()
            .with_level(LogLevel::Error)
            .with_timestamp(TimestampRange::since(midnight));
        let errors_in_week = LogFilter::default()
            .with_level(LogLevel::Error)
            .with_timestamp(week_range);

        let (total_logs, errors_today, logs_by_level, logs_by_app, by_weekday, recent_logs) = tokio::try_join!(
            self.repo.count(&everything),
            self.repo.count(&errors_since_midnight),
            self.repo.aggregate_counts(&everything, GroupKey::Level),
            self.repo.aggregate_counts(&app_filter, GroupKey::AppName),
            self.repo.aggregate_counts(&errors_in_week, GroupKey::DayOfWeek),
            self.repo.find(&everything, LogSort::TimestampDesc, 0, Some(RECENT_LOGS_LIMIT)),
        )?;

        debug!(
            week_offset,
            week_start = %week.start,
            total_logs,
            errors_today,
            "Computed dashboard stats"
        );

        Ok(DashboardStats {
            total_logs,
            errors_today,
            logs_by_level,
            logs_by_app,
            daily_trends: daily_trends(today, &by_weekday),
            selected_week: SelectedWeek {
                offset: week_offset,
                start: week.start.date().format("%Y-%m-%d").to_string(),
                end: week.end.date().format("%Y-%m-%d").to_string(),
            },
            recent_logs,
            avg_response_time: self.placeholders.avg_response_time(),
            users_online: self.placeholders.users_online(),
        })
    }
}

/// One entry per weekday, Sunday first, zero-filled.
fn daily_trends(today: chrono::NaiveDate, by_weekday: &[GroupCount]) -> Vec<DailyTrend> {
    (1..=7u32)
        .map(|day_of_week| {
            let count = by_weekday
                .iter()
                .find(|g| g.key == GroupValue::Number(i64::from(day_of_week)))
                .map_or(0, |g| g.count);
            let date = most_recent_prior(today, day_of_week);
            DailyTrend {
                day_of_week,
                day_name: day_name(day_of_week),
                count,
                date: date.format("%Y-%m-%d").to_string(),
            }
        })
        .collect()
}
