use tracing::debug;

use crate::api::dto::log_dto::{LogListQuery, LogStatsQuery};
use crate::core::persistence::logs::log_entity::LogLevel;
use crate::core::persistence::logs::log_filter::{LogFilter, TimestampRange};
use crate::domain::common::domain_error::DomainError;

use super::date_parser::{local_end_of_day, parse_date};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 20;

/// Treats missing and blank parameters alike.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn parse_id(field: &str, raw: &str) -> Result<i64, DomainError> {
    raw.trim().parse::<i64>().map_err(|_| {
        DomainError::validation(format!("Invalid {field}: expected an integer"), raw)
    })
}

fn parse_level(raw: &str) -> Result<LogLevel, DomainError> {
    LogLevel::from_code(raw).ok_or_else(|| {
        DomainError::validation(
            "Invalid Level: expected one of info, error, warn, debug",
            raw,
        )
    })
}

fn date_error(field: &str, raw: &str) -> DomainError {
    DomainError::validation(
        format!("Invalid {field} date format. Please use DD-MM-YYYY or YYYY-MM-DD format"),
        raw,
    )
}

/// Lower bound: the parsed instant itself.
pub fn parse_from_bound(raw: &str) -> Result<chrono::DateTime<chrono::Utc>, DomainError> {
    parse_date(raw).map_err(|_| date_error("from", raw))
}

/// Upper bound: the last millisecond of the parsed instant's local day.
pub fn parse_to_bound(raw: &str) -> Result<chrono::DateTime<chrono::Utc>, DomainError> {
    let parsed = parse_date(raw).map_err(|_| date_error("to", raw))?;
    let day = parsed.with_timezone(&chrono::Local).date_naive();
    local_end_of_day(day).ok_or_else(|| date_error("to", raw))
}

/// Translates the `GET /logs` query into a store filter.
pub fn build_log_filter(query: &LogListQuery) -> Result<LogFilter, DomainError> {
    let mut filter = LogFilter {
        app_name: present(&query.app_name).map(str::to_string),
        ..Default::default()
    };

    if let Some(raw) = present(&query.user_id) {
        filter.user_id = Some(parse_id("UserId", raw)?);
    }
    if let Some(raw) = present(&query.log_id) {
        filter.log_id = Some(parse_id("LogId", raw)?);
    }
    if let Some(raw) = present(&query.level) {
        filter.level = Some(parse_level(raw)?);
    }

    let mut range = TimestampRange::default();
    if let Some(raw) = present(&query.from) {
        range.gte = Some(parse_from_bound(raw)?);
    }
    if let Some(raw) = present(&query.to) {
        range.lte = Some(parse_to_bound(raw)?);
    }
    filter.timestamp = range;

    debug!(?filter, "Built log filter");
    Ok(filter)
}

/// The `AppName` / `Level` subset of filters honoured by the per-app breakdown.
pub fn build_app_filter(query: &LogStatsQuery) -> Result<LogFilter, DomainError> {
    let mut filter = LogFilter {
        app_name: present(&query.app_name).map(str::to_string),
        ..Default::default()
    };
    if let Some(raw) = present(&query.level) {
        filter.level = Some(parse_level(raw)?);
    }
    Ok(filter)
}

/// Page number and page size, defaulting to 1 and 20. Values below 1 become 1.
pub fn parse_pagination(query: &LogListQuery) -> Result<(usize, usize), DomainError> {
    let page = parse_positive("page", &query.page, DEFAULT_PAGE)?;
    let limit = parse_positive("limit", &query.limit, DEFAULT_LIMIT)?;
    Ok((page, limit))
}

fn parse_positive(field: &str, raw: &Option<String>, default: usize) -> Result<usize, DomainError> {
    let Some(raw) = present(raw) else {
        return Ok(default);
    };
    let value = raw.trim().parse::<i64>().map_err(|_| {
        DomainError::validation(format!("Invalid {field}: expected an integer"), raw)
    })?;
    Ok(usize::try_from(value.max(1)).unwrap_or(usize::MAX))
}

/// Week offset for the trend window, read from the leading integer of the
/// value (`"-1.5"` is -1, `"2x"` is 2). Missing or digit-less values mean the
/// current week.
pub fn parse_week_offset(query: &LogStatsQuery) -> i64 {
    present(&query.week).and_then(leading_int).unwrap_or(0)
}

/// Optional sign followed by at least one ASCII digit; trailing text is ignored.
/// Magnitudes past `i64` saturate.
fn leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let magnitude = rest[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
