use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use rand::Rng;
use serde_json::{json, Map, Value};
use tracing::info;

use crate::core::persistence::logs::log_entity::{LogDetails, LogEntity, LogLevel};
use crate::core::persistence::logs::log_filter::LogFilter;
use crate::core::persistence::logs::log_repository::LogRepository;

pub const APP_NAMES: [&str; 6] = [
    "auth-service",
    "payment-service",
    "order-service",
    "inventory-service",
    "notification-service",
    "user-service",
];

const MAX_USER_ID: i64 = 10;

/// Demo data window.
fn seed_window() -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    Some((
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single()?,
        Utc.with_ymd_and_hms(2025, 7, 16, 23, 59, 59).single()?,
    ))
}

fn as_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn details_for<R: Rng>(level: LogLevel, rng: &mut R) -> LogDetails {
    let value = match level {
        LogLevel::Info => json!({"message": "Operation completed successfully", "code": 200}),
        LogLevel::Error => {
            json!({"message": "An error occurred", "code": 500, "stack": "Error: ..."})
        }
        LogLevel::Warn => json!({"message": "Potential issue detected", "code": 300}),
        LogLevel::Debug => json!({
            "message": "Debugging info",
            "variable": "x",
            "value": rng.random_range(1..=100),
        }),
    };
    LogDetails::Object(as_object(value))
}

/// Random demo records with `LogId` 1..=count.
pub fn generate_logs<R: Rng>(count: usize, rng: &mut R) -> Result<Vec<LogEntity>> {
    let (start, end) = seed_window().context("invalid seed window")?;
    let span_ms = (end - start).num_milliseconds();

    let logs = (1..=count as i64)
        .map(|log_id| {
            let level = LogLevel::ALL[rng.random_range(0..LogLevel::ALL.len())];
            let app = APP_NAMES[rng.random_range(0..APP_NAMES.len())];
            let timestamp = start + chrono::Duration::milliseconds(rng.random_range(0..=span_ms));
            LogEntity::new(
                app,
                log_id,
                rng.random_range(1..=MAX_USER_ID),
                level,
                timestamp,
                details_for(level, rng),
            )
        })
        .collect();
    Ok(logs)
}

/// Fills the store with demo data when it holds nothing (or always, after
/// `reset`). Returns the number of inserted records.
pub async fn seed_if_empty<R: LogRepository + ?Sized>(
    repo: &R,
    count: usize,
    reset: bool,
) -> Result<usize> {
    if reset {
        repo.clear().await?;
        info!("Cleared existing logs before seeding");
    } else if repo.count(&LogFilter::default()).await? > 0 {
        return Ok(0);
    }

    let logs = generate_logs(count, &mut rand::rng())?;
    let inserted = repo.insert_many(logs).await?;
    info!(inserted, "Seeded log entries");
    Ok(inserted)
}
