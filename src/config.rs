use std::path::PathBuf;

use anyhow::{Context, Result};

/// Runtime settings, read from `LOGDASH_*` environment variables.
#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    /// Daily-rolling log files go here when set; stdout only otherwise.
    pub log_dir: Option<PathBuf>,
    pub seed_on_empty: bool,
    /// Drop existing records before seeding.
    pub seed_reset: bool,
    pub seed_count: usize,
    pub admin_username: String,
    pub admin_password: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5000,
            data_dir: PathBuf::from("data"),
            log_dir: None,
            seed_on_empty: false,
            seed_reset: false,
            seed_count: 100,
            admin_username: "admin".into(),
            admin_password: "admin".into(),
        }
    }
}

impl AppConfig {
    /// Loads `.env` (if any) and then the process environment.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(?path, "Loaded .env file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("LOGDASH_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("LOGDASH_PORT must be a port number, got {raw:?}"))?,
            None => defaults.port,
        };
        let seed_count = match get("LOGDASH_SEED_COUNT") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("LOGDASH_SEED_COUNT must be a count, got {raw:?}"))?,
            None => defaults.seed_count,
        };

        Ok(Self {
            host: get("LOGDASH_HOST").unwrap_or(defaults.host),
            port,
            data_dir: get("LOGDASH_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            log_dir: get("LOGDASH_LOG_DIR").map(PathBuf::from),
            seed_on_empty: parse_flag("LOGDASH_SEED_ON_EMPTY", get("LOGDASH_SEED_ON_EMPTY"))?
                .unwrap_or(defaults.seed_on_empty),
            seed_reset: parse_flag("LOGDASH_SEED_RESET", get("LOGDASH_SEED_RESET"))?
                .unwrap_or(defaults.seed_reset),
            seed_count,
            admin_username: get("LOGDASH_ADMIN_USERNAME").unwrap_or(defaults.admin_username),
            admin_password: get("LOGDASH_ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(key: &str, raw: Option<String>) -> Result<Option<bool>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => anyhow::bail!("{key} must be true or false, got {raw:?}"),
    }
}
