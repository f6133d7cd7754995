use std::{
    fs::{self, File, OpenOptions},
    io::{BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::log_entity::LogEntity;

/// File-level persistence used by the log repository.
pub trait LogFsAdapterTrait: Send + Sync {
    fn load_all(&self) -> Result<Vec<LogEntity>>;
    fn append(&self, logs: &[LogEntity]) -> Result<()>;
    fn truncate(&self) -> Result<()>;
}

/// Stores one JSON document per line at `path`.
#[derive(Debug, Clone)]
pub struct LogFsAdapter {
    path: PathBuf,
}

impl LogFsAdapter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create data directory {:?}", parent)
                })?;
            }
        }
        Ok(())
    }
}

impl LogFsAdapterTrait for LogFsAdapter {
    fn load_all(&self) -> Result<Vec<LogEntity>> {
        if !self.path.exists() {
            debug!(path = ?self.path, "No log file yet, starting empty");
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open log file {:?}", self.path))?;
        let reader = BufReader::new(file);

        // Raw bytes: a line that is not UTF-8 is malformed, not fatal.
        let mut logs = Vec::new();
        for (idx, line) in reader.split(b'\n').enumerate() {
            let line = line.with_context(|| format!("Failed to read log file {:?}", self.path))?;
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            match serde_json::from_slice::<LogEntity>(&line) {
                Ok(entity) => logs.push(entity),
                Err(e) => warn!(line = idx + 1, error = %e, "Skipping malformed log line"),
            }
        }

        debug!(count = logs.len(), path = ?self.path, "Loaded log records");
        Ok(logs)
    }

    fn append(&self, logs: &[LogEntity]) -> Result<()> {
        self.ensure_parent_dir()?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open log file {:?} for append", self.path))?;

        let mut writer = BufWriter::new(file);
        for log in logs {
            serde_json::to_writer(&mut writer, log)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }

    fn truncate(&self) -> Result<()> {
        if self.path.exists() {
            File::create(&self.path)
                .with_context(|| format!("Failed to truncate log file {:?}", self.path))?;
        }
        Ok(())
    }
}
