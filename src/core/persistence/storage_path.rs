use std::path::{Path, PathBuf};

pub const LOGS_FILE_NAME: &str = "logs.jsonl";

/// JSON-lines file holding every persisted log record.
pub fn logs_file_path(data_dir: &Path) -> PathBuf {
    data_dir.join(LOGS_FILE_NAME)
}
