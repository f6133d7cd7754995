pub mod logs;
pub mod storage_path;
