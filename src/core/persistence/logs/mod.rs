pub mod log_entity;
pub mod log_filter;
pub mod log_fs_adapter;
pub mod log_repository;
