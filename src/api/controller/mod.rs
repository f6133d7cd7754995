//! HTTP controllers (request extraction → domain usecase → JSON)

pub mod auth;
pub mod log;
