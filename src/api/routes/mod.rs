//! API route declarations

pub mod auth_routes;
pub mod log_routes;
