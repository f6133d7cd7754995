//! Log routes (e.g., /logs/*)

use axum::{routing::get, Router};

use crate::api::controller::log::LogController;
use crate::app_state::AppState;

pub fn log_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(LogController::list_logs))
        .route("/stats", get(LogController::get_log_stats))
        .route("/{id}", get(LogController::get_log))
}
