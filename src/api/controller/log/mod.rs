//! Log controller: connects routes to log query and dashboard usecases

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;

use crate::api::dto::log_dto::{LogListQuery, LogStatsQuery};
use crate::api::dto::paginated_response::PaginatedResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::persistence::logs::log_entity::LogEntity;
use crate::domain::log::dto::dashboard_stats::DashboardStats;
use crate::errors::AppError;

pub struct LogController;

impl LogController {
    pub async fn list_logs(
        State(state): State<AppState>,
        query: Result<Query<LogListQuery>, QueryRejection>,
    ) -> Result<Json<PaginatedResponse<LogEntity>>, AppError> {
        let Query(query) = query?;
        to_json(state.log_service.list_logs(query).await)
    }

    pub async fn get_log(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<LogEntity>, AppError> {
        to_json(state.log_service.get_log(&id).await)
    }

    pub async fn get_log_stats(
        State(state): State<AppState>,
        query: Result<Query<LogStatsQuery>, QueryRejection>,
    ) -> Result<Json<DashboardStats>, AppError> {
        let Query(query) = query?;
        to_json(state.log_stats_service.compute_stats(query).await)
    }
}
