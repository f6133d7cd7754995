use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::auth::dto::login_request::LoginRequest;
use crate::errors::AppError;

pub struct AuthController;

impl AuthController {
    pub async fn login(
        State(state): State<AppState>,
        payload: Result<Json<LoginRequest>, JsonRejection>,
    ) -> Result<Json<Value>, AppError> {
        let Json(payload) = payload?;
        to_json(state.auth_service.login(payload).await)
    }
}
