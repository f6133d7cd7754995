use axum::{routing::post, Router};

use crate::api::controller::auth::AuthController;
use crate::app_state::AppState;

pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(AuthController::login))
}
