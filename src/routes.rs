use axum::{response::IntoResponse, routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::errors::AppError;

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    Router::new()
        // Root route
        .route("/", get(root))
        // Health check
        .route("/health", get(health_check))
        .nest("/logs", crate::api::routes::log_routes::log_routes())
        .nest("/auth", crate::api::routes::auth_routes::auth_routes())
        // Fallback handler for 404
        .fallback(handler_404)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}

// Handler for root
async fn root() -> &'static str {
    "Server is running!"
}

// Handler for health check
async fn health_check() -> &'static str {
    "OK"
}

// Handler for 404 Not Found
async fn handler_404() -> impl IntoResponse {
    AppError::NotFound("Resource".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::build_app_state_with;
    use crate::core::persistence::logs::log_entity::{LogDetails, LogEntity, LogLevel};
    use crate::core::persistence::logs::log_repository::{LogRepository, LogRepositoryImpl};
    use crate::domain::common::clock::FixedClock;
    use crate::domain::log::service::placeholder_metrics::FixedPlaceholderMetrics;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use chrono::{Local, TimeZone, Utc};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn app_with(logs: Vec<LogEntity>) -> Router {
        let repo = Arc::new(LogRepositoryImpl::new());
        repo.insert_many(logs).await.unwrap();
        let state = build_app_state_with(
            repo,
            Arc::new(FixedClock(Local.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap())),
            Arc::new(FixedPlaceholderMetrics {
                avg_response_time: 100,
                users_online: 50,
            }),
            "admin",
            "secret",
        );
        app_router().with_state(state)
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn login_req(body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(resp: axum::response::Response) -> Value {
        let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn sample() -> LogEntity {
        LogEntity::new(
            "order-service",
            12,
            3,
            LogLevel::Warn,
            Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap(),
            LogDetails::Text("slow query".into()),
        )
    }

    #[tokio::test]
    async fn health_and_root_respond() {
        let app = app_with(vec![]).await;
        let resp = app.clone().oneshot(get_req("/health")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = app.oneshot(get_req("/")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_path_is_json_404() {
        let resp = app_with(vec![]).await.oneshot(get_req("/nope")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await, json!({ "error": "Resource not found" }));
    }

    #[tokio::test]
    async fn logs_query_uses_document_parameter_names() {
        let resp = app_with(vec![sample()])
            .await
            .oneshot(get_req("/logs?AppName=ORDER&UserId=3&Level=warn&page=1&limit=5"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["limit"], 5);
        assert_eq!(body["totalPages"], 1);
        assert_eq!(body["data"][0]["AppName"], "order-service");
        assert_eq!(body["data"][0]["Log"]["Details"], "slow query");
    }

    #[tokio::test]
    async fn malformed_filter_is_400() {
        let resp = app_with(vec![])
            .await
            .oneshot(get_req("/logs?to=31-31-2025"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = body_json(resp).await;
        assert_eq!(body["received"], "31-31-2025");
    }

    #[tokio::test]
    async fn rejected_query_string_is_json_400() {
        let resp = app_with(vec![])
            .await
            .oneshot(get_req("/logs?page=1&page=2"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("page"));
    }

    #[tokio::test]
    async fn malformed_login_body_is_json_400() {
        let resp = app_with(vec![])
            .await
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/auth/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"username": "admin""#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn stats_route_is_not_captured_by_id_route() {
        let resp = app_with(vec![sample()])
            .await
            .oneshot(get_req("/logs/stats?week=-1"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["totalLogs"], 1);
        assert_eq!(body["selectedWeek"]["offset"], -1);
        assert_eq!(body["dailyTrends"].as_array().unwrap().len(), 7);
        assert_eq!(body["recentLogs"][0]["AppName"], "order-service");
    }

    #[tokio::test]
    async fn log_by_id_round_trip() {
        let entity = sample();
        let app = app_with(vec![entity.clone()]).await;

        let resp = app
            .clone()
            .oneshot(get_req(&format!("/logs/{}", entity.id)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["_id"], entity.id.as_str());

        let resp = app.oneshot(get_req("/logs/does-not-exist")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await, json!({ "error": "Log not found" }));
    }

    #[tokio::test]
    async fn login_checks_configured_credentials() {
        let app = app_with(vec![]).await;

        let resp = app
            .clone()
            .oneshot(login_req(json!({"username": "admin", "password": "secret"})))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["message"], "Login successful");

        let resp = app
            .clone()
            .oneshot(login_req(json!({"username": "admin", "password": "admin"})))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let resp = app
            .oneshot(login_req(json!({"username": "", "password": "secret"})))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
