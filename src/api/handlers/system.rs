//! System endpoints: front-end entry redirect and health check.

use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /` — Redirect to the static front-end entry page.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    summary = "Front-end entry",
    description = "Redirects to the bundled static front-end.",
    responses(
        (status = 302, description = "Redirect to /static/index.html"),
    )
)]
pub async fn root_handler() -> impl IntoResponse {
    // The front-end contract pins 302 Found; axum's Redirect only offers
    // 303/307/308, so the response is built directly.
    (
        StatusCode::FOUND,
        [(header::LOCATION, "/static/index.html")],
    )
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy"),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// System routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;
    use crate::persistence::{ActivityStore, Database};
    use crate::service::ActivityService;

    async fn make_app() -> Router {
        let Ok(db) = Database::in_memory().await else {
            panic!("in-memory database");
        };
        let activity_service = Arc::new(ActivityService::new(ActivityStore::new(
            db.pool().clone(),
        )));
        routes().with_state(AppState { activity_service })
    }

    #[tokio::test]
    async fn root_redirects_to_front_end_with_302() {
        let app = make_app().await;

        let Ok(request) = Request::builder().uri("/").body(Body::empty()) else {
            panic!("invalid request");
        };
        let Ok(response) = app.oneshot(request).await else {
            panic!("request failed");
        };

        assert_eq!(response.status(), StatusCode::FOUND);
        let Some(location) = response.headers().get(header::LOCATION) else {
            panic!("missing Location header");
        };
        assert_eq!(location, "/static/index.html");
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let app = make_app().await;

        let Ok(request) = Request::builder().uri("/health").body(Body::empty()) else {
            panic!("invalid request");
        };
        let Ok(response) = app.oneshot(request).await else {
            panic!("request failed");
        };

        assert_eq!(response.status(), StatusCode::OK);
    }
}
