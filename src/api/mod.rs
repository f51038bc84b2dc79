//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All endpoints are mounted at the root so the bundled front-end can
//! consume them unchanged.

pub mod dto;
pub mod handlers;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
///
/// With the `swagger-ui` feature enabled (the default), interactive API
/// documentation is served at `/docs`.
pub fn build_router() -> Router<AppState> {
    let router = handlers::routes();

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/docs")
            .url("/api-docs/openapi.json", <ApiDoc as utoipa::OpenApi>::openapi()),
    );

    router
}

/// OpenAPI document for the service.
#[cfg(feature = "swagger-ui")]
#[derive(utoipa::OpenApi)]
#[openapi(
    paths(
        handlers::activities::list_activities,
        handlers::activities::signup_for_activity,
        handlers::activities::unregister_from_activity,
        handlers::system::root_handler,
        handlers::system::health_handler,
    ),
    components(schemas(
        dto::ActivityDto,
        dto::MessageResponse,
        crate::error::ErrorResponse,
        crate::error::ErrorBody,
    )),
    tags(
        (name = "Activities", description = "Extracurricular activity signup"),
        (name = "System", description = "Health check and front-end entry"),
    )
)]
struct ApiDoc;
