//! Activity endpoints: list, sign up, unregister.

use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};

use crate::api::dto::{ActivityDto, MessageResponse, SignupParams};
use crate::app_state::AppState;
use crate::error::{ApiError, ErrorResponse};

/// `GET /activities` — List all activities with their participants.
///
/// # Errors
///
/// Returns [`ApiError`] on storage failures.
#[utoipa::path(
    get,
    path = "/activities",
    tag = "Activities",
    summary = "List activities",
    description = "Returns a flat JSON object keyed by activity name. Each value carries the description, schedule, capacity, and participant emails in signup order.",
    responses(
        (status = 200, description = "Activity map keyed by name", body = serde_json::Value),
    )
)]
pub async fn list_activities(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let rosters = state.activity_service.list_with_participants().await?;

    let mut activities = BTreeMap::new();
    for roster in rosters {
        let name = roster.activity.name.clone();
        activities.insert(name, ActivityDto::from(roster));
    }

    Ok(Json(activities))
}

/// `POST /activities/{activity_name}/signup` — Register a student.
///
/// # Errors
///
/// Returns [`ApiError::ActivityNotFound`] for an unknown activity,
/// [`ApiError::AlreadySignedUp`] for a duplicate signup, and
/// [`ApiError::ActivityFull`] when the activity is at capacity.
#[utoipa::path(
    post,
    path = "/activities/{activity_name}/signup",
    tag = "Activities",
    summary = "Sign up a student",
    description = "Registers the given email for the named activity, subject to the duplicate and capacity checks.",
    params(
        ("activity_name" = String, Path, description = "Activity name"),
        SignupParams,
    ),
    responses(
        (status = 200, description = "Signup confirmed", body = MessageResponse),
        (status = 404, description = "Activity not found", body = ErrorResponse),
        (status = 400, description = "Already signed up or activity full", body = ErrorResponse),
    )
)]
pub async fn signup_for_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<SignupParams>,
) -> Result<impl IntoResponse, ApiError> {
    let activity = state
        .activity_service
        .signup(&activity_name, &params.email)
        .await?;

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", params.email, activity.name),
    }))
}

/// `DELETE /activities/{activity_name}/unregister` — Remove a signup.
///
/// # Errors
///
/// Returns [`ApiError::ActivityNotFound`] for an unknown activity and
/// [`ApiError::NotSignedUp`] when no matching signup exists.
#[utoipa::path(
    delete,
    path = "/activities/{activity_name}/unregister",
    tag = "Activities",
    summary = "Unregister a student",
    description = "Removes the signup matching the named activity and the given email.",
    params(
        ("activity_name" = String, Path, description = "Activity name"),
        SignupParams,
    ),
    responses(
        (status = 200, description = "Unregistration confirmed", body = MessageResponse),
        (status = 404, description = "Activity not found", body = ErrorResponse),
        (status = 400, description = "Student is not signed up", body = ErrorResponse),
    )
)]
pub async fn unregister_from_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<SignupParams>,
) -> Result<impl IntoResponse, ApiError> {
    let activity = state
        .activity_service
        .unregister(&activity_name, &params.email)
        .await?;

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", params.email, activity.name),
    }))
}

/// Activity routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/{activity_name}/signup", post(signup_for_activity))
        .route(
            "/activities/{activity_name}/unregister",
            delete(unregister_from_activity),
        )
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
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
        let Ok(_) = activity_service.seed_if_empty().await else {
            panic!("seeding failed");
        };
        routes().with_state(AppState { activity_service })
    }

    async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
        let Ok(request) = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
        else {
            panic!("invalid request");
        };
        let Ok(response) = app.oneshot(request).await else {
            panic!("request failed");
        };
        let status = response.status();
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body read failed");
        };
        let Ok(body) = serde_json::from_slice(&bytes) else {
            panic!("body was not JSON");
        };
        (status, body)
    }

    #[tokio::test]
    async fn get_activities_returns_name_keyed_map() {
        let app = make_app().await;
        let (status, body) = send(app, "GET", "/activities").await;

        assert_eq!(status, StatusCode::OK);
        let chess = &body["Chess Club"];
        assert_eq!(chess["max_participants"], 12);
        assert_eq!(
            chess["participants"],
            serde_json::json!(["michael@mergington.edu", "daniel@mergington.edu"])
        );
        assert_eq!(
            chess["description"],
            "Learn strategies and compete in chess tournaments"
        );
    }

    #[tokio::test]
    async fn signup_returns_confirmation_and_grows_roster() {
        let app = make_app().await;

        let (status, body) = send(
            app.clone(),
            "POST",
            "/activities/Chess%20Club/signup?email=new@x.edu",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Signed up new@x.edu for Chess Club");

        let (_, listing) = send(app, "GET", "/activities").await;
        let Some(participants) = listing["Chess Club"]["participants"].as_array() else {
            panic!("participants missing");
        };
        assert_eq!(participants.len(), 3);
    }

    #[tokio::test]
    async fn repeated_signup_is_a_bad_request() {
        let app = make_app().await;

        let uri = "/activities/Chess%20Club/signup?email=new@x.edu";
        let (first, _) = send(app.clone(), "POST", uri).await;
        assert_eq!(first, StatusCode::OK);

        let (second, body) = send(app.clone(), "POST", uri).await;
        assert_eq!(second, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Student is already signed up");

        let (_, listing) = send(app, "GET", "/activities").await;
        let Some(participants) = listing["Chess Club"]["participants"].as_array() else {
            panic!("participants missing");
        };
        assert_eq!(participants.len(), 3);
    }

    #[tokio::test]
    async fn signup_for_unknown_activity_is_not_found() {
        let app = make_app().await;

        let (status, body) = send(
            app,
            "POST",
            "/activities/Unknown%20Club/signup?email=x@y.edu",
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "Activity not found");
    }

    #[tokio::test]
    async fn unregister_removes_email_from_listing() {
        let app = make_app().await;

        let (status, _) = send(
            app.clone(),
            "DELETE",
            "/activities/Chess%20Club/unregister?email=michael@mergington.edu",
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, listing) = send(app, "GET", "/activities").await;
        assert_eq!(
            listing["Chess Club"]["participants"],
            serde_json::json!(["daniel@mergington.edu"])
        );
    }

    #[tokio::test]
    async fn unregister_without_signup_is_a_bad_request() {
        let app = make_app().await;

        let (status, body) = send(
            app,
            "DELETE",
            "/activities/Chess%20Club/unregister?email=stranger@x.edu",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"]["message"],
            "Student is not signed up for this activity"
        );
    }
}
