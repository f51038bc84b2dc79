//! Service error types with HTTP status code mapping.
//!
//! [`ApiError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and structured JSON error response.
//! The `message` strings for business-rule variants are part of the
//! front-end contract and must not change; offending identifiers travel
//! in `details` instead.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "Activity not found",
///     "details": "Pottery Club"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`ApiError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category      | HTTP Status               |
/// |-----------|---------------|---------------------------|
/// | 1000–1999 | Business rule | 400 Bad Request           |
/// | 2000–2999 | Not Found     | 404 Not Found             |
/// | 3000–3999 | Server        | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No activity with the requested name exists.
    #[error("Activity not found")]
    ActivityNotFound(String),

    /// The student already has a signup for this activity.
    #[error("Student is already signed up")]
    AlreadySignedUp {
        /// Activity the duplicate signup targeted.
        activity: String,
        /// Offending student email.
        email: String,
    },

    /// The activity has reached its participant capacity.
    #[error("Activity is full")]
    ActivityFull {
        /// Activity at capacity.
        activity: String,
        /// The capacity that was hit.
        max_participants: i64,
    },

    /// No signup exists for this (activity, email) pair.
    #[error("Student is not signed up for this activity")]
    NotSignedUp {
        /// Activity the unregister targeted.
        activity: String,
        /// Email with no matching signup.
        email: String,
    },

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::AlreadySignedUp { .. } => 1001,
            Self::ActivityFull { .. } => 1002,
            Self::NotSignedUp { .. } => 1003,
            Self::ActivityNotFound(_) => 2001,
            Self::Persistence(_) => 3001,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::AlreadySignedUp { .. } | Self::ActivityFull { .. } | Self::NotSignedUp { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::ActivityNotFound(_) => StatusCode::NOT_FOUND,
            Self::Persistence(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the `details` payload for the error response, if any.
    #[must_use]
    pub fn details(&self) -> Option<String> {
        match self {
            Self::ActivityNotFound(name) => Some(name.clone()),
            Self::AlreadySignedUp { activity, email } | Self::NotSignedUp { activity, email } => {
                Some(format!("{email} / {activity}"))
            }
            Self::ActivityFull {
                activity,
                max_participants,
            } => Some(format!("{activity} (capacity {max_participants})")),
            Self::Persistence(_) | Self::Internal(_) => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: self.details(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for ApiError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::Persistence(err.to_string())
    }
}
