//! Shared DTO types used across multiple endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters for signup and unregister requests.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SignupParams {
    /// Student email. Accepted as-is; no format validation is performed.
    pub email: String,
}

/// Confirmation message returned by mutating endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable confirmation, e.g. `"Signed up new@x.edu for Chess Club"`.
    pub message: String,
}
