//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::ActivityService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Activity service for all business logic.
    pub activity_service: Arc<ActivityService>,
}
