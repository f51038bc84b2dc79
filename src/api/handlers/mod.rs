//! REST endpoint handlers organized by resource.

pub mod activities;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes.
///
/// Everything is mounted at the root: the bundled front-end consumes the
/// activity endpoints by these exact paths.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(activities::routes())
        .merge(system::routes())
}
