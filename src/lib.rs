//! # mergington-api
//!
//! REST API for viewing and signing up for extracurricular activities at
//! Mergington High School.
//!
//! The service exposes a small HTTP surface consumed verbatim by the bundled
//! static front-end: an activity listing keyed by activity name, a signup
//! endpoint, and an unregister endpoint. All state lives in a SQLite
//! database; on first start against an empty database the fixed activity
//! catalog is seeded.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP, static front-end)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── ActivityService (service/)
//!     │
//!     ├── ActivityStore (persistence/)
//!     └── SQLite (sqlx)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod persistence;
pub mod seed;
pub mod service;
