//! Database row types for the `activities` and `signups` tables.

use chrono::{DateTime, Utc};

/// A row from the `activities` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivityRow {
    /// Storage-assigned identifier, immutable after creation.
    pub id: i64,
    /// Unique human-readable key.
    pub name: String,
    /// Free-form description shown to students.
    pub description: String,
    /// Free-form schedule text.
    pub schedule: String,
    /// Upper bound on concurrent signups for this activity.
    pub max_participants: i64,
    /// Set at creation, never mutated.
    pub created_at: DateTime<Utc>,
}

/// A row from the `signups` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SignupRow {
    /// Storage-assigned identifier.
    pub id: i64,
    /// Foreign reference to exactly one activity.
    pub activity_id: i64,
    /// Student email. Free-form string, not validated as an email format.
    pub email: String,
    /// Set at creation.
    pub created_at: DateTime<Utc>,
}
