//! SQLite implementation of the activity store.

use chrono::Utc;
use sqlx::SqlitePool;

use super::models::{ActivityRow, SignupRow};
use crate::error::ApiError;

/// SQLite-backed store for activities and signups, using `sqlx::SqlitePool`.
///
/// Every method is a single query; the uniqueness of `(activity_id, email)`
/// and the capacity bound are enforced by the service layer's precondition
/// checks, not by storage constraints.
#[derive(Debug, Clone)]
pub struct ActivityStore {
    pool: SqlitePool,
}

impl ActivityStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns all activities in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn list_activities(&self) -> Result<Vec<ActivityRow>, ApiError> {
        let rows = sqlx::query_as::<_, ActivityRow>(
            "SELECT id, name, description, schedule, max_participants, created_at \
             FROM activities ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Finds an activity by its unique name.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<ActivityRow>, ApiError> {
        let row = sqlx::query_as::<_, ActivityRow>(
            "SELECT id, name, description, schedule, max_participants, created_at \
             FROM activities WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Returns the total number of activities. Zero means the store has
    /// never been seeded (or was cleared).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn count_activities(&self) -> Result<i64, ApiError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM activities")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Inserts a new activity and returns its storage-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure, including a
    /// violated unique index on `name`.
    pub async fn insert_activity(
        &self,
        name: &str,
        description: &str,
        schedule: &str,
        max_participants: i64,
    ) -> Result<i64, ApiError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO activities (name, description, schedule, max_participants, created_at) \
             VALUES (?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(name)
        .bind(description)
        .bind(schedule)
        .bind(max_participants)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Returns all signups for an activity in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn list_signups(&self, activity_id: i64) -> Result<Vec<SignupRow>, ApiError> {
        let rows = sqlx::query_as::<_, SignupRow>(
            "SELECT id, activity_id, email, created_at FROM signups \
             WHERE activity_id = ? ORDER BY id",
        )
        .bind(activity_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Returns the number of signups for an activity.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn count_signups(&self, activity_id: i64) -> Result<i64, ApiError> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM signups WHERE activity_id = ?")
                .bind(activity_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    /// Returns `true` if a signup exists for the given activity and email.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn signup_exists(&self, activity_id: i64, email: &str) -> Result<bool, ApiError> {
        let exists = sqlx::query_scalar::<_, i64>(
            "SELECT EXISTS(SELECT 1 FROM signups WHERE activity_id = ? AND email = ?)",
        )
        .bind(activity_id)
        .bind(email)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists != 0)
    }

    /// Inserts a new signup and returns its storage-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn insert_signup(&self, activity_id: i64, email: &str) -> Result<i64, ApiError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO signups (activity_id, email, created_at) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(activity_id)
        .bind(email)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Deletes the signup matching `(activity_id, email)`, returning the
    /// number of rows removed (0 when no such signup exists).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn delete_signup(&self, activity_id: i64, email: &str) -> Result<u64, ApiError> {
        let result = sqlx::query("DELETE FROM signups WHERE activity_id = ? AND email = ?")
            .bind(activity_id)
            .bind(email)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::persistence::Database;

    async fn make_store() -> ActivityStore {
        let Ok(db) = Database::in_memory().await else {
            panic!("in-memory database");
        };
        ActivityStore::new(db.pool().clone())
    }

    #[tokio::test]
    async fn activity_insert_and_find_cycle() {
        let store = make_store().await;

        let Ok(id) = store
            .insert_activity("Chess Club", "Learn chess", "Fridays", 12)
            .await
        else {
            panic!("insert failed");
        };
        assert!(id > 0);

        let Ok(Some(found)) = store.find_by_name("Chess Club").await else {
            panic!("activity not found");
        };
        assert_eq!(found.id, id);
        assert_eq!(found.name, "Chess Club");
        assert_eq!(found.max_participants, 12);

        let Ok(missing) = store.find_by_name("Pottery Club").await else {
            panic!("lookup failed");
        };
        assert!(missing.is_none());

        let Ok(count) = store.count_activities().await else {
            panic!("count failed");
        };
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn signup_insert_count_delete_cycle() {
        let store = make_store().await;

        let Ok(activity_id) = store
            .insert_activity("Art Club", "Painting and drawing", "Thursdays", 15)
            .await
        else {
            panic!("insert failed");
        };

        let Ok(_) = store.insert_signup(activity_id, "amelia@mergington.edu").await else {
            panic!("signup insert failed");
        };
        let Ok(_) = store.insert_signup(activity_id, "harper@mergington.edu").await else {
            panic!("signup insert failed");
        };

        let Ok(count) = store.count_signups(activity_id).await else {
            panic!("count failed");
        };
        assert_eq!(count, 2);

        let Ok(exists) = store.signup_exists(activity_id, "amelia@mergington.edu").await else {
            panic!("exists check failed");
        };
        assert!(exists);

        let Ok(signups) = store.list_signups(activity_id).await else {
            panic!("list failed");
        };
        let emails: Vec<&str> = signups.iter().map(|s| s.email.as_str()).collect();
        assert_eq!(emails, ["amelia@mergington.edu", "harper@mergington.edu"]);

        let Ok(removed) = store.delete_signup(activity_id, "amelia@mergington.edu").await else {
            panic!("delete failed");
        };
        assert_eq!(removed, 1);

        let Ok(removed_again) = store.delete_signup(activity_id, "amelia@mergington.edu").await
        else {
            panic!("delete failed");
        };
        assert_eq!(removed_again, 0);

        let Ok(exists) = store.signup_exists(activity_id, "amelia@mergington.edu").await else {
            panic!("exists check failed");
        };
        assert!(!exists);
    }

    #[tokio::test]
    async fn duplicate_activity_name_is_rejected_by_index() {
        let store = make_store().await;

        let Ok(_) = store
            .insert_activity("Math Club", "Competition math", "Tuesdays", 10)
            .await
        else {
            panic!("insert failed");
        };

        let duplicate = store
            .insert_activity("Math Club", "Different text", "Mondays", 5)
            .await;
        assert!(matches!(duplicate, Err(ApiError::Persistence(_))));
    }
}
