//! Activity service: orchestrates precondition checks and storage writes.

use crate::error::ApiError;
use crate::persistence::ActivityStore;
use crate::persistence::models::ActivityRow;
use crate::seed;

/// An activity together with its participant emails, in signup order.
#[derive(Debug, Clone)]
pub struct ActivityRoster {
    /// The activity row.
    pub activity: ActivityRow,
    /// Participant emails in storage retrieval order.
    pub participants: Vec<String>,
}

/// Business-rule layer for all activity operations.
///
/// Stateless coordinator over [`ActivityStore`]. Every mutation follows the
/// pattern: look up the activity → run precondition checks in contract
/// order → write → return the affected activity. Uniqueness of
/// `(activity, email)` and the capacity bound are enforced here, not by
/// storage constraints, so two racing signups for the last seat can both
/// pass the check (see DESIGN.md).
#[derive(Debug, Clone)]
pub struct ActivityService {
    store: ActivityStore,
}

impl ActivityService {
    /// Creates a new `ActivityService`.
    #[must_use]
    pub fn new(store: ActivityStore) -> Self {
        Self { store }
    }

    /// Returns a reference to the inner [`ActivityStore`].
    #[must_use]
    pub fn store(&self) -> &ActivityStore {
        &self.store
    }

    /// Returns every activity with its participant emails.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn list_with_participants(&self) -> Result<Vec<ActivityRoster>, ApiError> {
        let activities = self.store.list_activities().await?;
        let mut rosters = Vec::with_capacity(activities.len());
        for activity in activities {
            let signups = self.store.list_signups(activity.id).await?;
            let participants = signups.into_iter().map(|s| s.email).collect();
            rosters.push(ActivityRoster {
                activity,
                participants,
            });
        }
        Ok(rosters)
    }

    /// Registers a student email for the named activity.
    ///
    /// Preconditions are checked in contract order, first failure wins:
    /// the activity must exist, the email must not already be signed up,
    /// and the signup count must be strictly below capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ActivityNotFound`], [`ApiError::AlreadySignedUp`],
    /// [`ApiError::ActivityFull`], or [`ApiError::Persistence`].
    pub async fn signup(&self, activity_name: &str, email: &str) -> Result<ActivityRow, ApiError> {
        let activity = self
            .store
            .find_by_name(activity_name)
            .await?
            .ok_or_else(|| ApiError::ActivityNotFound(activity_name.to_string()))?;

        if self.store.signup_exists(activity.id, email).await? {
            return Err(ApiError::AlreadySignedUp {
                activity: activity.name,
                email: email.to_string(),
            });
        }

        let count = self.store.count_signups(activity.id).await?;
        if count >= activity.max_participants {
            return Err(ApiError::ActivityFull {
                activity: activity.name,
                max_participants: activity.max_participants,
            });
        }

        self.store.insert_signup(activity.id, email).await?;
        tracing::info!(activity = %activity.name, email, "student signed up");
        Ok(activity)
    }

    /// Removes a student's signup for the named activity.
    ///
    /// The activity must exist and a signup for `(activity, email)` must
    /// exist. The existence check is the conditional delete itself: zero
    /// rows affected means there was nothing to remove.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ActivityNotFound`], [`ApiError::NotSignedUp`],
    /// or [`ApiError::Persistence`].
    pub async fn unregister(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<ActivityRow, ApiError> {
        let activity = self
            .store
            .find_by_name(activity_name)
            .await?
            .ok_or_else(|| ApiError::ActivityNotFound(activity_name.to_string()))?;

        let removed = self.store.delete_signup(activity.id, email).await?;
        if removed == 0 {
            return Err(ApiError::NotSignedUp {
                activity: activity.name,
                email: email.to_string(),
            });
        }

        tracing::info!(activity = %activity.name, email, "student unregistered");
        Ok(activity)
    }

    /// Seeds the fixed activity catalog if the store is empty.
    ///
    /// Guarded by "table is empty", not "first ever run": a cleared store
    /// re-seeds, a store with any existing activity never re-seeds, even
    /// partially. Activities are written one at a time, each with its
    /// initial roster immediately after. Returns `true` when seeding ran.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on database failure.
    pub async fn seed_if_empty(&self) -> Result<bool, ApiError> {
        if self.store.count_activities().await? > 0 {
            tracing::debug!("activities already present, skipping seed");
            return Ok(false);
        }

        let catalog = seed::initial_activities();
        for entry in catalog {
            let activity_id = self
                .store
                .insert_activity(
                    entry.name,
                    entry.description,
                    entry.schedule,
                    entry.max_participants,
                )
                .await?;
            for email in entry.participants {
                self.store.insert_signup(activity_id, email).await?;
            }
        }

        tracing::info!(count = catalog.len(), "seeded initial activities");
        Ok(true)
    }
}
