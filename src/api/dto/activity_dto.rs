//! Activity projection for the listing endpoint.

use serde::Serialize;
use utoipa::ToSchema;

use crate::service::ActivityRoster;

/// One activity as the front-end consumes it.
///
/// `GET /activities` returns a flat JSON object mapping activity name to
/// this projection; the name itself is the key, not a field.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ActivityDto {
    /// Free-form description.
    pub description: String,
    /// Free-form schedule text.
    pub schedule: String,
    /// Participant capacity.
    pub max_participants: i64,
    /// Signed-up emails in signup order.
    pub participants: Vec<String>,
}

impl From<ActivityRoster> for ActivityDto {
    fn from(roster: ActivityRoster) -> Self {
        Self {
            description: roster.activity.description,
            schedule: roster.activity.schedule,
            max_participants: roster.activity.max_participants,
            participants: roster.participants,
        }
    }
}
