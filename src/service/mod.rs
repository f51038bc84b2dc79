//! Service layer: business rules for activity listing, signup,
//! unregister, and first-run seeding.

pub mod activity_service;

pub use activity_service::{ActivityRoster, ActivityService};
