use thiserror::Error;
use tracing::{info, warn};

use crate::database::{activities_repo, ActivitiesDb};
use crate::models::ActivityTable;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActivitiesError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
    #[error("Activity is full")]
    ActivityFull,
}

/// What signup does when an activity already has `max_participants`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacityPolicy {
    /// Accept the signup and log a warning.
    #[default]
    WarnOnly,
    /// Refuse with [`ActivitiesError::ActivityFull`].
    Enforce,
}

impl CapacityPolicy {
    pub fn from_flag(enforce: bool) -> Self {
        if enforce {
            CapacityPolicy::Enforce
        } else {
            CapacityPolicy::WarnOnly
        }
    }
}

pub async fn list_activities(db: &ActivitiesDb) -> ActivityTable {
    activities_repo::list_activities(db).await
}

pub async fn signup(
    db: &ActivitiesDb,
    activity_name: &str,
    email: &str,
    policy: CapacityPolicy,
) -> Result<String, ActivitiesError> {
    let outcome = activities_repo::update_activity(db, activity_name, |activity| {
        if activity.has_participant(email) {
            return Err(ActivitiesError::AlreadySignedUp);
        }
        if activity.is_full() {
            if policy == CapacityPolicy::Enforce {
                return Err(ActivitiesError::ActivityFull);
            }
            warn!(
                "Signup for {} exceeds capacity ({} >= {})",
                activity_name,
                activity.participants.len(),
                activity.max_participants
            );
        }
        activity.participants.push(email.to_string());
        Ok(())
    })
    .await
    .unwrap_or(Err(ActivitiesError::ActivityNotFound));

    match outcome {
        Ok(()) => {
            info!("Signed up {} for {}", email, activity_name);
            Ok(format!("Signed up {} for {}", email, activity_name))
        }
        Err(e) => {
            warn!("Signup of {} for {} failed: {}", email, activity_name, e);
            Err(e)
        }
    }
}

pub async fn unregister(
    db: &ActivitiesDb,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivitiesError> {
    let outcome = activities_repo::update_activity(db, activity_name, |activity| {
        let Some(idx) = activity.participants.iter().position(|p| p == email) else {
            return Err(ActivitiesError::NotSignedUp);
        };
        activity.participants.remove(idx);
        Ok(())
    })
    .await
    .unwrap_or(Err(ActivitiesError::ActivityNotFound));

    match outcome {
        Ok(()) => {
            info!("Unregistered {} from {}", email, activity_name);
            Ok(format!("Unregistered {} from {}", email, activity_name))
        }
        Err(e) => {
            warn!("Unregister of {} from {} failed: {}", email, activity_name, e);
            Err(e)
        }
    }
}
