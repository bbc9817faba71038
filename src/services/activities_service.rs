use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::database::ActivityRegistry;
use crate::models::Activity;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActivitiesError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student is already signed up for this activity")]
    AlreadyRegistered,
    #[error("Student is not registered for this activity")]
    NotRegistered,
    #[error("Activity is full")]
    ActivityFull,
}

impl ActivitiesError {
    pub fn label(&self) -> &'static str {
        match self {
            ActivitiesError::NotFound => "not_found",
            ActivitiesError::AlreadyRegistered => "already_registered",
            ActivitiesError::NotRegistered => "not_registered",
            ActivitiesError::ActivityFull => "activity_full",
        }
    }
}

/// Rules applied on signup beyond the membership check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignupPolicy {
    /// Reject signups once an activity reaches `max_participants`. Off by
    /// default: capacity is shown to students but not enforced.
    pub enforce_capacity: bool,
}

/// Snapshot of every activity, serialized as a JSON object keyed by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivitiesListing(pub Vec<Activity>);

impl ActivitiesListing {
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|a| a.name == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ActivitiesListing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for activity in &self.0 {
            map.serialize_entry(&activity.name, activity)?;
        }
        map.end()
    }
}

/// Owns the registry and serialises all access to it. Clones share state.
#[derive(Debug, Clone)]
pub struct ActivitiesService {
    registry: Arc<RwLock<ActivityRegistry>>,
    policy: SignupPolicy,
}

impl ActivitiesService {
    pub fn new(registry: ActivityRegistry, policy: SignupPolicy) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
            policy,
        }
    }

    pub fn seeded(policy: SignupPolicy) -> Self {
        Self::new(ActivityRegistry::seeded(), policy)
    }

    pub async fn list(&self) -> ActivitiesListing {
        let registry = self.registry.read().await;
        ActivitiesListing(registry.iter().cloned().collect())
    }

    /// Emails are stored exactly as given; no trimming or format checks.
    pub async fn signup(&self, activity_name: &str, email: &str) -> Result<String, ActivitiesError> {
        let mut registry = self.registry.write().await;
        let activity = registry
            .get_mut(activity_name)
            .ok_or(ActivitiesError::NotFound)?;

        if activity.participants.contains(email) {
            return Err(ActivitiesError::AlreadyRegistered);
        }
        if self.policy.enforce_capacity && activity.is_full() {
            warn!(
                activity = %activity_name,
                max_participants = activity.max_participants,
                "signup rejected: activity full"
            );
            return Err(ActivitiesError::ActivityFull);
        }

        activity.participants.insert(email);
        info!(
            activity = %activity_name,
            participants = activity.participants.len(),
            "participant signed up"
        );
        Ok(format!("Signed up {} for {}", email, activity_name))
    }

    pub async fn unregister(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<String, ActivitiesError> {
        let mut registry = self.registry.write().await;
        let activity = registry
            .get_mut(activity_name)
            .ok_or(ActivitiesError::NotFound)?;

        if !activity.participants.remove(email) {
            return Err(ActivitiesError::NotRegistered);
        }
        info!(
            activity = %activity_name,
            participants = activity.participants.len(),
            "participant unregistered"
        );
        Ok(format!("Unregistered {} from {}", email, activity_name))
    }
}
