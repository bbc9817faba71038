use crate::database::seed;
use crate::models::Activity;

/// In-memory activity store. Keeps activities in insertion order so listings
/// come back the way they were seeded.
#[derive(Debug, Clone, Default)]
pub struct ActivityRegistry {
    activities: Vec<Activity>,
}

impl ActivityRegistry {
    /// Builds a registry from `activities`. A later activity with a name that
    /// is already present is ignored.
    pub fn new(activities: impl IntoIterator<Item = Activity>) -> Self {
        let mut registry = Self::default();
        for activity in activities {
            if registry.get(&activity.name).is_none() {
                registry.activities.push(activity);
            }
        }
        registry
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.activities.iter_mut().find(|a| a.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }
}
