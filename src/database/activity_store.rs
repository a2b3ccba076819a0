use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use crate::database::seed;
use crate::error::{SeedError, SignupError};
use crate::models::{ActivityCatalog, ActivityRecord};

/// In-memory activity rosters.
///
/// Signup and unregister hold the write lock across check and mutation so
/// the capacity and no-duplicate rules hold under concurrent requests.
/// Listings clone a snapshot under the read lock.
#[derive(Debug)]
pub struct ActivityStore {
    seed: Activities,
    activities: RwLock<Activities>,
}

// Keyed by activity name, in listing order.
type Activities = IndexMap<String, ActivityRecord>;

fn index_by_name(seed: Vec<ActivityRecord>) -> Activities {
    seed.into_iter().map(|a| (a.name.clone(), a)).collect()
}

impl ActivityStore {
    pub fn from_seed(seed: Vec<ActivityRecord>) -> Result<Self, SeedError> {
        seed::validate_seed(&seed)?;
        let seed = index_by_name(seed);
        Ok(Self {
            activities: RwLock::new(seed.clone()),
            seed,
        })
    }

    /// Store holding the built-in school activities.
    pub fn with_default_seed() -> Self {
        let seed = index_by_name(seed::default_seed());
        Self {
            activities: RwLock::new(seed.clone()),
            seed,
        }
    }

    pub fn list_activities(&self) -> ActivityCatalog {
        ActivityCatalog::from(self.read().clone())
    }

    pub fn get(&self, name: &str) -> Option<ActivityRecord> {
        self.read().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn signup(&self, activity_name: &str, email: &str) -> Result<(), SignupError> {
        let mut activities = self.write();
        let activity = activities
            .get_mut(activity_name)
            .ok_or(SignupError::NotFound)?;

        if activity.has_participant(email) {
            return Err(SignupError::AlreadyRegistered);
        }
        if activity.is_full() {
            return Err(SignupError::Full);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<(), SignupError> {
        let mut activities = self.write();
        let activity = activities
            .get_mut(activity_name)
            .ok_or(SignupError::NotFound)?;

        let idx = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(SignupError::NotRegistered)?;

        activity.participants.remove(idx);
        Ok(())
    }

    /// Restores every roster to the seed. Intended for test harnesses.
    pub fn reset_to_seed(&self) {
        *self.write() = self.seed.clone();
    }

    // Every mutation completes before releasing the guard, so a poisoned
    // lock still holds consistent rosters.
    fn read(&self) -> RwLockReadGuard<'_, Activities> {
        self.activities
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Activities> {
        self.activities
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for ActivityStore {
    fn default() -> Self {
        Self::with_default_seed()
    }
}
