use crate::activity::{Activity, Catalog};
use crate::error::{Result, RosterError};
use std::collections::HashSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory activity roster shared by all request handlers.
///
/// Activities are fixed at construction; only participant lists change.
/// Every mutation runs its membership check and its edit under one write lock.
#[derive(Debug)]
pub struct Roster {
    activities: RwLock<Vec<Activity>>,
}

impl Roster {
    /// Build a roster from a seed set, rejecting duplicate activity names and
    /// duplicate participants within an activity.
    pub fn new(activities: Vec<Activity>) -> Result<Self> {
        let mut names = HashSet::new();
        for activity in &activities {
            if !names.insert(activity.name.as_str()) {
                return Err(RosterError::DuplicateActivity(activity.name.clone()));
            }
            let mut emails = HashSet::new();
            for email in &activity.participants {
                if !emails.insert(email.as_str()) {
                    return Err(RosterError::DuplicateParticipant {
                        email: email.clone(),
                        activity: activity.name.clone(),
                    });
                }
            }
        }

        Ok(Self {
            activities: RwLock::new(activities),
        })
    }

    /// Roster populated from the built-in Mergington catalog.
    pub fn seeded() -> Self {
        Self {
            activities: RwLock::new(crate::seed::default_activities()),
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn list_activities(&self) -> Catalog {
        Catalog(self.read().clone())
    }

    pub fn get(&self, name: &str) -> Option<Activity> {
        self.read().iter().find(|a| a.name == name).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    pub fn signup(&self, activity_name: &str, email: &str) -> Result<String> {
        let mut activities = self.write();
        let activity = find_mut(&mut activities, activity_name)?;

        if activity.has_participant(email) {
            tracing::debug!(activity = activity_name, email, "duplicate signup rejected");
            return Err(RosterError::AlreadySignedUp {
                email: email.to_string(),
                activity: activity_name.to_string(),
            });
        }

        activity.participants.push(email.to_string());
        tracing::info!(
            activity = activity_name,
            email,
            enrolled = activity.participants.len(),
            "participant signed up"
        );
        Ok(format!("Signed up {email} for {activity_name}"))
    }

    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<String> {
        let mut activities = self.write();
        let activity = find_mut(&mut activities, activity_name)?;

        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            tracing::debug!(activity = activity_name, email, "unregister of non-member rejected");
            return Err(RosterError::NotSignedUp {
                email: email.to_string(),
                activity: activity_name.to_string(),
            });
        };

        activity.participants.remove(pos);
        tracing::info!(
            activity = activity_name,
            email,
            enrolled = activity.participants.len(),
            "participant unregistered"
        );
        Ok(format!("Unregistered {email} from {activity_name}"))
    }

    // A panic while holding the lock cannot leave a half-applied edit: each
    // mutation is a single push or remove. Recover the guard instead of failing.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Activity>> {
        self.activities.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Activity>> {
        self.activities.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::seeded()
    }
}

fn find_mut<'a>(activities: &'a mut [Activity], name: &str) -> Result<&'a mut Activity> {
    activities
        .iter_mut()
        .find(|a| a.name == name)
        .ok_or_else(|| {
            tracing::debug!(activity = name, "unknown activity");
            RosterError::ActivityNotFound(name.to_string())
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
