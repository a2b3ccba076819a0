use tracing::{info, warn};

use crate::database::ActivityStore;
use crate::error::SignupError;
use crate::models::ActivityCatalog;

pub fn list_activities(store: &ActivityStore) -> ActivityCatalog {
    store.list_activities()
}

/// Adds `email` to the roster and returns the confirmation message.
pub fn signup(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    match store.signup(activity_name, email) {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "signup accepted");
            Ok(format!("Signed up {} for {}", email, activity_name))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, reason = %e, "signup rejected");
            Err(e)
        }
    }
}

/// Removes `email` from the roster and returns the confirmation message.
pub fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    match store.unregister(activity_name, email) {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "unregister accepted");
            Ok(format!("Unregistered {} from {}", email, activity_name))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, reason = %e, "unregister rejected");
            Err(e)
        }
    }
}
