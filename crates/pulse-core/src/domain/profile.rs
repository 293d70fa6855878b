use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profile entity - the public profile attached to a user account.
///
/// The engagement service only ever reads profiles, and only when the
/// legacy profile-lookup path is enabled; it never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub user: Uuid,
    pub handle: String,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(user: Uuid, handle: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user,
            handle,
            created_at: Utc::now(),
        }
    }
}
