use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};

/// A `Match` assigns one `User` to one `Event`. There is never more than
/// one `Match` for the same pair.
#[derive(Debug, Clone)]
pub struct Match {
    pub id: ID,
    pub user_id: ID,
    pub event_id: ID,
    pub matched_on: DateTime<Utc>,
}

impl Match {
    pub fn new(user_id: ID, event_id: ID, matched_on: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            user_id,
            event_id,
            matched_on,
        }
    }

    pub fn is_pair(&self, user_id: &ID, event_id: &ID) -> bool {
        self.user_id == *user_id && self.event_id == *event_id
    }
}

impl Entity for Match {
    fn id(&self) -> &ID {
        &self.id
    }
}
