use crate::{
    profile::Skill,
    shared::entity::{Entity, ID},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

/// Something that happens at a given date and needs volunteers with
/// some of the `required_skills`
#[derive(Debug, Clone)]
pub struct Event {
    pub id: ID,
    pub name: String,
    pub description: String,
    pub location: String,
    pub required_skills: Vec<Skill>,
    pub urgency: Urgency,
    pub date: DateTime<Utc>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl Event {
    /// Point in time copy of the fields a `Notification` shows
    pub fn snapshot(&self) -> EventSnapshot {
        EventSnapshot {
            name: self.name.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            date: Some(self.date),
        }
    }
}

impl Entity for Event {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Denormalized event fields stored on a `Notification`. Later edits of the
/// `Event` are not reflected.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventSnapshot {
    pub name: String,
    pub description: String,
    pub location: String,
    pub date: Option<DateTime<Utc>>,
}
