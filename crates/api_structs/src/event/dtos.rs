use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use volunteer_hub_domain::{Event, Skill, Urgency, ID};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EventDTO {
    pub id: ID,
    pub event_name: String,
    pub event_description: String,
    pub location: String,
    pub required_skills: Vec<Skill>,
    pub urgency: Urgency,
    pub event_date: DateTime<Utc>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl EventDTO {
    pub fn new(event: Event) -> Self {
        Self {
            id: event.id,
            event_name: event.name,
            event_description: event.description,
            location: event.location,
            required_skills: event.required_skills,
            urgency: event.urgency,
            event_date: event.date,
            created: event.created,
            updated: event.updated,
        }
    }
}
