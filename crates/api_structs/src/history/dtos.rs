use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use volunteer_hub_domain::{Event, Match, Skill, Urgency};

/// An `Event` the volunteer has been matched to
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntryDTO {
    pub event_name: String,
    pub event_description: String,
    pub location: String,
    pub required_skills: Vec<Skill>,
    pub urgency: Urgency,
    pub event_date: DateTime<Utc>,
    pub participation_status: String,
    pub matched_on: DateTime<Utc>,
}

impl HistoryEntryDTO {
    pub fn new(event: Event, m: &Match) -> Self {
        Self {
            event_name: event.name,
            event_description: event.description,
            location: event.location,
            required_skills: event.required_skills,
            urgency: event.urgency,
            event_date: event.date,
            participation_status: "Pending".into(),
            matched_on: m.matched_on,
        }
    }
}
