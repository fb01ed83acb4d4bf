use crate::dtos::EventDTO;
use serde::{Deserialize, Serialize};
use volunteer_hub_domain::{Event, Skill, Urgency};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub message: String,
    pub event: EventDTO,
}

impl EventResponse {
    pub fn new(event: Event, message: &str) -> Self {
        Self {
            message: message.into(),
            event: EventDTO::new(event),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct EventPathParams {
    pub event_id: String,
}

pub mod create_event {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub event_name: String,
        pub event_description: String,
        pub location: String,
        #[serde(default)]
        pub required_skills: Vec<Skill>,
        pub urgency: Urgency,
        pub event_date: String,
    }

    pub type APIResponse = EventResponse;
}

pub mod get_events {
    use super::*;

    pub type APIResponse = Vec<EventDTO>;
}

pub mod get_event {
    use super::*;

    pub type PathParams = EventPathParams;
    pub type APIResponse = EventDTO;
}

pub mod update_event {
    use super::*;

    pub type PathParams = EventPathParams;

    /// Fields left out keep their current value
    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub event_name: Option<String>,
        #[serde(default)]
        pub event_description: Option<String>,
        #[serde(default)]
        pub location: Option<String>,
        #[serde(default)]
        pub required_skills: Option<Vec<Skill>>,
        #[serde(default)]
        pub urgency: Option<Urgency>,
        #[serde(default)]
        pub event_date: Option<String>,
    }

    pub type APIResponse = EventResponse;
}

pub mod delete_event {
    use super::*;

    pub type PathParams = EventPathParams;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub message: String,
        pub deleted_matches: u64,
    }
}
