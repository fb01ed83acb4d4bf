use crate::{APIResponse, BaseClient, ID};
use reqwest::StatusCode;
use std::sync::Arc;
use volunteer_hub_api_structs::*;
use volunteer_hub_domain::{Skill, Urgency};

#[derive(Clone)]
pub struct EventClient {
    base: Arc<BaseClient>,
}

pub struct CreateEventInput {
    pub event_name: String,
    pub event_description: String,
    pub location: String,
    pub required_skills: Vec<Skill>,
    pub urgency: Urgency,
    /// `YYYY-MM-DD` date or RFC 3339 timestamp
    pub event_date: String,
}

#[derive(Default)]
pub struct UpdateEventInput {
    pub event_id: ID,
    pub event_name: Option<String>,
    pub event_description: Option<String>,
    pub location: Option<String>,
    pub required_skills: Option<Vec<Skill>>,
    pub urgency: Option<Urgency>,
    pub event_date: Option<String>,
}

impl EventClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateEventInput) -> APIResponse<create_event::APIResponse> {
        let body = create_event::RequestBody {
            event_name: input.event_name,
            event_description: input.event_description,
            location: input.location,
            required_skills: input.required_skills,
            urgency: input.urgency,
            event_date: input.event_date,
        };
        self.base
            .post(body, "events".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get_all(&self) -> APIResponse<get_events::APIResponse> {
        self.base.get("events".into(), StatusCode::OK).await
    }

    pub async fn get(&self, event_id: ID) -> APIResponse<get_event::APIResponse> {
        self.base
            .get(format!("events/{}", event_id), StatusCode::OK)
            .await
    }

    pub async fn update(&self, input: UpdateEventInput) -> APIResponse<update_event::APIResponse> {
        let body = update_event::RequestBody {
            event_name: input.event_name,
            event_description: input.event_description,
            location: input.location,
            required_skills: input.required_skills,
            urgency: input.urgency,
            event_date: input.event_date,
        };
        self.base
            .put(body, format!("events/{}", input.event_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, event_id: ID) -> APIResponse<delete_event::APIResponse> {
        self.base
            .delete(format!("events/{}", event_id), StatusCode::OK)
            .await
    }
}
