use crate::{APIResponse, BaseClient, ID};
use reqwest::StatusCode;
use std::sync::Arc;
use volunteer_hub_api_structs::*;

#[derive(Clone)]
pub struct NotificationClient {
    base: Arc<BaseClient>,
}

pub struct CreateNotificationInput {
    pub event_id: ID,
    /// "new event", "updated event" or "matched event"
    pub notif_type: String,
}

#[derive(Default)]
pub struct CreateCanceledNotificationInput {
    pub event_name: String,
    pub event_description: String,
    pub event_location: String,
    pub event_date: Option<String>,
}

impl NotificationClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateNotificationInput,
    ) -> APIResponse<create_notification::APIResponse> {
        let body = create_notification::RequestBody {
            event_id: Some(input.event_id.to_string()),
            notif_type: Some(input.notif_type),
        };
        self.base
            .post(body, "notifications".into(), StatusCode::CREATED)
            .await
    }

    pub async fn create_canceled(
        &self,
        input: CreateCanceledNotificationInput,
    ) -> APIResponse<create_canceled_notification::APIResponse> {
        let body = create_canceled_notification::RequestBody {
            event_name: input.event_name,
            event_description: input.event_description,
            event_location: input.event_location,
            event_date: input.event_date,
        };
        self.base
            .post(body, "notifications/canceled".into(), StatusCode::CREATED)
            .await
    }

    /// Newest first
    pub async fn get_all(&self) -> APIResponse<get_notifications::APIResponse> {
        self.base
            .get("notifications".into(), StatusCode::OK)
            .await
    }
}
