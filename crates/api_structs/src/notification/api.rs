use crate::dtos::NotificationDTO;
use serde::{Deserialize, Serialize};
use volunteer_hub_domain::Notification;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub message: String,
    pub saved_notification: NotificationDTO,
}

impl NotificationResponse {
    pub fn new(notification: Notification) -> Self {
        Self {
            message: "Notification created successfully.".into(),
            saved_notification: NotificationDTO::new(notification),
        }
    }
}

pub mod create_notification {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub event_id: Option<String>,
        /// "new event", "updated event" or "matched event"
        #[serde(default)]
        pub notif_type: Option<String>,
    }

    pub type APIResponse = NotificationResponse;
}

pub mod get_notifications {
    use super::*;

    pub type APIResponse = Vec<NotificationDTO>;
}

pub mod create_canceled_notification {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub event_name: String,
        #[serde(default)]
        pub event_description: String,
        #[serde(default)]
        pub event_location: String,
        #[serde(default)]
        pub event_date: Option<String>,
    }

    pub type APIResponse = NotificationResponse;
}
