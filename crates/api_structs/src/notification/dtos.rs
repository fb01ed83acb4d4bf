use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use volunteer_hub_domain::{Notification, NotificationKind, ID};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDTO {
    pub id: ID,
    pub kind: NotificationKind,
    pub title: String,
    pub event_id: Option<ID>,
    pub event_name: String,
    pub event_description: String,
    pub location: String,
    pub event_date: Option<DateTime<Utc>>,
    pub user_id: Option<ID>,
    pub created_at: DateTime<Utc>,
}

impl NotificationDTO {
    pub fn new(notification: Notification) -> Self {
        Self {
            id: notification.id,
            kind: notification.kind,
            title: notification.title().to_string(),
            event_id: notification.event_id,
            event_name: notification.event.name,
            event_description: notification.event.description,
            location: notification.event.location,
            event_date: notification.event.date,
            user_id: notification.user_id,
            created_at: notification.created,
        }
    }
}
