use crate::{
    event::{Event, EventSnapshot},
    shared::entity::{Entity, ID},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationKind {
    NewEvent,
    UpdatedEvent,
    Matched,
    Unassigned,
    Canceled,
    Upcoming,
}

impl NotificationKind {
    /// Kinds that clients may create on their own, by their request name
    pub fn from_notif_type(notif_type: &str) -> Option<Self> {
        match notif_type {
            "new event" => Some(Self::NewEvent),
            "updated event" => Some(Self::UpdatedEvent),
            "matched event" => Some(Self::Matched),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::NewEvent => "A New Event Has Been Posted!",
            Self::UpdatedEvent => "An Event Has Been Updated",
            Self::Matched => "You Have Been Matched To An Event!",
            Self::Unassigned => "You Have Been Unassigned From An Event",
            Self::Canceled => "An Event Has Been Canceled",
            Self::Upcoming => "Upcoming Event Alert!",
        }
    }
}

/// A user facing notice. It is never updated after it has been created.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: ID,
    pub kind: NotificationKind,
    pub event_id: Option<ID>,
    pub event: EventSnapshot,
    /// `None` for notices addressed to everyone
    pub user_id: Option<ID>,
    pub created: DateTime<Utc>,
}

impl Notification {
    pub fn for_event(
        kind: NotificationKind,
        event: &Event,
        user_id: Option<ID>,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Default::default(),
            kind,
            event_id: Some(event.id),
            event: event.snapshot(),
            user_id,
            created,
        }
    }

    /// A broadcast notice for an `Event` that is only known by its fields
    pub fn from_snapshot(
        kind: NotificationKind,
        event: EventSnapshot,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Default::default(),
            kind,
            event_id: None,
            event,
            user_id: None,
            created,
        }
    }

    pub fn title(&self) -> &'static str {
        self.kind.title()
    }
}

impl Entity for Notification {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_client_notif_types() {
        assert_eq!(
            NotificationKind::from_notif_type("new event"),
            Some(NotificationKind::NewEvent)
        );
        assert_eq!(
            NotificationKind::from_notif_type("matched event"),
            Some(NotificationKind::Matched)
        );
        assert_eq!(NotificationKind::from_notif_type("canceled event"), None);
        assert_eq!(NotificationKind::from_notif_type(""), None);
    }

    #[test]
    fn snapshot_is_a_copy() {
        let mut event = Event {
            id: ID::new(),
            name: "Blood drive".into(),
            description: "Donations".into(),
            location: "Library".into(),
            required_skills: vec![],
            urgency: crate::Urgency::Low,
            date: Utc::now(),
            created: Utc::now(),
            updated: Utc::now(),
        };
        let notification =
            Notification::for_event(NotificationKind::NewEvent, &event, None, Utc::now());
        event.name = "Renamed".into();

        assert_eq!(notification.event.name, "Blood drive");
        assert_eq!(notification.event_id, Some(event.id));
        assert_eq!(notification.title(), "A New Event Has Been Posted!");
    }
}
