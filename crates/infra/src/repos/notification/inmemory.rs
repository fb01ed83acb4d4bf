use super::INotificationRepo;
use crate::repos::shared::inmemory_repo::*;
use volunteer_hub_domain::{Notification, NotificationKind, ID};

pub struct InMemoryNotificationRepo {
    notifications: std::sync::Mutex<Vec<Notification>>,
}

impl InMemoryNotificationRepo {
    pub fn new() -> Self {
        Self {
            notifications: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl INotificationRepo for InMemoryNotificationRepo {
    async fn insert(&self, notification: &Notification) -> anyhow::Result<()> {
        insert(notification, &self.notifications);
        Ok(())
    }

    async fn insert_many(&self, notifications: &[Notification]) -> anyhow::Result<()> {
        insert_many(notifications, &self.notifications);
        Ok(())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Notification>> {
        let mut notifications = find_by(&self.notifications, |_| true);
        notifications.reverse();
        notifications.sort_by(|a, b| b.created.cmp(&a.created));
        Ok(notifications)
    }

    async fn find_by_event_and_kind(
        &self,
        event_id: &ID,
        kind: NotificationKind,
    ) -> anyhow::Result<Vec<Notification>> {
        Ok(find_by(&self.notifications, |n| {
            n.kind == kind && n.event_id.as_ref() == Some(event_id)
        }))
    }
}
