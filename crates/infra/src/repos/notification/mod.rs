mod inmemory;
mod mongo;

pub use inmemory::InMemoryNotificationRepo;
pub use mongo::MongoNotificationRepo;
use volunteer_hub_domain::{Notification, NotificationKind, ID};

#[async_trait::async_trait]
pub trait INotificationRepo: Send + Sync {
    async fn insert(&self, notification: &Notification) -> anyhow::Result<()>;
    async fn insert_many(&self, notifications: &[Notification]) -> anyhow::Result<()>;
    /// Newest first
    async fn find_all(&self) -> anyhow::Result<Vec<Notification>>;
    async fn find_by_event_and_kind(
        &self,
        event_id: &ID,
        kind: NotificationKind,
    ) -> anyhow::Result<Vec<Notification>>;
}
