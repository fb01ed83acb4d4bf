//! Repositories that fail every call, for testing how use cases handle an
//! unavailable store

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use volunteer_hub_domain::{Event, Notification, NotificationKind, ID};
use volunteer_hub_infra::{IEventRepo, INotificationRepo};

pub struct FailingEventRepo;

#[async_trait::async_trait]
impl IEventRepo for FailingEventRepo {
    async fn insert(&self, _e: &Event) -> anyhow::Result<()> {
        Err(anyhow!("Event store is unavailable"))
    }

    async fn save(&self, _e: &Event) -> anyhow::Result<()> {
        Err(anyhow!("Event store is unavailable"))
    }

    async fn find(&self, _event_id: &ID) -> anyhow::Result<Option<Event>> {
        Err(anyhow!("Event store is unavailable"))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Event>> {
        Err(anyhow!("Event store is unavailable"))
    }

    async fn find_by_date_range(
        &self,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> anyhow::Result<Vec<Event>> {
        Err(anyhow!("Event store is unavailable"))
    }

    async fn delete(&self, _event_id: &ID) -> anyhow::Result<Option<Event>> {
        Err(anyhow!("Event store is unavailable"))
    }
}

pub struct FailingNotificationRepo;

#[async_trait::async_trait]
impl INotificationRepo for FailingNotificationRepo {
    async fn insert(&self, _notification: &Notification) -> anyhow::Result<()> {
        Err(anyhow!("Notification store is unavailable"))
    }

    async fn insert_many(&self, _notifications: &[Notification]) -> anyhow::Result<()> {
        Err(anyhow!("Notification store is unavailable"))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Notification>> {
        Err(anyhow!("Notification store is unavailable"))
    }

    async fn find_by_event_and_kind(
        &self,
        _event_id: &ID,
        _kind: NotificationKind,
    ) -> anyhow::Result<Vec<Notification>> {
        Err(anyhow!("Notification store is unavailable"))
    }
}
