use super::IEventRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::{DateTime, Utc};
use volunteer_hub_domain::{Event, ID};

pub struct InMemoryEventRepo {
    events: std::sync::Mutex<Vec<Event>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            events: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn insert(&self, e: &Event) -> anyhow::Result<()> {
        insert(e, &self.events);
        Ok(())
    }

    async fn save(&self, e: &Event) -> anyhow::Result<()> {
        save(e, &self.events);
        Ok(())
    }

    async fn find(&self, event_id: &ID) -> anyhow::Result<Option<Event>> {
        Ok(find(event_id, &self.events))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Event>> {
        Ok(find_by(&self.events, |_| true))
    }

    async fn find_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> anyhow::Result<Vec<Event>> {
        Ok(find_by(&self.events, |e| e.date >= start && e.date <= end))
    }

    async fn delete(&self, event_id: &ID) -> anyhow::Result<Option<Event>> {
        Ok(delete(event_id, &self.events))
    }
}
