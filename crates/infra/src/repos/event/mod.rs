mod inmemory;
mod mongo;

use chrono::{DateTime, Utc};
pub use inmemory::InMemoryEventRepo;
pub use mongo::MongoEventRepo;
use volunteer_hub_domain::{Event, ID};

#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    async fn insert(&self, e: &Event) -> anyhow::Result<()>;
    async fn save(&self, e: &Event) -> anyhow::Result<()>;
    async fn find(&self, event_id: &ID) -> anyhow::Result<Option<Event>>;
    async fn find_all(&self) -> anyhow::Result<Vec<Event>>;
    /// `Event`s with a date in the closed interval `[start, end]`
    async fn find_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> anyhow::Result<Vec<Event>>;
    async fn delete(&self, event_id: &ID) -> anyhow::Result<Option<Event>>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context;
    use chrono::{Duration, TimeZone, Utc};
    use volunteer_hub_domain::{Event, Skill, Urgency, ID};

    fn generate_event(date: chrono::DateTime<Utc>) -> Event {
        Event {
            id: ID::new(),
            name: "Park cleanup".into(),
            description: "Picking up litter".into(),
            location: "Memorial Park".into(),
            required_skills: vec![Skill::Cleaning],
            urgency: Urgency::Medium,
            date,
            created: Utc::now(),
            updated: Utc::now(),
        }
    }

    #[tokio::test]
    async fn create_update_and_delete() {
        let ctx = setup_context().await;
        let date = Utc.with_ymd_and_hms(2024, 11, 1, 0, 0, 0).unwrap();
        let mut event = generate_event(date);

        assert!(ctx.repos.events.insert(&event).await.is_ok());
        assert_eq!(
            ctx.repos.events.find(&event.id).await.unwrap().map(|e| e.name),
            Some("Park cleanup".to_string())
        );

        event.urgency = Urgency::High;
        assert!(ctx.repos.events.save(&event).await.is_ok());
        let found = ctx.repos.events.find(&event.id).await.unwrap().unwrap();
        assert_eq!(found.urgency, Urgency::High);
        assert_eq!(found.date, date);

        assert!(ctx.repos.events.delete(&event.id).await.unwrap().is_some());
        assert!(ctx.repos.events.find(&event.id).await.unwrap().is_none());
        assert!(ctx.repos.events.delete(&event.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_date_range() {
        let ctx = setup_context().await;
        let start = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let end = start + Duration::days(1);

        let before = generate_event(start - Duration::seconds(1));
        let at_start = generate_event(start);
        let at_end = generate_event(end);
        let after = generate_event(end + Duration::seconds(1));
        for e in [&before, &at_start, &at_end, &after] {
            ctx.repos.events.insert(e).await.unwrap();
        }

        let found = ctx
            .repos
            .events
            .find_by_date_range(start, end)
            .await
            .unwrap();
        let ids = found.iter().map(|e| e.id).collect::<Vec<_>>();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&at_start.id));
        assert!(ids.contains(&at_end.id));
    }
}
