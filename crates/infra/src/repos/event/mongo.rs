use super::IEventRepo;
use crate::repos::shared::mongo_repo::{self, from_millis, MongoDocument};
use chrono::{DateTime, Utc};
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};
use volunteer_hub_domain::{Event, Skill, Urgency, ID};

pub struct MongoEventRepo {
    collection: Collection<Document>,
}

impl MongoEventRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("events"),
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for MongoEventRepo {
    async fn insert(&self, e: &Event) -> anyhow::Result<()> {
        mongo_repo::insert::<_, EventMongo>(&self.collection, e).await
    }

    async fn save(&self, e: &Event) -> anyhow::Result<()> {
        mongo_repo::save::<_, EventMongo>(&self.collection, e).await
    }

    async fn find(&self, event_id: &ID) -> anyhow::Result<Option<Event>> {
        mongo_repo::find::<_, EventMongo>(&self.collection, event_id.inner_ref()).await
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Event>> {
        mongo_repo::find_many_by::<_, EventMongo>(&self.collection, doc! {}, None).await
    }

    async fn find_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> anyhow::Result<Vec<Event>> {
        let filter = doc! {
            "date": {
                "$gte": start.timestamp_millis(),
                "$lte": end.timestamp_millis()
            }
        };
        mongo_repo::find_many_by::<_, EventMongo>(&self.collection, filter, None).await
    }

    async fn delete(&self, event_id: &ID) -> anyhow::Result<Option<Event>> {
        mongo_repo::delete::<_, EventMongo>(&self.collection, event_id.inner_ref()).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct EventMongo {
    _id: ObjectId,
    name: String,
    description: String,
    location: String,
    required_skills: Vec<Skill>,
    urgency: Urgency,
    date: i64,
    created: i64,
    updated: i64,
}

impl MongoDocument<Event> for EventMongo {
    fn to_domain(self) -> Event {
        Event {
            id: ID::from(self._id),
            name: self.name,
            description: self.description,
            location: self.location,
            required_skills: self.required_skills,
            urgency: self.urgency,
            date: from_millis(self.date),
            created: from_millis(self.created),
            updated: from_millis(self.updated),
        }
    }

    fn from_domain(event: &Event) -> Self {
        Self {
            _id: event.id.inner(),
            name: event.name.clone(),
            description: event.description.clone(),
            location: event.location.clone(),
            required_skills: event.required_skills.clone(),
            urgency: event.urgency,
            date: event.date.timestamp_millis(),
            created: event.created.timestamp_millis(),
            updated: event.updated.timestamp_millis(),
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": &self._id
        }
    }
}
