use super::INotificationRepo;
use crate::repos::shared::mongo_repo::{self, from_millis, MongoDocument};
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::FindOptions,
    Collection, Database,
};
use serde::{Deserialize, Serialize};
use volunteer_hub_domain::{EventSnapshot, Notification, NotificationKind, ID};

pub struct MongoNotificationRepo {
    collection: Collection<Document>,
}

impl MongoNotificationRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("notifications"),
        }
    }
}

#[async_trait::async_trait]
impl INotificationRepo for MongoNotificationRepo {
    async fn insert(&self, notification: &Notification) -> anyhow::Result<()> {
        mongo_repo::insert::<_, NotificationMongo>(&self.collection, notification).await
    }

    async fn insert_many(&self, notifications: &[Notification]) -> anyhow::Result<()> {
        mongo_repo::bulk_insert::<_, NotificationMongo>(&self.collection, notifications).await
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Notification>> {
        let options = FindOptions::builder()
            .sort(doc! { "created": -1, "_id": -1 })
            .build();
        mongo_repo::find_many_by::<_, NotificationMongo>(&self.collection, doc! {}, Some(options))
            .await
    }

    async fn find_by_event_and_kind(
        &self,
        event_id: &ID,
        kind: NotificationKind,
    ) -> anyhow::Result<Vec<Notification>> {
        let kind = mongodb::bson::to_bson(&kind)?;
        let filter = doc! {
            "event_id": event_id.inner_ref(),
            "kind": kind
        };
        mongo_repo::find_many_by::<_, NotificationMongo>(&self.collection, filter, None).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct NotificationMongo {
    _id: ObjectId,
    kind: NotificationKind,
    title: String,
    event_id: Option<ObjectId>,
    event_name: String,
    event_description: String,
    event_location: String,
    event_date: Option<i64>,
    user_id: Option<ObjectId>,
    created: i64,
}

impl MongoDocument<Notification> for NotificationMongo {
    fn to_domain(self) -> Notification {
        Notification {
            id: ID::from(self._id),
            kind: self.kind,
            event_id: self.event_id.map(ID::from),
            event: EventSnapshot {
                name: self.event_name,
                description: self.event_description,
                location: self.event_location,
                date: self.event_date.map(from_millis),
            },
            user_id: self.user_id.map(ID::from),
            created: from_millis(self.created),
        }
    }

    fn from_domain(notification: &Notification) -> Self {
        Self {
            _id: notification.id.inner(),
            kind: notification.kind,
            title: notification.title().to_string(),
            event_id: notification.event_id.map(|id| id.inner()),
            event_name: notification.event.name.clone(),
            event_description: notification.event.description.clone(),
            event_location: notification.event.location.clone(),
            event_date: notification.event.date.map(|date| date.timestamp_millis()),
            user_id: notification.user_id.map(|id| id.inner()),
            created: notification.created.timestamp_millis(),
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": &self._id
        }
    }
}
