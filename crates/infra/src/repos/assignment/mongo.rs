use super::IMatchRepo;
use crate::repos::shared::{
    mongo_repo::{self, from_millis, MongoDocument, DUPLICATE_KEY_CODE},
    repo::DeleteResult,
};
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    error::{BulkWriteFailure, ErrorKind},
    options::InsertManyOptions,
    Collection, Database,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use volunteer_hub_domain::{Match, ID};

pub struct MongoMatchRepo {
    collection: Collection<Document>,
}

impl MongoMatchRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("matches"),
        }
    }

    pub async fn ensure_indexes(&self) -> anyhow::Result<()> {
        mongo_repo::create_unique_index(&self.collection, doc! { "user_id": 1, "event_id": 1 })
            .await
    }
}

#[async_trait::async_trait]
impl IMatchRepo for MongoMatchRepo {
    async fn insert_unique(&self, matches: &[Match]) -> anyhow::Result<Vec<Match>> {
        if matches.is_empty() {
            return Ok(vec![]);
        }
        let docs = matches
            .iter()
            .map(mongo_repo::entity_to_persistence::<_, MatchMongo>)
            .collect::<anyhow::Result<Vec<_>>>()?;
        // Unordered so that one duplicate does not stop the rest of the batch
        let options = InsertManyOptions::builder().ordered(false).build();

        let err = match self.collection.insert_many(docs, options).await {
            Ok(_) => return Ok(matches.to_vec()),
            Err(e) => e,
        };
        let rejected = match err.kind.as_ref() {
            ErrorKind::BulkWrite(failure) => rejected_duplicates(failure),
            _ => None,
        };
        match rejected {
            Some(rejected) => Ok(matches
                .iter()
                .enumerate()
                .filter(|(index, _)| !rejected.contains(index))
                .map(|(_, m)| m.clone())
                .collect()),
            None => Err(err.into()),
        }
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Match>> {
        mongo_repo::find_many_by::<_, MatchMongo>(&self.collection, doc! {}, None).await
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Match>> {
        let filter = doc! {
            "user_id": user_id.inner_ref()
        };
        mongo_repo::find_many_by::<_, MatchMongo>(&self.collection, filter, None).await
    }

    async fn find_by_event(&self, event_id: &ID) -> anyhow::Result<Vec<Match>> {
        let filter = doc! {
            "event_id": event_id.inner_ref()
        };
        mongo_repo::find_many_by::<_, MatchMongo>(&self.collection, filter, None).await
    }

    async fn delete_by_event_and_users(
        &self,
        event_id: &ID,
        user_ids: &[ID],
    ) -> anyhow::Result<DeleteResult> {
        let user_ids = user_ids.iter().map(|id| id.inner()).collect::<Vec<_>>();
        let filter = doc! {
            "event_id": event_id.inner_ref(),
            "user_id": {
                "$in": user_ids
            }
        };
        mongo_repo::delete_many_by(&self.collection, filter).await
    }

    async fn delete_by_event(&self, event_id: &ID) -> anyhow::Result<DeleteResult> {
        let filter = doc! {
            "event_id": event_id.inner_ref()
        };
        mongo_repo::delete_many_by(&self.collection, filter).await
    }
}

/// Indexes of the documents rejected by the unique index, or `None` when the
/// bulk write failed for any other reason
fn rejected_duplicates(failure: &BulkWriteFailure) -> Option<HashSet<usize>> {
    if failure.write_concern_error.is_some() {
        return None;
    }
    let write_errors = failure.write_errors.as_deref().unwrap_or_default();
    if write_errors.iter().any(|w| w.code != DUPLICATE_KEY_CODE) {
        return None;
    }
    Some(write_errors.iter().map(|w| w.index).collect())
}

#[derive(Debug, Serialize, Deserialize)]
struct MatchMongo {
    _id: ObjectId,
    user_id: ObjectId,
    event_id: ObjectId,
    matched_on: i64,
}

impl MongoDocument<Match> for MatchMongo {
    fn to_domain(self) -> Match {
        Match {
            id: ID::from(self._id),
            user_id: ID::from(self.user_id),
            event_id: ID::from(self.event_id),
            matched_on: from_millis(self.matched_on),
        }
    }

    fn from_domain(m: &Match) -> Self {
        Self {
            _id: m.id.inner(),
            user_id: m.user_id.inner(),
            event_id: m.event_id.inner(),
            matched_on: m.matched_on.timestamp_millis(),
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": &self._id
        }
    }
}
