use super::IProfileRepo;
use crate::repos::shared::mongo_repo::{self, from_millis, MongoDocument};
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};
use volunteer_hub_domain::{Profile, Skill, ID};

pub struct MongoProfileRepo {
    collection: Collection<Document>,
}

impl MongoProfileRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("profiles"),
        }
    }

    pub async fn ensure_indexes(&self) -> anyhow::Result<()> {
        mongo_repo::create_unique_index(&self.collection, doc! { "user_id": 1 }).await
    }
}

#[async_trait::async_trait]
impl IProfileRepo for MongoProfileRepo {
    async fn insert(&self, profile: &Profile) -> anyhow::Result<()> {
        mongo_repo::insert::<_, ProfileMongo>(&self.collection, profile).await
    }

    async fn save(&self, profile: &Profile) -> anyhow::Result<()> {
        mongo_repo::save::<_, ProfileMongo>(&self.collection, profile).await
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Option<Profile>> {
        let filter = doc! {
            "user_id": user_id.inner_ref()
        };
        mongo_repo::find_one_by::<_, ProfileMongo>(&self.collection, filter).await
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Profile>> {
        mongo_repo::find_many_by::<_, ProfileMongo>(&self.collection, doc! {}, None).await
    }

    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<()> {
        let filter = doc! {
            "user_id": user_id.inner_ref()
        };
        mongo_repo::delete_many_by(&self.collection, filter)
            .await
            .map(|_| ())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ProfileMongo {
    _id: ObjectId,
    user_id: ObjectId,
    full_name: String,
    address1: String,
    address2: String,
    city: String,
    state: String,
    zip: String,
    skills: Vec<Skill>,
    preferences: String,
    availability: Vec<i64>,
}

impl MongoDocument<Profile> for ProfileMongo {
    fn to_domain(self) -> Profile {
        Profile {
            id: ID::from(self._id),
            user_id: ID::from(self.user_id),
            full_name: self.full_name,
            address1: self.address1,
            address2: self.address2,
            city: self.city,
            state: self.state,
            zip: self.zip,
            skills: self.skills,
            preferences: self.preferences,
            availability: self.availability.into_iter().map(from_millis).collect(),
        }
    }

    fn from_domain(profile: &Profile) -> Self {
        Self {
            _id: profile.id.inner(),
            user_id: profile.user_id.inner(),
            full_name: profile.full_name.clone(),
            address1: profile.address1.clone(),
            address2: profile.address2.clone(),
            city: profile.city.clone(),
            state: profile.state.clone(),
            zip: profile.zip.clone(),
            skills: profile.skills.clone(),
            preferences: profile.preferences.clone(),
            availability: profile
                .availability
                .iter()
                .map(|date| date.timestamp_millis())
                .collect(),
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": &self._id
        }
    }
}
