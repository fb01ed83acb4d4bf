use super::IUserRepo;
use crate::repos::shared::{
    mongo_repo::{self, MongoDocument},
    repo::InsertOutcome,
};
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};
use volunteer_hub_domain::{User, UserRole, ID};

pub struct MongoUserRepo {
    collection: Collection<Document>,
}

impl MongoUserRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("users"),
        }
    }

    pub async fn ensure_indexes(&self) -> anyhow::Result<()> {
        mongo_repo::create_unique_index(&self.collection, doc! { "email": 1 }).await
    }
}

#[async_trait::async_trait]
impl IUserRepo for MongoUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<InsertOutcome> {
        let doc = mongo_repo::entity_to_persistence::<_, UserMongo>(user)?;
        match self.collection.insert_one(doc, None).await {
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(e) if mongo_repo::is_duplicate_key(&e) => Ok(InsertOutcome::Duplicate),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, user_id: &ID) -> anyhow::Result<Option<User>> {
        mongo_repo::delete::<_, UserMongo>(&self.collection, user_id.inner_ref()).await
    }

    async fn find(&self, user_id: &ID) -> anyhow::Result<Option<User>> {
        mongo_repo::find::<_, UserMongo>(&self.collection, user_id.inner_ref()).await
    }

    async fn find_many(&self, user_ids: &[ID]) -> anyhow::Result<Vec<User>> {
        let oids = user_ids.iter().map(|id| id.inner()).collect::<Vec<_>>();
        let filter = doc! {
            "_id": { "$in": oids }
        };
        mongo_repo::find_many_by::<_, UserMongo>(&self.collection, filter, None).await
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let filter = doc! {
            "email": email
        };
        mongo_repo::find_one_by::<_, UserMongo>(&self.collection, filter).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct UserMongo {
    _id: ObjectId,
    name: String,
    email: String,
    password: String,
    role: UserRole,
}

impl MongoDocument<User> for UserMongo {
    fn to_domain(self) -> User {
        User {
            id: ID::from(self._id),
            name: self.name,
            email: self.email,
            password_hash: self.password,
            role: self.role,
        }
    }

    fn from_domain(user: &User) -> Self {
        Self {
            _id: user.id.inner(),
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password_hash.clone(),
            role: user.role,
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": &self._id
        }
    }
}
