mod assignment;
mod event;
mod notification;
mod profile;
mod shared;
mod user;

use assignment::{InMemoryMatchRepo, MongoMatchRepo};
use event::{InMemoryEventRepo, MongoEventRepo};
use mongodb::{options::ClientOptions, Client};
use notification::{InMemoryNotificationRepo, MongoNotificationRepo};
use profile::{InMemoryProfileRepo, MongoProfileRepo};
use std::sync::Arc;
use tracing::info;
use user::{InMemoryUserRepo, MongoUserRepo};

pub use assignment::IMatchRepo;
pub use event::IEventRepo;
pub use notification::INotificationRepo;
pub use profile::IProfileRepo;
pub use shared::repo::{DeleteResult, InsertOutcome};
pub use user::IUserRepo;

#[derive(Clone)]
pub struct Repos {
    pub users: Arc<dyn IUserRepo>,
    pub profiles: Arc<dyn IProfileRepo>,
    pub events: Arc<dyn IEventRepo>,
    pub matches: Arc<dyn IMatchRepo>,
    pub notifications: Arc<dyn INotificationRepo>,
}

impl Repos {
    pub async fn create_mongodb(
        connection_string: &str,
        db_name: &str,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let client_options = ClientOptions::parse(connection_string).await?;
        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        // This is needed to make sure that db is ready when opening server
        info!("DB CHECKING CONNECTION ...");
        db.collection("server-start")
            .insert_one(
                mongodb::bson::doc! {
                "server-start": 1
                },
                None,
            )
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        let users = MongoUserRepo::new(&db);
        let profiles = MongoProfileRepo::new(&db);
        let matches = MongoMatchRepo::new(&db);
        users.ensure_indexes().await?;
        profiles.ensure_indexes().await?;
        matches.ensure_indexes().await?;
        info!("DB INDEXES ... [done]");

        Ok(Self {
            users: Arc::new(users),
            profiles: Arc::new(profiles),
            events: Arc::new(MongoEventRepo::new(&db)),
            matches: Arc::new(matches),
            notifications: Arc::new(MongoNotificationRepo::new(&db)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepo::new()),
            profiles: Arc::new(InMemoryProfileRepo::new()),
            events: Arc::new(InMemoryEventRepo::new()),
            matches: Arc::new(InMemoryMatchRepo::new()),
            notifications: Arc::new(InMemoryNotificationRepo::new()),
        }
    }
}
