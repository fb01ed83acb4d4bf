mod inmemory;
mod mongo;

use crate::repos::shared::repo::InsertOutcome;
pub use inmemory::InMemoryUserRepo;
pub use mongo::MongoUserRepo;
use volunteer_hub_domain::{User, ID};

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    /// `InsertOutcome::Duplicate` when a `User` with the same email already
    /// exists
    async fn insert(&self, user: &User) -> anyhow::Result<InsertOutcome>;
    async fn delete(&self, user_id: &ID) -> anyhow::Result<Option<User>>;
    async fn find(&self, user_id: &ID) -> anyhow::Result<Option<User>>;
    async fn find_many(&self, user_ids: &[ID]) -> anyhow::Result<Vec<User>>;
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;
}
