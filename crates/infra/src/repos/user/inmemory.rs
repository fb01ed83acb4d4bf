use super::IUserRepo;
use crate::repos::shared::{inmemory_repo::*, repo::InsertOutcome};
use volunteer_hub_domain::{User, ID};

pub struct InMemoryUserRepo {
    users: std::sync::Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self {
            users: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for InMemoryUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<InsertOutcome> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Ok(InsertOutcome::Duplicate);
        }
        users.push(user.clone());
        Ok(InsertOutcome::Inserted)
    }

    async fn delete(&self, user_id: &ID) -> anyhow::Result<Option<User>> {
        Ok(delete(user_id, &self.users))
    }

    async fn find(&self, user_id: &ID) -> anyhow::Result<Option<User>> {
        Ok(find(user_id, &self.users))
    }

    async fn find_many(&self, user_ids: &[ID]) -> anyhow::Result<Vec<User>> {
        Ok(find_by(&self.users, |u| user_ids.contains(&u.id)))
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        Ok(find_by(&self.users, |u| u.email == email).into_iter().next())
    }
}
