use super::IMatchRepo;
use crate::repos::shared::{inmemory_repo::*, repo::DeleteResult};
use volunteer_hub_domain::{Match, ID};

pub struct InMemoryMatchRepo {
    matches: std::sync::Mutex<Vec<Match>>,
}

impl InMemoryMatchRepo {
    pub fn new() -> Self {
        Self {
            matches: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IMatchRepo for InMemoryMatchRepo {
    async fn insert_unique(&self, matches: &[Match]) -> anyhow::Result<Vec<Match>> {
        // Check and insert under the same lock
        let mut stored = self.matches.lock().unwrap();
        let mut inserted: Vec<Match> = Vec::new();
        for m in matches {
            if stored.iter().any(|s| s.is_pair(&m.user_id, &m.event_id)) {
                continue;
            }
            stored.push(m.clone());
            inserted.push(m.clone());
        }
        Ok(inserted)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Match>> {
        Ok(find_by(&self.matches, |_| true))
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Match>> {
        Ok(find_by(&self.matches, |m| m.user_id == *user_id))
    }

    async fn find_by_event(&self, event_id: &ID) -> anyhow::Result<Vec<Match>> {
        Ok(find_by(&self.matches, |m| m.event_id == *event_id))
    }

    async fn delete_by_event_and_users(
        &self,
        event_id: &ID,
        user_ids: &[ID],
    ) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.matches, |m| {
            m.event_id == *event_id && user_ids.contains(&m.user_id)
        }))
    }

    async fn delete_by_event(&self, event_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.matches, |m| m.event_id == *event_id))
    }
}
