use super::IProfileRepo;
use crate::repos::shared::inmemory_repo::*;
use volunteer_hub_domain::{Profile, ID};

pub struct InMemoryProfileRepo {
    profiles: std::sync::Mutex<Vec<Profile>>,
}

impl InMemoryProfileRepo {
    pub fn new() -> Self {
        Self {
            profiles: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IProfileRepo for InMemoryProfileRepo {
    async fn insert(&self, profile: &Profile) -> anyhow::Result<()> {
        let mut profiles = self.profiles.lock().unwrap();
        if profiles.iter().any(|p| p.user_id == profile.user_id) {
            anyhow::bail!("The user: {} already has a profile", profile.user_id);
        }
        profiles.push(profile.clone());
        Ok(())
    }

    async fn save(&self, profile: &Profile) -> anyhow::Result<()> {
        save(profile, &self.profiles);
        Ok(())
    }

    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Option<Profile>> {
        Ok(find_by(&self.profiles, |p| p.user_id == *user_id)
            .into_iter()
            .next())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Profile>> {
        Ok(find_by(&self.profiles, |_| true))
    }

    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<()> {
        delete_by(&self.profiles, |p| p.user_id == *user_id);
        Ok(())
    }
}
