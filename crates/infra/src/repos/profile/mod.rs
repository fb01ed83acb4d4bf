mod inmemory;
mod mongo;

pub use inmemory::InMemoryProfileRepo;
pub use mongo::MongoProfileRepo;
use volunteer_hub_domain::{Profile, ID};

#[async_trait::async_trait]
pub trait IProfileRepo: Send + Sync {
    /// Fails when the `User` already has a `Profile`
    async fn insert(&self, profile: &Profile) -> anyhow::Result<()>;
    async fn save(&self, profile: &Profile) -> anyhow::Result<()>;
    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Option<Profile>>;
    /// All `Profile`s in insertion order
    async fn find_all(&self) -> anyhow::Result<Vec<Profile>>;
    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup_context;
    use volunteer_hub_domain::Skill;

    #[tokio::test]
    async fn one_profile_per_user() {
        let ctx = setup_context().await;
        let user_id = ID::new();

        let mut profile = Profile::new(user_id);
        assert!(ctx.repos.profiles.insert(&profile).await.is_ok());
        assert!(ctx
            .repos
            .profiles
            .insert(&Profile::new(user_id))
            .await
            .is_err());

        profile.skills = vec![Skill::ChildCare];
        assert!(ctx.repos.profiles.save(&profile).await.is_ok());
        let found = ctx
            .repos
            .profiles
            .find_by_user(&user_id)
            .await
            .unwrap()
            .expect("To find profile");
        assert_eq!(found.id, profile.id);
        assert_eq!(found.skills, vec![Skill::ChildCare]);

        assert!(ctx.repos.profiles.delete_by_user(&user_id).await.is_ok());
        assert!(ctx
            .repos
            .profiles
            .find_by_user(&user_id)
            .await
            .unwrap()
            .is_none());
    }
}
