mod inmemory;
mod mongo;

use crate::repos::shared::repo::DeleteResult;
pub use inmemory::InMemoryMatchRepo;
pub use mongo::MongoMatchRepo;
use volunteer_hub_domain::{Match, ID};

#[async_trait::async_trait]
pub trait IMatchRepo: Send + Sync {
    /// Inserts every `Match` whose (user, event) pair is not stored yet and
    /// returns the ones that were inserted. Pairs that already exist are
    /// skipped without an error.
    async fn insert_unique(&self, matches: &[Match]) -> anyhow::Result<Vec<Match>>;
    async fn find_all(&self) -> anyhow::Result<Vec<Match>>;
    async fn find_by_user(&self, user_id: &ID) -> anyhow::Result<Vec<Match>>;
    async fn find_by_event(&self, event_id: &ID) -> anyhow::Result<Vec<Match>>;
    async fn delete_by_event_and_users(
        &self,
        event_id: &ID,
        user_ids: &[ID],
    ) -> anyhow::Result<DeleteResult>;
    async fn delete_by_event(&self, event_id: &ID) -> anyhow::Result<DeleteResult>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context;
    use chrono::Utc;
    use volunteer_hub_domain::{Match, ID};

    #[tokio::test]
    async fn skips_pairs_that_already_exist() {
        let ctx = setup_context().await;
        let event_id = ID::new();
        let user1 = ID::new();
        let user2 = ID::new();

        let inserted = ctx
            .repos
            .matches
            .insert_unique(&[Match::new(user1, event_id, Utc::now())])
            .await
            .unwrap();
        assert_eq!(inserted.len(), 1);

        let inserted = ctx
            .repos
            .matches
            .insert_unique(&[
                Match::new(user1, event_id, Utc::now()),
                Match::new(user2, event_id, Utc::now()),
            ])
            .await
            .unwrap();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0].user_id, user2);

        // Duplicates within the same batch are skipped as well
        let other_event = ID::new();
        let inserted = ctx
            .repos
            .matches
            .insert_unique(&[
                Match::new(user1, other_event, Utc::now()),
                Match::new(user1, other_event, Utc::now()),
            ])
            .await
            .unwrap();
        assert_eq!(inserted.len(), 1);

        assert_eq!(
            ctx.repos.matches.find_by_event(&event_id).await.unwrap().len(),
            2
        );
        assert_eq!(
            ctx.repos.matches.find_by_user(&user1).await.unwrap().len(),
            2
        );
    }

    #[tokio::test]
    async fn deletes_by_event_and_users() {
        let ctx = setup_context().await;
        let event_id = ID::new();
        let users = vec![ID::new(), ID::new(), ID::new()];
        let matches = users
            .iter()
            .map(|user_id| Match::new(*user_id, event_id, Utc::now()))
            .collect::<Vec<_>>();
        ctx.repos.matches.insert_unique(&matches).await.unwrap();

        let res = ctx
            .repos
            .matches
            .delete_by_event_and_users(&event_id, &users[..1])
            .await
            .unwrap();
        assert_eq!(res.deleted_count, 1);
        let res = ctx
            .repos
            .matches
            .delete_by_event_and_users(&event_id, &users[..1])
            .await
            .unwrap();
        assert_eq!(res.deleted_count, 0);

        let res = ctx.repos.matches.delete_by_event(&event_id).await.unwrap();
        assert_eq!(res.deleted_count, 2);
        assert!(ctx
            .repos
            .matches
            .find_by_event(&event_id)
            .await
            .unwrap()
            .is_empty());
    }
}
