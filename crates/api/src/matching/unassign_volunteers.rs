use super::unique_ids;
use crate::{error::HubError, shared::usecase::UseCase};
use futures::future::join_all;
use tracing::info;
use volunteer_hub_domain::{Event, Notification, NotificationKind, ID};
use volunteer_hub_infra::HubContext;

/// Removes volunteers from an `Event`. Without any `user_ids` every
/// volunteer of the `Event` is removed.
#[derive(Debug)]
pub struct UnassignVolunteersUseCase {
    pub event_id: ID,
    pub user_ids: Vec<ID>,
}

#[derive(Debug)]
pub struct UnassignedVolunteers {
    pub deleted_count: u64,
    pub notifications: Vec<Notification>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NoMatchesFound,
    EventNotFound,
    StorageError,
    /// The matches were removed but their notifications were not stored
    NotificationError,
}

impl From<UseCaseError> for HubError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NoMatchesFound => {
                Self::NotFound("No matches found to unassign.".into())
            }
            UseCaseError::EventNotFound => Self::NotFound("Event not found.".into()),
            UseCaseError::StorageError | UseCaseError::NotificationError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UnassignVolunteersUseCase {
    type Response = UnassignedVolunteers;

    type Error = UseCaseError;

    const NAME: &'static str = "UnassignVolunteers";

    async fn execute(&mut self, ctx: &HubContext) -> Result<Self::Response, Self::Error> {
        let user_ids = unique_ids(self.user_ids.clone());
        if user_ids.is_empty() {
            return self.unassign_all(ctx).await;
        }

        let deleted = ctx
            .repos
            .matches
            .delete_by_event_and_users(&self.event_id, &user_ids)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        if deleted.deleted_count == 0 {
            return Err(UseCaseError::NoMatchesFound);
        }

        let event = ctx
            .repos
            .events
            .find(&self.event_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .ok_or(UseCaseError::EventNotFound)?;
        let notifications = notify_unassigned(&event, &user_ids, ctx).await?;

        Ok(UnassignedVolunteers {
            deleted_count: deleted.deleted_count,
            notifications,
        })
    }
}

impl UnassignVolunteersUseCase {
    async fn unassign_all(&self, ctx: &HubContext) -> Result<UnassignedVolunteers, UseCaseError> {
        let notify = ctx.config.notify_on_unassign_all;
        let assigned = if notify {
            ctx.repos
                .matches
                .find_by_event(&self.event_id)
                .await
                .map_err(|_| UseCaseError::StorageError)?
                .into_iter()
                .map(|m| m.user_id)
                .collect()
        } else {
            Vec::new()
        };

        let deleted = ctx
            .repos
            .matches
            .delete_by_event(&self.event_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        if deleted.deleted_count == 0 {
            return Err(UseCaseError::NoMatchesFound);
        }
        info!(
            "Unassigned all {} volunteers from event {}",
            deleted.deleted_count, self.event_id
        );

        let notifications = if notify {
            let event = ctx
                .repos
                .events
                .find(&self.event_id)
                .await
                .map_err(|_| UseCaseError::StorageError)?
                .ok_or(UseCaseError::EventNotFound)?;
            notify_unassigned(&event, &assigned, ctx).await?
        } else {
            Vec::new()
        };

        Ok(UnassignedVolunteers {
            deleted_count: deleted.deleted_count,
            notifications,
        })
    }
}

async fn notify_unassigned(
    event: &Event,
    user_ids: &[ID],
    ctx: &HubContext,
) -> Result<Vec<Notification>, UseCaseError> {
    let now = ctx.sys.now();
    let created = join_all(user_ids.iter().map(|user_id| async move {
        let notification =
            Notification::for_event(NotificationKind::Unassigned, event, Some(*user_id), now);
        ctx.repos
            .notifications
            .insert(&notification)
            .await
            .map(|_| notification)
    }))
    .await;

    created
        .into_iter()
        .collect::<anyhow::Result<Vec<_>>>()
        .map_err(|_| UseCaseError::NotificationError)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::{
        failing_repos::{FailingEventRepo, FailingNotificationRepo},
        usecase::execute,
    };
    use chrono::Utc;
    use std::sync::Arc;
    use volunteer_hub_domain::{Match, Skill, Urgency};

    async fn setup(ctx: &HubContext, assigned: usize) -> (Event, Vec<ID>) {
        let event = Event {
            id: ID::new(),
            name: "Library reading".into(),
            description: "Reading to kids".into(),
            location: "Central library".into(),
            required_skills: vec![Skill::ChildCare],
            urgency: Urgency::Low,
            date: Utc::now(),
            created: Utc::now(),
            updated: Utc::now(),
        };
        ctx.repos.events.insert(&event).await.unwrap();
        let user_ids = (0..assigned).map(|_| ID::new()).collect::<Vec<_>>();
        let matches = user_ids
            .iter()
            .map(|user_id| Match::new(*user_id, event.id, Utc::now()))
            .collect::<Vec<_>>();
        ctx.repos.matches.insert_unique(&matches).await.unwrap();
        (event, user_ids)
    }

    #[actix_web::main]
    #[test]
    async fn unassigns_and_notifies_targeted_volunteers() {
        let ctx = HubContext::create_inmemory();
        let (event, user_ids) = setup(&ctx, 2).await;

        let res = execute(
            UnassignVolunteersUseCase {
                event_id: event.id,
                user_ids: vec![user_ids[0]],
            },
            &ctx,
        )
        .await
        .unwrap();
        assert_eq!(res.deleted_count, 1);
        assert_eq!(res.notifications.len(), 1);
        assert_eq!(res.notifications[0].kind, NotificationKind::Unassigned);
        assert_eq!(res.notifications[0].user_id, Some(user_ids[0]));
        let remaining = ctx.repos.matches.find_by_event(&event.id).await.unwrap();
        assert_eq!(remaining.len(), 1);
    }

    #[actix_web::main]
    #[test]
    async fn unassigning_twice_is_not_found() {
        let ctx = HubContext::create_inmemory();
        let (event, user_ids) = setup(&ctx, 1).await;
        let usecase = || UnassignVolunteersUseCase {
            event_id: event.id,
            user_ids: user_ids.clone(),
        };

        assert!(execute(usecase(), &ctx).await.is_ok());
        let res = execute(usecase(), &ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::NoMatchesFound);
        assert_eq!(ctx.repos.notifications.find_all().await.unwrap().len(), 1);
    }

    #[actix_web::main]
    #[test]
    async fn unassigns_everyone_without_notifications() {
        let ctx = HubContext::create_inmemory();
        let (event, _) = setup(&ctx, 3).await;
        let (other_event, _) = setup(&ctx, 1).await;

        let res = execute(
            UnassignVolunteersUseCase {
                event_id: event.id,
                user_ids: vec![],
            },
            &ctx,
        )
        .await
        .unwrap();
        assert_eq!(res.deleted_count, 3);
        assert!(res.notifications.is_empty());
        assert!(ctx.repos.notifications.find_all().await.unwrap().is_empty());
        assert!(ctx
            .repos
            .matches
            .find_by_event(&event.id)
            .await
            .unwrap()
            .is_empty());
        let other_matches = ctx.repos.matches.find_by_event(&other_event.id).await;
        assert_eq!(other_matches.unwrap().len(), 1);

        let res = execute(
            UnassignVolunteersUseCase {
                event_id: event.id,
                user_ids: vec![],
            },
            &ctx,
        )
        .await;
        assert_eq!(res.unwrap_err(), UseCaseError::NoMatchesFound);
    }

    #[actix_web::main]
    #[test]
    async fn unassign_all_can_notify() {
        let mut ctx = HubContext::create_inmemory();
        ctx.config.notify_on_unassign_all = true;
        let (event, user_ids) = setup(&ctx, 2).await;

        let res = execute(
            UnassignVolunteersUseCase {
                event_id: event.id,
                user_ids: vec![],
            },
            &ctx,
        )
        .await
        .unwrap();
        assert_eq!(res.deleted_count, 2);
        let mut notified = res
            .notifications
            .iter()
            .filter_map(|n| n.user_id)
            .collect::<Vec<_>>();
        let mut expected = user_ids.clone();
        notified.sort_by_key(|id| id.as_string());
        expected.sort_by_key(|id| id.as_string());
        assert_eq!(notified, expected);
    }

    #[actix_web::main]
    #[test]
    async fn vanished_event_is_reported_after_removal() {
        let ctx = HubContext::create_inmemory();
        let (event, user_ids) = setup(&ctx, 1).await;
        ctx.repos.events.delete(&event.id).await.unwrap();

        let res = execute(
            UnassignVolunteersUseCase {
                event_id: event.id,
                user_ids,
            },
            &ctx,
        )
        .await;
        assert_eq!(res.unwrap_err(), UseCaseError::EventNotFound);
        assert!(ctx
            .repos
            .matches
            .find_by_event(&event.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn removal_stays_when_notifications_fail() {
        let mut ctx = HubContext::create_inmemory();
        let (event, user_ids) = setup(&ctx, 2).await;
        ctx.repos.notifications = Arc::new(FailingNotificationRepo);

        let res = execute(
            UnassignVolunteersUseCase {
                event_id: event.id,
                user_ids: vec![user_ids[0]],
            },
            &ctx,
        )
        .await;
        let err = res.unwrap_err();
        assert_eq!(err, UseCaseError::NotificationError);
        assert!(matches!(HubError::from(err), HubError::InternalError));

        let remaining = ctx.repos.matches.find_by_event(&event.id).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].user_id, user_ids[1]);
    }

    #[actix_web::main]
    #[test]
    async fn unavailable_event_store_is_not_a_missing_event() {
        let mut ctx = HubContext::create_inmemory();
        let (event, user_ids) = setup(&ctx, 1).await;
        ctx.repos.events = Arc::new(FailingEventRepo);

        let res = execute(
            UnassignVolunteersUseCase {
                event_id: event.id,
                user_ids,
            },
            &ctx,
        )
        .await;
        assert_eq!(res.unwrap_err(), UseCaseError::StorageError);
    }
}
