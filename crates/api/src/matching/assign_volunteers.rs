use super::unique_ids;
use crate::{error::HubError, shared::usecase::UseCase};
use tracing::info;
use volunteer_hub_domain::{Match, Notification, NotificationKind, ID};
use volunteer_hub_infra::HubContext;

/// Assigns volunteers to an `Event`. Volunteers that are already assigned
/// are skipped, every newly assigned volunteer gets a "matched"
/// `Notification`.
#[derive(Debug)]
pub struct AssignVolunteersUseCase {
    pub event_id: ID,
    pub user_ids: Vec<ID>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NoUsers,
    EventNotFound,
    UsersNotFound,
    AllAlreadyAssigned,
    StorageError,
    /// The matches were stored but their notifications were not
    NotificationError,
}

impl From<UseCaseError> for HubError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NoUsers => Self::BadClientData(
                "At least one userId must be provided for assignment.".into(),
            ),
            UseCaseError::EventNotFound => Self::NotFound("Event not found.".into()),
            UseCaseError::UsersNotFound => Self::NotFound("One or more users not found.".into()),
            UseCaseError::AllAlreadyAssigned => {
                Self::Conflict("All users are already assigned to this event.".into())
            }
            UseCaseError::StorageError | UseCaseError::NotificationError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for AssignVolunteersUseCase {
    /// Only the `Match`es created by this call
    type Response = Vec<Match>;

    type Error = UseCaseError;

    const NAME: &'static str = "AssignVolunteers";

    async fn execute(&mut self, ctx: &HubContext) -> Result<Self::Response, Self::Error> {
        let user_ids = unique_ids(self.user_ids.clone());
        if user_ids.is_empty() {
            return Err(UseCaseError::NoUsers);
        }

        let event = ctx
            .repos
            .events
            .find(&self.event_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .ok_or(UseCaseError::EventNotFound)?;

        let users = ctx
            .repos
            .users
            .find_many(&user_ids)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        if users.len() != user_ids.len() {
            return Err(UseCaseError::UsersNotFound);
        }

        let now = ctx.sys.now();
        let matches = user_ids
            .iter()
            .map(|user_id| Match::new(*user_id, event.id, now))
            .collect::<Vec<_>>();
        let new_matches = ctx
            .repos
            .matches
            .insert_unique(&matches)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        if new_matches.is_empty() {
            return Err(UseCaseError::AllAlreadyAssigned);
        }
        info!(
            "Assigned {} of {} volunteers to event {}",
            new_matches.len(),
            user_ids.len(),
            event.id
        );

        let notifications = new_matches
            .iter()
            .map(|m| {
                Notification::for_event(NotificationKind::Matched, &event, Some(m.user_id), now)
            })
            .collect::<Vec<_>>();
        ctx.repos
            .notifications
            .insert_many(&notifications)
            .await
            .map_err(|_| UseCaseError::NotificationError)?;

        Ok(new_matches)
    }
}
