use crate::{
    error::HubError,
    shared::{
        guard::Guard,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use volunteer_hub_api_structs::create_notification::*;
use volunteer_hub_domain::{Notification, NotificationKind, ID};
use volunteer_hub_infra::HubContext;

pub async fn create_notification_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<HubContext>,
) -> Result<HttpResponse, HubError> {
    let body = body.into_inner();
    let event_id = Guard::against_missing(body.event_id, "eventId")?;
    let event_id = Guard::against_malformed_id(event_id)?;
    let kind = body
        .notif_type
        .as_deref()
        .and_then(NotificationKind::from_notif_type)
        .ok_or_else(|| HubError::BadClientData("Invalid notification type.".into()))?;
    let usecase = CreateNotificationUseCase { event_id, kind };

    execute(usecase, &ctx)
        .await
        .map(|notification| HttpResponse::Created().json(APIResponse::new(notification)))
        .map_err(HubError::from)
}

/// Broadcasts a `Notification` about an existing `Event`
#[derive(Debug)]
pub struct CreateNotificationUseCase {
    pub event_id: ID,
    pub kind: NotificationKind,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    EventNotFound,
    StorageError,
}

impl From<UseCaseError> for HubError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EventNotFound => Self::NotFound("Event not found.".into()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateNotificationUseCase {
    type Response = Notification;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateNotification";

    async fn execute(&mut self, ctx: &HubContext) -> Result<Self::Response, Self::Error> {
        let event = ctx
            .repos
            .events
            .find(&self.event_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .ok_or(UseCaseError::EventNotFound)?;

        let notification = Notification::for_event(self.kind, &event, None, ctx.sys.now());
        ctx.repos
            .notifications
            .insert(&notification)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(notification)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Utc;
    use volunteer_hub_domain::{Event, Skill, Urgency};

    #[actix_web::main]
    #[test]
    async fn copies_event_fields() {
        let ctx = HubContext::create_inmemory();
        let event = Event {
            id: ID::new(),
            name: "Ride share".into(),
            description: "Driving seniors".into(),
            location: "Senior center".into(),
            required_skills: vec![Skill::Transportation],
            urgency: Urgency::Medium,
            date: Utc::now(),
            created: Utc::now(),
            updated: Utc::now(),
        };
        ctx.repos.events.insert(&event).await.unwrap();

        let notification = execute(
            CreateNotificationUseCase {
                event_id: event.id,
                kind: NotificationKind::UpdatedEvent,
            },
            &ctx,
        )
        .await
        .unwrap();
        assert_eq!(notification.title(), "An Event Has Been Updated");
        assert_eq!(notification.event, event.snapshot());
        assert!(notification.user_id.is_none());
        assert_eq!(ctx.repos.notifications.find_all().await.unwrap().len(), 1);
    }

    #[actix_web::main]
    #[test]
    async fn unknown_event_is_not_found() {
        let ctx = HubContext::create_inmemory();
        let res = execute(
            CreateNotificationUseCase {
                event_id: ID::new(),
                kind: NotificationKind::NewEvent,
            },
            &ctx,
        )
        .await;
        assert_eq!(res.unwrap_err(), UseCaseError::EventNotFound);
    }
}
