use crate::{
    error::HubError,
    shared::{
        guard::Guard,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use volunteer_hub_api_structs::create_canceled_notification::*;
use volunteer_hub_domain::{EventSnapshot, Notification, NotificationKind};
use volunteer_hub_infra::HubContext;

pub async fn create_canceled_notification_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<HubContext>,
) -> Result<HttpResponse, HubError> {
    let body = body.into_inner();
    if body.event_name.trim().is_empty() {
        return Err(HubError::BadClientData("eventName is required.".into()));
    }
    let date = match body.event_date {
        Some(date) => Some(Guard::against_malformed_date(&date)?),
        None => None,
    };
    let usecase = CreateCanceledNotificationUseCase {
        event: EventSnapshot {
            name: body.event_name,
            description: body.event_description,
            location: body.event_location,
            date,
        },
    };

    execute(usecase, &ctx)
        .await
        .map(|notification| HttpResponse::Created().json(APIResponse::new(notification)))
        .map_err(HubError::from)
}

/// Announces the cancellation of an `Event` that may no longer be stored
#[derive(Debug)]
pub struct CreateCanceledNotificationUseCase {
    pub event: EventSnapshot,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for HubError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateCanceledNotificationUseCase {
    type Response = Notification;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateCanceledNotification";

    async fn execute(&mut self, ctx: &HubContext) -> Result<Self::Response, Self::Error> {
        let notification = Notification::from_snapshot(
            NotificationKind::Canceled,
            self.event.clone(),
            ctx.sys.now(),
        );
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

    #[actix_web::main]
    #[test]
    async fn stores_a_broadcast_notice() {
        let ctx = HubContext::create_inmemory();
        let event = EventSnapshot {
            name: "Beach cleanup".into(),
            description: "Canceled due to weather".into(),
            location: "North beach".into(),
            date: None,
        };

        let notification = execute(CreateCanceledNotificationUseCase { event: event.clone() }, &ctx)
            .await
            .unwrap();
        assert_eq!(notification.kind, NotificationKind::Canceled);
        assert_eq!(notification.title(), "An Event Has Been Canceled");
        assert_eq!(notification.event, event);
        assert!(notification.event_id.is_none());
        assert!(notification.user_id.is_none());

        let stored = ctx.repos.notifications.find_all().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, notification.id);
    }
}
