use super::{
    create_event::CreateEventUseCase, delete_event::DeleteEventUseCase,
    delete_event::DeletedEvent, update_event::UpdateEventUseCase,
};
use crate::shared::usecase::Subscriber;
use tracing::error;
use volunteer_hub_domain::{Event, Notification, NotificationKind};
use volunteer_hub_infra::HubContext;

async fn record(kind: NotificationKind, e: &Event, ctx: &HubContext) {
    let notification = Notification::for_event(kind, e, None, ctx.sys.now());
    // Sideeffect, the event change itself already succeeded
    if let Err(err) = ctx.repos.notifications.insert(&notification).await {
        error!(
            "Unable to record {:?} notification for event {}: {:?}",
            kind, e.id, err
        );
    }
}

pub struct NotifyOnEventCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateEventUseCase> for NotifyOnEventCreated {
    async fn notify(&self, e: &Event, ctx: &HubContext) {
        record(NotificationKind::NewEvent, e, ctx).await;
    }
}

pub struct NotifyOnEventUpdated;

#[async_trait::async_trait(?Send)]
impl Subscriber<UpdateEventUseCase> for NotifyOnEventUpdated {
    async fn notify(&self, e: &Event, ctx: &HubContext) {
        record(NotificationKind::UpdatedEvent, e, ctx).await;
    }
}

pub struct NotifyOnEventDeleted;

#[async_trait::async_trait(?Send)]
impl Subscriber<DeleteEventUseCase> for NotifyOnEventDeleted {
    async fn notify(&self, res: &DeletedEvent, ctx: &HubContext) {
        record(NotificationKind::Canceled, &res.event, ctx).await;
    }
}
