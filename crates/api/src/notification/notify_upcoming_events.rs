use crate::shared::usecase::UseCase;
use chrono::Duration;
use tracing::info;
use volunteer_hub_domain::{Notification, NotificationKind};
use volunteer_hub_infra::HubContext;

/// Creates an "Upcoming Event Alert!" for every `Event` that takes place
/// within the lookahead window. An `Event` is only alerted once.
#[derive(Debug)]
pub struct NotifyUpcomingEventsUseCase {
    /// Window size in seconds, starting now
    pub lookahead_secs: i64,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for NotifyUpcomingEventsUseCase {
    /// The alerts created by this sweep
    type Response = Vec<Notification>;

    type Error = UseCaseError;

    const NAME: &'static str = "NotifyUpcomingEvents";

    async fn execute(&mut self, ctx: &HubContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.now();
        let end = now + Duration::seconds(self.lookahead_secs.max(0));
        let events = ctx
            .repos
            .events
            .find_by_date_range(now, end)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let mut alerts = Vec::new();
        for event in events {
            let already_alerted = ctx
                .repos
                .notifications
                .find_by_event_and_kind(&event.id, NotificationKind::Upcoming)
                .await
                .map_err(|_| UseCaseError::StorageError)?;
            if already_alerted.is_empty() {
                alerts.push(Notification::for_event(
                    NotificationKind::Upcoming,
                    &event,
                    None,
                    now,
                ));
            }
        }

        if !alerts.is_empty() {
            ctx.repos
                .notifications
                .insert_many(&alerts)
                .await
                .map_err(|_| UseCaseError::StorageError)?;
            info!("Created {} upcoming event alerts", alerts.len());
        }

        Ok(alerts)
    }
}
