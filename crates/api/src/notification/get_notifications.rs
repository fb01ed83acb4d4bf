use crate::{
    error::HubError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use volunteer_hub_api_structs::{dtos::NotificationDTO, get_notifications::*};
use volunteer_hub_domain::Notification;
use volunteer_hub_infra::HubContext;

pub async fn get_notifications_controller(
    ctx: web::Data<HubContext>,
) -> Result<HttpResponse, HubError> {
    execute(GetNotificationsUseCase {}, &ctx)
        .await
        .map(|notifications| {
            let res: APIResponse = notifications
                .into_iter()
                .map(NotificationDTO::new)
                .collect();
            HttpResponse::Ok().json(res)
        })
        .map_err(HubError::from)
}

#[derive(Debug)]
pub struct GetNotificationsUseCase {}

#[derive(Debug)]
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
impl UseCase for GetNotificationsUseCase {
    /// Newest first
    type Response = Vec<Notification>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetNotifications";

    async fn execute(&mut self, ctx: &HubContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .notifications
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
