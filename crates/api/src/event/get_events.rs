use crate::{
    error::HubError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use volunteer_hub_api_structs::{dtos::EventDTO, get_events::*};
use volunteer_hub_domain::Event;
use volunteer_hub_infra::HubContext;

pub async fn get_events_controller(ctx: web::Data<HubContext>) -> Result<HttpResponse, HubError> {
    execute(GetEventsUseCase {}, &ctx)
        .await
        .map(|events| {
            let res: APIResponse = events.into_iter().map(EventDTO::new).collect();
            HttpResponse::Ok().json(res)
        })
        .map_err(HubError::from)
}

#[derive(Debug)]
pub struct GetEventsUseCase {}

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
impl UseCase for GetEventsUseCase {
    type Response = Vec<Event>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetEvents";

    async fn execute(&mut self, ctx: &HubContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .events
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
