use crate::{
    error::HubError,
    shared::{
        guard::Guard,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use volunteer_hub_api_structs::{dtos::EventDTO, get_event::*};
use volunteer_hub_domain::{Event, ID};
use volunteer_hub_infra::HubContext;

pub async fn get_event_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<HubContext>,
) -> Result<HttpResponse, HubError> {
    let event_id = Guard::against_malformed_id(path_params.into_inner().event_id)?;
    let usecase = GetEventUseCase { event_id };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(EventDTO::new(event)))
        .map_err(HubError::from)
}

#[derive(Debug)]
pub struct GetEventUseCase {
    pub event_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for HubError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(event_id) => Self::NotFound(format!(
                "The event with id: {}, was not found.",
                event_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventUseCase {
    type Response = Event;

    type Error = UseCaseError;

    const NAME: &'static str = "GetEvent";

    async fn execute(&mut self, ctx: &HubContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .events
            .find(&self.event_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .ok_or(UseCaseError::NotFound(self.event_id))
    }
}
