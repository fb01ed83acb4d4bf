use super::subscribers::NotifyOnEventDeleted;
use crate::{
    error::HubError,
    shared::{
        guard::Guard,
        usecase::{execute, Subscriber, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use volunteer_hub_api_structs::delete_event::*;
use volunteer_hub_domain::{Event, ID};
use volunteer_hub_infra::HubContext;

pub async fn delete_event_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<HubContext>,
) -> Result<HttpResponse, HubError> {
    let event_id = Guard::against_malformed_id(path_params.into_inner().event_id)?;
    let usecase = DeleteEventUseCase { event_id };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse {
                message: "Event deleted successfully".into(),
                deleted_matches: res.deleted_matches,
            })
        })
        .map_err(HubError::from)
}

#[derive(Debug)]
pub struct DeleteEventUseCase {
    pub event_id: ID,
}

#[derive(Debug)]
pub struct DeletedEvent {
    pub event: Event,
    pub deleted_matches: u64,
}

#[derive(Debug, PartialEq)]
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
impl UseCase for DeleteEventUseCase {
    type Response = DeletedEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteEvent";

    async fn execute(&mut self, ctx: &HubContext) -> Result<Self::Response, Self::Error> {
        let event = ctx
            .repos
            .events
            .delete(&self.event_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .ok_or(UseCaseError::NotFound(self.event_id))?;

        // Matches can not outlive their event
        let deleted = ctx
            .repos
            .matches
            .delete_by_event(&event.id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(DeletedEvent {
            event,
            deleted_matches: deleted.deleted_count,
        })
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(NotifyOnEventDeleted)]
    }
}
