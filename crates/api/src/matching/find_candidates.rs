use crate::{
    error::HubError,
    shared::{
        guard::Guard,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use std::collections::HashMap;
use tracing::{debug, info};
use volunteer_hub_api_structs::{dtos::CandidateDTO, find_candidates::*};
use volunteer_hub_domain::{matching::find_candidates, normalize, Profile, User, ID};
use volunteer_hub_infra::HubContext;

pub async fn find_candidates_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<HubContext>,
) -> Result<HttpResponse, HubError> {
    let event_id = Guard::against_missing(body.0.event_id, "eventId")?;
    let event_id = Guard::against_malformed_id(event_id)?;
    let usecase = FindCandidatesUseCase { event_id };

    execute(usecase, &ctx)
        .await
        .map(|candidates| {
            let res: APIResponse = candidates
                .into_iter()
                .map(|c| CandidateDTO::new(c.profile, c.user))
                .collect();
            HttpResponse::Ok().json(res)
        })
        .map_err(HubError::from)
}

/// Finds the volunteers whose skills and availability fit an `Event`.
/// Nothing is written.
#[derive(Debug)]
pub struct FindCandidatesUseCase {
    pub event_id: ID,
}

#[derive(Debug)]
pub struct Candidate {
    pub profile: Profile,
    /// `None` if the `User` of the `Profile` no longer exists
    pub user: Option<User>,
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
impl UseCase for FindCandidatesUseCase {
    type Response = Vec<Candidate>;

    type Error = UseCaseError;

    const NAME: &'static str = "FindCandidates";

    async fn execute(&mut self, ctx: &HubContext) -> Result<Self::Response, Self::Error> {
        let event = ctx
            .repos
            .events
            .find(&self.event_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .ok_or(UseCaseError::EventNotFound)?;

        let tz = ctx.config.reference_tz;
        debug!(
            "Normalized date of event {}: {}",
            event.id,
            normalize(&event.date, &tz).date()
        );

        let profiles = ctx
            .repos
            .profiles
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        let profiles = find_candidates(&event, profiles, tz);
        info!(
            "Number of volunteers matching event {}: {}",
            event.id,
            profiles.len()
        );

        let user_ids = profiles.iter().map(|p| p.user_id).collect::<Vec<_>>();
        let mut users = ctx
            .repos
            .users
            .find_many(&user_ids)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .into_iter()
            .map(|user| (user.id, user))
            .collect::<HashMap<_, _>>();

        Ok(profiles
            .into_iter()
            .map(|profile| Candidate {
                user: users.remove(&profile.user_id),
                profile,
            })
            .collect())
    }
}
