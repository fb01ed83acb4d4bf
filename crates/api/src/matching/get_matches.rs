use crate::{
    error::HubError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use chrono::SecondsFormat;
use std::collections::HashMap;
use volunteer_hub_api_structs::{
    dtos::{MatchDetailsDTO, MatchedDTO, MatchedEventDTO, MatchedUserDTO},
    get_all_matches, get_matched, get_volunteer_details,
};
use volunteer_hub_domain::{Event, Match, User, ID};
use volunteer_hub_infra::HubContext;

const NOT_AVAILABLE: &str = "N/A";

pub async fn get_all_matches_controller(
    ctx: web::Data<HubContext>,
) -> Result<HttpResponse, HubError> {
    execute(GetMatchesUseCase, &ctx)
        .await
        .map(|matches| {
            let res: get_all_matches::APIResponse =
                matches.iter().map(MatchDetails::to_details).collect();
            HttpResponse::Ok().json(res)
        })
        .map_err(HubError::from)
}

pub async fn get_matched_controller(
    ctx: web::Data<HubContext>,
) -> Result<HttpResponse, HubError> {
    execute(GetMatchesUseCase, &ctx)
        .await
        .map(|matches| {
            let res: get_matched::APIResponse =
                matches.into_iter().map(MatchDetails::into_matched).collect();
            HttpResponse::Ok().json(res)
        })
        .map_err(HubError::from)
}

/// Like [`get_all_matches_controller`] but leaves out matches whose `User`
/// or `Event` no longer exists
pub async fn get_volunteer_details_controller(
    ctx: web::Data<HubContext>,
) -> Result<HttpResponse, HubError> {
    execute(GetMatchesUseCase, &ctx)
        .await
        .map(|matches| {
            let res: get_volunteer_details::APIResponse = matches
                .iter()
                .filter(|m| m.user.is_some() && m.event.is_some())
                .map(MatchDetails::to_details)
                .collect();
            HttpResponse::Ok().json(res)
        })
        .map_err(HubError::from)
}

/// Loads every `Match` together with its `User` and `Event`
#[derive(Debug)]
pub struct GetMatchesUseCase;

#[derive(Debug)]
pub struct MatchDetails {
    pub m: Match,
    pub user: Option<User>,
    pub event: Option<Event>,
}

impl MatchDetails {
    fn to_details(&self) -> MatchDetailsDTO {
        let (user_name, user_email) = match &self.user {
            Some(user) => (user.name.clone(), user.email.clone()),
            None => (NOT_AVAILABLE.into(), NOT_AVAILABLE.into()),
        };
        let (event_name, event_date, event_location) = match &self.event {
            Some(event) => (
                event.name.clone(),
                event.date.to_rfc3339_opts(SecondsFormat::Millis, true),
                event.location.clone(),
            ),
            None => (
                NOT_AVAILABLE.into(),
                NOT_AVAILABLE.into(),
                NOT_AVAILABLE.into(),
            ),
        };
        MatchDetailsDTO {
            user_name,
            user_email,
            event_name,
            event_date,
            event_location,
        }
    }

    fn into_matched(self) -> MatchedDTO {
        MatchedDTO {
            id: self.m.id,
            user: self.user.map(|user| MatchedUserDTO {
                id: user.id,
                name: user.name,
            }),
            event: self.event.map(|event| MatchedEventDTO {
                id: event.id,
                event_name: event.name,
                event_date: event.date,
            }),
            matched_on: self.m.matched_on,
        }
    }
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
impl UseCase for GetMatchesUseCase {
    type Response = Vec<MatchDetails>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetMatches";

    async fn execute(&mut self, ctx: &HubContext) -> Result<Self::Response, Self::Error> {
        let matches = ctx
            .repos
            .matches
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let user_ids = super::unique_ids(matches.iter().map(|m| m.user_id).collect());
        let users = ctx
            .repos
            .users
            .find_many(&user_ids)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .into_iter()
            .map(|user| (user.id, user))
            .collect::<HashMap<ID, User>>();
        let events = ctx
            .repos
            .events
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .into_iter()
            .map(|event| (event.id, event))
            .collect::<HashMap<ID, Event>>();

        Ok(matches
            .into_iter()
            .map(|m| MatchDetails {
                user: users.get(&m.user_id).cloned(),
                event: events.get(&m.event_id).cloned(),
                m,
            })
            .collect())
    }
}
