use crate::{
    error::HubError,
    shared::{
        guard::Guard,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use std::collections::HashMap;
use volunteer_hub_api_structs::{dtos::HistoryEntryDTO, get_history::*};
use volunteer_hub_domain::{Event, Match, ID};
use volunteer_hub_infra::HubContext;

pub async fn get_history_controller(
    query: web::Query<QueryParams>,
    ctx: web::Data<HubContext>,
) -> Result<HttpResponse, HubError> {
    let user_id = query
        .into_inner()
        .user_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| HubError::BadClientData("User ID is required".into()))?;
    let user_id = Guard::against_malformed_id(user_id)?;
    let usecase = GetHistoryUseCase { user_id };

    execute(usecase, &ctx)
        .await
        .map(|entries| {
            let res: APIResponse = entries
                .into_iter()
                .map(|(event, m)| HistoryEntryDTO::new(event, &m))
                .collect();
            HttpResponse::Ok().json(res)
        })
        .map_err(HubError::from)
}

/// The events a volunteer has been matched to. Matches of deleted events
/// are left out.
#[derive(Debug)]
pub struct GetHistoryUseCase {
    pub user_id: ID,
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
impl UseCase for GetHistoryUseCase {
    type Response = Vec<(Event, Match)>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetHistory";

    async fn execute(&mut self, ctx: &HubContext) -> Result<Self::Response, Self::Error> {
        let matches = ctx
            .repos
            .matches
            .find_by_user(&self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        if matches.is_empty() {
            return Ok(Vec::new());
        }

        let events = ctx
            .repos
            .events
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .into_iter()
            .map(|event| (event.id, event))
            .collect::<HashMap<_, _>>();

        Ok(matches
            .into_iter()
            .filter_map(|m| events.get(&m.event_id).cloned().map(|event| (event, m)))
            .collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Utc;
    use volunteer_hub_domain::{Skill, Urgency};

    fn event(name: &str) -> Event {
        Event {
            id: ID::new(),
            name: name.into(),
            description: "Helping out".into(),
            location: "Community center".into(),
            required_skills: vec![Skill::Counseling],
            urgency: Urgency::High,
            date: Utc::now(),
            created: Utc::now(),
            updated: Utc::now(),
        }
    }

    #[actix_web::main]
    #[test]
    async fn lists_matched_events_of_the_volunteer() {
        let ctx = HubContext::create_inmemory();
        let user_id = ID::new();
        let kept = event("Support group");
        let deleted = event("Crisis line");
        let others = event("Food bank");
        for e in [&kept, &others] {
            ctx.repos.events.insert(e).await.unwrap();
        }
        ctx.repos
            .matches
            .insert_unique(&[
                Match::new(user_id, kept.id, Utc::now()),
                Match::new(user_id, deleted.id, Utc::now()),
                Match::new(ID::new(), others.id, Utc::now()),
            ])
            .await
            .unwrap();

        let history = execute(GetHistoryUseCase { user_id }, &ctx).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].0.name, "Support group");
        assert_eq!(history[0].1.user_id, user_id);

        let entry = HistoryEntryDTO::new(history[0].0.clone(), &history[0].1);
        assert_eq!(entry.participation_status, "Pending");
    }

    #[actix_web::main]
    #[test]
    async fn empty_for_unknown_volunteer() {
        let ctx = HubContext::create_inmemory();
        let history = execute(GetHistoryUseCase { user_id: ID::new() }, &ctx)
            .await
            .unwrap();
        assert!(history.is_empty());
    }
}
