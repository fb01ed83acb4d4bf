use super::{subscribers::NotifyOnEventUpdated, validate_text_fields};
use crate::{
    error::HubError,
    shared::{
        guard::Guard,
        usecase::{execute, Subscriber, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use volunteer_hub_api_structs::update_event::*;
use volunteer_hub_domain::{unique_skills, Event, Skill, Urgency, ID};
use volunteer_hub_infra::HubContext;

pub async fn update_event_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<HubContext>,
) -> Result<HttpResponse, HubError> {
    let event_id = Guard::against_malformed_id(path_params.into_inner().event_id)?;
    let body = body.0;
    let date = match &body.event_date {
        Some(date) => Some(Guard::against_malformed_date(date)?),
        None => None,
    };

    let usecase = UpdateEventUseCase {
        event_id,
        name: body.event_name,
        description: body.event_description,
        location: body.location,
        required_skills: body.required_skills,
        urgency: body.urgency,
        date,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event, "Event updated successfully")))
        .map_err(HubError::from)
}

#[derive(Debug, Default)]
pub struct UpdateEventUseCase {
    pub event_id: ID,
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub required_skills: Option<Vec<Skill>>,
    pub urgency: Option<Urgency>,
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    MissingField(&'static str),
    StorageError,
}

impl From<UseCaseError> for HubError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(event_id) => Self::NotFound(format!(
                "The event with id: {}, was not found.",
                event_id
            )),
            UseCaseError::MissingField(field) => {
                Self::BadClientData(format!("{} can not be empty.", field))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateEventUseCase {
    type Response = Event;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateEvent";

    async fn execute(&mut self, ctx: &HubContext) -> Result<Self::Response, Self::Error> {
        let mut e = match ctx.repos.events.find(&self.event_id).await {
            Ok(Some(event)) => event,
            Ok(None) => return Err(UseCaseError::NotFound(self.event_id)),
            Err(_) => return Err(UseCaseError::StorageError),
        };

        if let Some(name) = &self.name {
            e.name = name.trim().to_string();
        }
        if let Some(description) = &self.description {
            e.description = description.trim().to_string();
        }
        if let Some(location) = &self.location {
            e.location = location.trim().to_string();
        }
        if let Some(required_skills) = &self.required_skills {
            e.required_skills = unique_skills(required_skills.clone());
        }
        if let Some(urgency) = self.urgency {
            e.urgency = urgency;
        }
        if let Some(date) = self.date {
            e.date = date;
        }
        validate_text_fields([
            ("eventName", e.name.as_str()),
            ("eventDescription", e.description.as_str()),
            ("location", e.location.as_str()),
        ])
        .map_err(UseCaseError::MissingField)?;

        e.updated = ctx.sys.now();

        ctx.repos
            .events
            .save(&e)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(e)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(NotifyOnEventUpdated)]
    }
}
