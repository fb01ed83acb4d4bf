use super::{subscribers::NotifyOnEventCreated, validate_text_fields};
use crate::{
    error::HubError,
    shared::{
        guard::Guard,
        usecase::{execute, Subscriber, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use volunteer_hub_api_structs::create_event::*;
use volunteer_hub_domain::{unique_skills, Event, Skill, Urgency};
use volunteer_hub_infra::HubContext;

pub async fn create_event_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<HubContext>,
) -> Result<HttpResponse, HubError> {
    let body = body.0;
    let date = Guard::against_malformed_date(&body.event_date)?;
    let usecase = CreateEventUseCase {
        name: body.event_name,
        description: body.event_description,
        location: body.location,
        required_skills: body.required_skills,
        urgency: body.urgency,
        date,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| {
            HttpResponse::Created().json(APIResponse::new(event, "Event created successfully"))
        })
        .map_err(HubError::from)
}

#[derive(Debug)]
pub struct CreateEventUseCase {
    pub name: String,
    pub description: String,
    pub location: String,
    pub required_skills: Vec<Skill>,
    pub urgency: Urgency,
    pub date: DateTime<Utc>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    MissingField(&'static str),
    StorageError,
}

impl From<UseCaseError> for HubError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingField(field) => {
                Self::BadClientData(format!("{} is required.", field))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateEventUseCase {
    type Response = Event;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateEvent";

    async fn execute(&mut self, ctx: &HubContext) -> Result<Self::Response, Self::Error> {
        validate_text_fields([
            ("eventName", self.name.as_str()),
            ("eventDescription", self.description.as_str()),
            ("location", self.location.as_str()),
        ])
        .map_err(UseCaseError::MissingField)?;

        let now = ctx.sys.now();
        let e = Event {
            id: Default::default(),
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            required_skills: unique_skills(self.required_skills.clone()),
            urgency: self.urgency,
            date: self.date,
            created: now,
            updated: now,
        };

        ctx.repos
            .events
            .insert(&e)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(e)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(NotifyOnEventCreated)]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use volunteer_hub_domain::{parse_date, NotificationKind};

    fn usecase() -> CreateEventUseCase {
        CreateEventUseCase {
            name: "Food bank".into(),
            description: "Packing boxes".into(),
            location: "Warehouse 3".into(),
            required_skills: vec![Skill::FoodPreparation],
            urgency: Urgency::High,
            date: parse_date("2024-11-01").unwrap(),
        }
    }

    #[actix_web::main]
    #[test]
    async fn creates_event_and_announces_it() {
        let ctx = HubContext::create_inmemory();

        let event = execute(usecase(), &ctx).await.unwrap();
        assert!(ctx.repos.events.find(&event.id).await.unwrap().is_some());

        let notifications = ctx.repos.notifications.find_all().await.unwrap();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, NotificationKind::NewEvent);
        assert_eq!(notifications[0].event.name, "Food bank");
        assert_eq!(notifications[0].user_id, None);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_blank_name() {
        let ctx = HubContext::create_inmemory();
        let mut blank = usecase();
        blank.name = "  ".into();

        let res = execute(blank, &ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::MissingField("eventName"));
        assert!(ctx.repos.notifications.find_all().await.unwrap().is_empty());
    }
}
