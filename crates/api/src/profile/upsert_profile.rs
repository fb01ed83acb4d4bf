use crate::{
    error::HubError,
    shared::{
        guard::Guard,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use volunteer_hub_api_structs::upsert_profile::*;
use volunteer_hub_domain::{unique_skills, InvalidProfileError, Profile, Skill, ID};
use volunteer_hub_infra::HubContext;

pub async fn upsert_profile_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<HubContext>,
) -> Result<HttpResponse, HubError> {
    let body = body.0;
    let user_id = Guard::against_malformed_id(body.user_id)?;
    let availability = Guard::against_malformed_dates(&body.availability)?;

    let usecase = UpsertProfileUseCase {
        user_id,
        full_name: body.full_name,
        address1: body.address1,
        address2: body.address2,
        city: body.city,
        state: body.state,
        zip: body.zip,
        skills: body.skills,
        preferences: body.preferences,
        availability,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            let response = APIResponse::new(res.profile, res.created);
            if res.created {
                HttpResponse::Created().json(response)
            } else {
                HttpResponse::Ok().json(response)
            }
        })
        .map_err(HubError::from)
}

#[derive(Debug)]
pub struct UpsertProfileUseCase {
    pub user_id: ID,
    pub full_name: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub skills: Vec<Skill>,
    pub preferences: String,
    pub availability: Vec<DateTime<Utc>>,
}

#[derive(Debug)]
pub struct UpsertedProfile {
    pub profile: Profile,
    pub created: bool,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    UserNotFound,
    InvalidProfile(InvalidProfileError),
    StorageError,
}

impl From<UseCaseError> for HubError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::UserNotFound => Self::NotFound("User not found".into()),
            UseCaseError::InvalidProfile(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpsertProfileUseCase {
    type Response = UpsertedProfile;

    type Error = UseCaseError;

    const NAME: &'static str = "UpsertProfile";

    async fn execute(&mut self, ctx: &HubContext) -> Result<Self::Response, Self::Error> {
        let user = ctx
            .repos
            .users
            .find(&self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        if user.is_none() {
            return Err(UseCaseError::UserNotFound);
        }

        let existing = ctx
            .repos
            .profiles
            .find_by_user(&self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        let created = existing.is_none();
        let mut profile = existing.unwrap_or_else(|| Profile::new(self.user_id));
        profile.full_name = self.full_name.trim().to_string();
        profile.address1 = self.address1.trim().to_string();
        profile.address2 = self.address2.trim().to_string();
        profile.city = self.city.trim().to_string();
        profile.state = self.state.trim().to_uppercase();
        profile.zip = self.zip.trim().to_string();
        profile.skills = unique_skills(self.skills.clone());
        profile.preferences = self.preferences.clone();
        profile.availability = self.availability.clone();

        profile.validate().map_err(UseCaseError::InvalidProfile)?;

        let res = if created {
            ctx.repos.profiles.insert(&profile).await
        } else {
            ctx.repos.profiles.save(&profile).await
        };
        res.map_err(|_| UseCaseError::StorageError)?;

        Ok(UpsertedProfile { profile, created })
    }
}
