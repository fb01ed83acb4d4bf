use crate::{
    error::HubError,
    shared::{
        guard::Guard,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use volunteer_hub_api_structs::{dtos::ProfileDTO, get_profile::*};
use volunteer_hub_domain::{Profile, ID};
use volunteer_hub_infra::HubContext;

pub async fn get_profile_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<HubContext>,
) -> Result<HttpResponse, HubError> {
    let user_id = Guard::against_malformed_id(path_params.into_inner().user_id)?;
    let usecase = GetProfileUseCase { user_id };

    execute(usecase, &ctx)
        .await
        .map(|profile| HttpResponse::Ok().json(ProfileDTO::new(profile)))
        .map_err(HubError::from)
}

#[derive(Debug)]
pub struct GetProfileUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound,
    StorageError,
}

impl From<UseCaseError> for HubError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound => Self::NotFound("Profile not found".into()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetProfileUseCase {
    type Response = Profile;

    type Error = UseCaseError;

    const NAME: &'static str = "GetProfile";

    async fn execute(&mut self, ctx: &HubContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .profiles
            .find_by_user(&self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .ok_or(UseCaseError::NotFound)
    }
}
