use crate::{
    error::HubError,
    shared::{
        guard::Guard,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use volunteer_hub_api_structs::{dtos::ProfileDTO, get_profile_role::*};
use volunteer_hub_domain::{Profile, UserRole, ID};
use volunteer_hub_infra::HubContext;

pub async fn get_profile_role_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<HubContext>,
) -> Result<HttpResponse, HubError> {
    let user_id = Guard::against_malformed_id(path_params.into_inner().user_id)?;
    let usecase = GetProfileRoleUseCase { user_id };

    execute(usecase, &ctx)
        .await
        .map(|(profile, role)| {
            HttpResponse::Ok().json(APIResponse {
                profile: ProfileDTO::new(profile),
                role,
            })
        })
        .map_err(HubError::from)
}

#[derive(Debug)]
pub struct GetProfileRoleUseCase {
    pub user_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    ProfileNotFound,
    UserNotFound,
    StorageError,
}

impl From<UseCaseError> for HubError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ProfileNotFound => Self::NotFound("Profile not found".into()),
            UseCaseError::UserNotFound => Self::NotFound("User not found".into()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetProfileRoleUseCase {
    type Response = (Profile, UserRole);

    type Error = UseCaseError;

    const NAME: &'static str = "GetProfileRole";

    async fn execute(&mut self, ctx: &HubContext) -> Result<Self::Response, Self::Error> {
        let profile = ctx
            .repos
            .profiles
            .find_by_user(&self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .ok_or(UseCaseError::ProfileNotFound)?;
        let user = ctx
            .repos
            .users
            .find(&self.user_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .ok_or(UseCaseError::UserNotFound)?;

        Ok((profile, user.role))
    }
}
