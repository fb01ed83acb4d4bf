use crate::{
    error::HubError,
    shared::{
        auth::{create_token, hash_password},
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use volunteer_hub_api_structs::register_user::*;
use volunteer_hub_domain::{Profile, User};
use volunteer_hub_infra::{HubContext, InsertOutcome};

pub async fn register_user_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<HubContext>,
) -> Result<HttpResponse, HubError> {
    let body = body.0;
    let usecase = RegisterUserUseCase {
        name: body.name,
        email: body.email,
        password: body.password,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Created().json(APIResponse {
                message: "User registered successfully".into(),
                token: res.token,
                user_name: res.user.name,
                user_id: res.user.id,
            })
        })
        .map_err(HubError::from)
}

pub struct RegisterUserUseCase {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for RegisterUserUseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterUserUseCase")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish()
    }
}

#[derive(Debug)]
pub struct RegisteredUser {
    pub user: User,
    pub token: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    MissingField(&'static str),
    EmailTaken,
    StorageError,
    CredentialsError,
}

impl From<UseCaseError> for HubError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingField(field) => {
                Self::BadClientData(format!("{} is required.", field))
            }
            UseCaseError::EmailTaken => Self::Conflict("Email already in use".into()),
            UseCaseError::StorageError | UseCaseError::CredentialsError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for RegisterUserUseCase {
    type Response = RegisteredUser;

    type Error = UseCaseError;

    const NAME: &'static str = "RegisterUser";

    async fn execute(&mut self, ctx: &HubContext) -> Result<Self::Response, Self::Error> {
        let email = self.email.trim().to_lowercase();
        let fields = [
            ("name", &self.name),
            ("email", &email),
            ("password", &self.password),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(UseCaseError::MissingField(field));
            }
        }

        let existing = ctx
            .repos
            .users
            .find_by_email(&email)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        if existing.is_some() {
            return Err(UseCaseError::EmailTaken);
        }

        let password_hash = hash_password(self.password.clone(), ctx.config.bcrypt_cost)
            .await
            .map_err(|_| UseCaseError::CredentialsError)?;
        let user = User::new(self.name.trim().to_string(), email, password_hash);
        // Another registration may have taken the email since the lookup
        let outcome = ctx
            .repos
            .users
            .insert(&user)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        if outcome == InsertOutcome::Duplicate {
            return Err(UseCaseError::EmailTaken);
        }

        // Every volunteer starts out with a blank profile
        ctx.repos
            .profiles
            .insert(&Profile::new(user.id))
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let token = create_token(&user.id, ctx).map_err(|_| UseCaseError::CredentialsError)?;

        Ok(RegisteredUser { user, token })
    }
}
