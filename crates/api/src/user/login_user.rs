use crate::{
    error::HubError,
    shared::{
        auth::{create_token, verify_password},
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use volunteer_hub_api_structs::login_user::*;
use volunteer_hub_domain::User;
use volunteer_hub_infra::HubContext;

pub async fn login_user_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<HubContext>,
) -> Result<HttpResponse, HubError> {
    let body = body.0;
    let usecase = LoginUserUseCase {
        email: body.email,
        password: body.password,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse {
                token: res.token,
                user_name: res.user.name,
                message: "Login successful".into(),
            })
        })
        .map_err(HubError::from)
}

pub struct LoginUserUseCase {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginUserUseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginUserUseCase")
            .field("email", &self.email)
            .finish()
    }
}

#[derive(Debug)]
pub struct LoggedInUser {
    pub user: User,
    pub token: String,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidCredentials,
    CredentialsError,
    StorageError,
}

impl From<UseCaseError> for HubError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidCredentials => Self::Unauthorized("Invalid credentials".into()),
            UseCaseError::CredentialsError | UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for LoginUserUseCase {
    type Response = LoggedInUser;

    type Error = UseCaseError;

    const NAME: &'static str = "LoginUser";

    async fn execute(&mut self, ctx: &HubContext) -> Result<Self::Response, Self::Error> {
        let email = self.email.trim().to_lowercase();
        let user = match ctx.repos.users.find_by_email(&email).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(UseCaseError::InvalidCredentials),
            Err(_) => return Err(UseCaseError::StorageError),
        };

        let valid = verify_password(self.password.clone(), user.password_hash.clone())
            .await
            .map_err(|_| UseCaseError::CredentialsError)?;
        if !valid {
            return Err(UseCaseError::InvalidCredentials);
        }

        let token = create_token(&user.id, ctx).map_err(|_| UseCaseError::CredentialsError)?;

        Ok(LoggedInUser { user, token })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::auth::hash_password;

    async fn setup() -> HubContext {
        let ctx = HubContext::create_inmemory();
        let password_hash = hash_password("s3cret".into(), 4).await.unwrap();
        let user = User::new("Grace".into(), "grace@example.com".into(), password_hash);
        ctx.repos.users.insert(&user).await.unwrap();
        ctx
    }

    #[actix_web::main]
    #[test]
    async fn logs_in_with_valid_credentials() {
        let ctx = setup().await;
        let usecase = LoginUserUseCase {
            email: "grace@example.com".into(),
            password: "s3cret".into(),
        };

        let res = execute(usecase, &ctx).await.unwrap();
        assert_eq!(res.user.name, "Grace");
        assert!(!res.token.is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_invalid_credentials() {
        let ctx = setup().await;

        let wrong_password = LoginUserUseCase {
            email: "grace@example.com".into(),
            password: "s3cret!".into(),
        };
        assert_eq!(
            execute(wrong_password, &ctx).await.unwrap_err(),
            UseCaseError::InvalidCredentials
        );

        let unknown_user = LoginUserUseCase {
            email: "nobody@example.com".into(),
            password: "s3cret".into(),
        };
        assert_eq!(
            execute(unknown_user, &ctx).await.unwrap_err(),
            UseCaseError::InvalidCredentials
        );
    }
}
