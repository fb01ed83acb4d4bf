use crate::{APIResponse, BaseClient};
use reqwest::StatusCode;
use std::sync::Arc;
use volunteer_hub_api_structs::*;

#[derive(Clone)]
pub struct UserClient {
    base: Arc<BaseClient>,
}

pub struct RegisterUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct LoginUserInput {
    pub email: String,
    pub password: String,
}

impl UserClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn register(
        &self,
        input: RegisterUserInput,
    ) -> APIResponse<register_user::APIResponse> {
        let body = register_user::RequestBody {
            name: input.name,
            email: input.email,
            password: input.password,
        };
        self.base
            .post(body, "register".into(), StatusCode::CREATED)
            .await
    }

    pub async fn login(&self, input: LoginUserInput) -> APIResponse<login_user::APIResponse> {
        let body = login_user::RequestBody {
            email: input.email,
            password: input.password,
        };
        self.base.post(body, "login".into(), StatusCode::OK).await
    }
}
