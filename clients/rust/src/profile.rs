use crate::{APIResponse, BaseClient, ID};
use reqwest::StatusCode;
use std::sync::Arc;
use volunteer_hub_api_structs::*;
use volunteer_hub_domain::Skill;

#[derive(Clone)]
pub struct ProfileClient {
    base: Arc<BaseClient>,
}

#[derive(Default)]
pub struct UpsertProfileInput {
    pub user_id: ID,
    pub full_name: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub skills: Vec<Skill>,
    pub preferences: String,
    pub availability: Vec<String>,
}

impl ProfileClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Answers with 201 when the profile was created and 200 when it was updated
    pub async fn upsert(
        &self,
        input: UpsertProfileInput,
    ) -> APIResponse<upsert_profile::APIResponse> {
        let body = upsert_profile::RequestBody {
            user_id: input.user_id.to_string(),
            full_name: input.full_name,
            address1: input.address1,
            address2: input.address2,
            city: input.city,
            state: input.state,
            zip: input.zip,
            skills: input.skills,
            preferences: input.preferences,
            availability: input.availability,
        };
        self.base
            .post_expecting_any(
                body,
                "profile".into(),
                &[StatusCode::CREATED, StatusCode::OK],
            )
            .await
    }

    pub async fn get(&self, user_id: ID) -> APIResponse<get_profile::APIResponse> {
        self.base
            .get(format!("profile/{}", user_id), StatusCode::OK)
            .await
    }

    pub async fn get_role(&self, user_id: ID) -> APIResponse<get_profile_role::APIResponse> {
        self.base
            .get(format!("profile/{}/role", user_id), StatusCode::OK)
            .await
    }
}
