use crate::{APIResponse, BaseClient, ID};
use reqwest::StatusCode;
use std::sync::Arc;
use volunteer_hub_api_structs::{assign_volunteers::UserIds, *};

#[derive(Clone)]
pub struct MatchingClient {
    base: Arc<BaseClient>,
}

pub struct AssignVolunteersInput {
    pub event_id: ID,
    pub user_ids: Vec<ID>,
}

pub struct UnassignVolunteersInput {
    pub event_id: ID,
    /// Every volunteer of the event is unassigned when empty
    pub user_ids: Vec<ID>,
}

fn to_user_ids(user_ids: Vec<ID>) -> Option<UserIds> {
    if user_ids.is_empty() {
        None
    } else {
        Some(UserIds::Many(
            user_ids.into_iter().map(|id| id.to_string()).collect(),
        ))
    }
}

impl MatchingClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn find_candidates(
        &self,
        event_id: ID,
    ) -> APIResponse<find_candidates::APIResponse> {
        let body = find_candidates::RequestBody {
            event_id: Some(event_id.to_string()),
        };
        self.base
            .post(body, "matching/match".into(), StatusCode::OK)
            .await
    }

    pub async fn assign(
        &self,
        input: AssignVolunteersInput,
    ) -> APIResponse<assign_volunteers::AssignResponse> {
        let body = assign_volunteers::RequestBody {
            event_id: Some(input.event_id.to_string()),
            user_id: to_user_ids(input.user_ids),
            action: Some("assign".into()),
        };
        self.base
            .post(body, "matching/assign".into(), StatusCode::CREATED)
            .await
    }

    pub async fn unassign(
        &self,
        input: UnassignVolunteersInput,
    ) -> APIResponse<assign_volunteers::UnassignResponse> {
        let body = assign_volunteers::RequestBody {
            event_id: Some(input.event_id.to_string()),
            user_id: to_user_ids(input.user_ids),
            action: Some("unassign".into()),
        };
        self.base
            .post(body, "matching/assign".into(), StatusCode::OK)
            .await
    }

    pub async fn get_all(&self) -> APIResponse<get_all_matches::APIResponse> {
        self.base.get("matching/all".into(), StatusCode::OK).await
    }

    pub async fn get_matched(&self) -> APIResponse<get_matched::APIResponse> {
        self.base
            .get("matching/matched".into(), StatusCode::OK)
            .await
    }

    pub async fn get_volunteer_details(
        &self,
    ) -> APIResponse<get_volunteer_details::APIResponse> {
        self.base
            .get("matching/volunteer-details".into(), StatusCode::OK)
            .await
    }
}
