use crate::{APIResponse, BaseClient, ID};
use reqwest::StatusCode;
use std::sync::Arc;
use volunteer_hub_api_structs::get_history;

#[derive(Clone)]
pub struct HistoryClient {
    base: Arc<BaseClient>,
}

impl HistoryClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get(&self, user_id: ID) -> APIResponse<get_history::APIResponse> {
        self.base
            .get(format!("history?userId={}", user_id), StatusCode::OK)
            .await
    }
}
