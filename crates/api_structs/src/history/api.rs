use crate::dtos::HistoryEntryDTO;
use serde::{Deserialize, Serialize};

pub mod get_history {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        #[serde(default)]
        pub user_id: Option<String>,
    }

    pub type APIResponse = Vec<HistoryEntryDTO>;
}
