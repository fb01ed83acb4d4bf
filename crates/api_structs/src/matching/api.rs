use crate::dtos::*;
use serde::{Deserialize, Serialize};

pub mod find_candidates {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub event_id: Option<String>,
    }

    pub type APIResponse = Vec<CandidateDTO>;
}

pub mod assign_volunteers {
    use super::*;
    use crate::dtos::NotificationDTO;

    /// A single user id or a list of them
    #[derive(Debug, Clone, Deserialize, Serialize)]
    #[serde(untagged)]
    pub enum UserIds {
        One(String),
        Many(Vec<String>),
    }

    impl UserIds {
        pub fn into_vec(self) -> Vec<String> {
            match self {
                Self::One(id) => vec![id],
                Self::Many(ids) => ids,
            }
        }
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub event_id: Option<String>,
        #[serde(default)]
        pub user_id: Option<UserIds>,
        #[serde(default)]
        pub action: Option<String>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AssignResponse {
        pub message: String,
        pub new_matches: Vec<MatchDTO>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct UnassignResponse {
        pub message: String,
        pub deleted_count: u64,
        #[serde(default)]
        pub notifications: Vec<NotificationDTO>,
    }
}

pub mod get_all_matches {
    use super::*;

    pub type APIResponse = Vec<MatchDetailsDTO>;
}

pub mod get_matched {
    use super::*;

    pub type APIResponse = Vec<MatchedDTO>;
}

pub mod get_volunteer_details {
    use super::*;

    pub type APIResponse = Vec<MatchDetailsDTO>;
}
