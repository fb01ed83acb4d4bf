use crate::dtos::ProfileDTO;
use serde::{Deserialize, Serialize};
use volunteer_hub_domain::{Profile, Skill, UserRole};

pub mod upsert_profile {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub user_id: String,
        #[serde(default)]
        pub full_name: String,
        #[serde(default)]
        pub address1: String,
        #[serde(default)]
        pub address2: String,
        #[serde(default)]
        pub city: String,
        #[serde(default)]
        pub state: String,
        #[serde(default)]
        pub zip: String,
        #[serde(default)]
        pub skills: Vec<Skill>,
        #[serde(default)]
        pub preferences: String,
        /// `YYYY-MM-DD` dates or RFC 3339 timestamps
        #[serde(default)]
        pub availability: Vec<String>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub message: String,
        pub profile: ProfileDTO,
    }

    impl APIResponse {
        pub fn new(profile: Profile, created: bool) -> Self {
            let message = if created {
                "Profile created successfully"
            } else {
                "Profile updated successfully"
            };
            Self {
                message: message.into(),
                profile: ProfileDTO::new(profile),
            }
        }
    }
}

pub mod get_profile {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub user_id: String,
    }

    pub type APIResponse = ProfileDTO;
}

pub mod get_profile_role {
    use super::*;

    pub use super::get_profile::PathParams;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub profile: ProfileDTO,
        pub role: UserRole,
    }
}
