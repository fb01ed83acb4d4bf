use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use volunteer_hub_domain::{Profile, Skill, ID};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDTO {
    pub id: ID,
    pub user_id: ID,
    pub full_name: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub skills: Vec<Skill>,
    pub preferences: String,
    pub availability: Vec<DateTime<Utc>>,
}

impl ProfileDTO {
    pub fn new(profile: Profile) -> Self {
        Self {
            id: profile.id,
            user_id: profile.user_id,
            full_name: profile.full_name,
            address1: profile.address1,
            address2: profile.address2,
            city: profile.city,
            state: profile.state,
            zip: profile.zip,
            skills: profile.skills,
            preferences: profile.preferences,
            availability: profile.availability,
        }
    }
}
