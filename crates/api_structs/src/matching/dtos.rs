use crate::dtos::{ProfileDTO, UserDTO};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use volunteer_hub_domain::{Match, Profile, User, ID};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchDTO {
    pub id: ID,
    pub user_id: ID,
    pub event_id: ID,
    pub matched_on: DateTime<Utc>,
}

impl MatchDTO {
    pub fn new(m: Match) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            event_id: m.event_id,
            matched_on: m.matched_on,
        }
    }
}

/// A volunteer that fits an event, together with the linked `User` if it
/// still exists
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDTO {
    pub profile: ProfileDTO,
    pub user: Option<UserDTO>,
}

impl CandidateDTO {
    pub fn new(profile: Profile, user: Option<User>) -> Self {
        Self {
            profile: ProfileDTO::new(profile),
            user: user.map(UserDTO::new),
        }
    }
}

/// Flat view of a `Match`. Missing users or events are shown as "N/A".
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetailsDTO {
    pub user_name: String,
    pub user_email: String,
    pub event_name: String,
    pub event_date: String,
    pub event_location: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchedUserDTO {
    pub id: ID,
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchedEventDTO {
    pub id: ID,
    pub event_name: String,
    pub event_date: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchedDTO {
    pub id: ID,
    pub user: Option<MatchedUserDTO>,
    pub event: Option<MatchedEventDTO>,
    pub matched_on: DateTime<Utc>,
}
