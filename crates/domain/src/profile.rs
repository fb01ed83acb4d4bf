use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fixed set of skills a volunteer can list and an `Event` can require
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    #[serde(rename = "Food Preparation & Serving")]
    FoodPreparation,
    #[serde(rename = "Cleaning & Sanitation")]
    Cleaning,
    #[serde(rename = "First Aid & CPR")]
    FirstAid,
    #[serde(rename = "Event Planning & Coordination")]
    EventPlanning,
    #[serde(rename = "Counseling & Emotional Support")]
    Counseling,
    #[serde(rename = "Child Care")]
    ChildCare,
    #[serde(rename = "Administrative & Clerical Work")]
    Administrative,
    #[serde(rename = "Language Translation & Interpretation")]
    Translation,
    #[serde(rename = "Transportation & Driving")]
    Transportation,
    #[serde(rename = "Handyman Skills (Basic Repairs & Maintenance)")]
    Handyman,
}

/// Drops repeated skills, keeping the first occurrence of each
pub fn unique_skills(skills: Vec<Skill>) -> Vec<Skill> {
    let mut unique = Vec::with_capacity(skills.len());
    for skill in skills {
        if !unique.contains(&skill) {
            unique.push(skill);
        }
    }
    unique
}

pub const US_STATES: [&str; 50] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA", "KS",
    "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", "NM", "NY",
    "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV",
    "WI", "WY",
];

/// A volunteer's skills and availability. Every `User` has at most one.
#[derive(Debug, Clone, Default)]
pub struct Profile {
    pub id: ID,
    pub user_id: ID,
    pub full_name: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    /// Either empty or one of `US_STATES`
    pub state: String,
    pub zip: String,
    pub skills: Vec<Skill>,
    pub preferences: String,
    /// Raw dates as sent by the volunteer, they are normalized at match time
    pub availability: Vec<DateTime<Utc>>,
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidProfileError {
    #[error("{field} can not be longer than {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("{0} is not a valid state")]
    InvalidState(String),
}

impl Profile {
    /// The blank profile created together with a `User`
    pub fn new(user_id: ID) -> Self {
        Self {
            id: Default::default(),
            user_id,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), InvalidProfileError> {
        let limits = [
            ("fullName", &self.full_name, 50),
            ("address1", &self.address1, 100),
            ("address2", &self.address2, 100),
            ("city", &self.city, 100),
            ("zip", &self.zip, 9),
        ];
        for (field, value, max) in limits {
            if value.chars().count() > max {
                return Err(InvalidProfileError::TooLong { field, max });
            }
        }

        if !self.state.is_empty() && !US_STATES.contains(&self.state.as_str()) {
            return Err(InvalidProfileError::InvalidState(self.state.clone()));
        }

        Ok(())
    }

    pub fn has_any_skill(&self, skills: &[Skill]) -> bool {
        self.skills.iter().any(|skill| skills.contains(skill))
    }
}

impl Entity for Profile {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_profile_is_valid() {
        let profile = Profile::new(ID::new());
        assert!(profile.validate().is_ok());
        assert!(profile.skills.is_empty());
        assert!(profile.availability.is_empty());
    }

    #[test]
    fn rejects_too_long_fields() {
        let mut profile = Profile::new(ID::new());
        profile.zip = "1234567890".into();
        assert_eq!(
            profile.validate(),
            Err(InvalidProfileError::TooLong {
                field: "zip",
                max: 9
            })
        );

        let mut profile = Profile::new(ID::new());
        profile.full_name = "a".repeat(51);
        assert!(profile.validate().is_err());
        profile.full_name = "a".repeat(50);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn rejects_unknown_state() {
        let mut profile = Profile::new(ID::new());
        profile.state = "TX".into();
        assert!(profile.validate().is_ok());
        profile.state = "XX".into();
        assert_eq!(
            profile.validate(),
            Err(InvalidProfileError::InvalidState("XX".into()))
        );
    }

    #[test]
    fn skills_use_display_names() {
        let skill: Skill = serde_json::from_str("\"First Aid & CPR\"").unwrap();
        assert_eq!(skill, Skill::FirstAid);
        assert!(serde_json::from_str::<Skill>("\"Juggling\"").is_err());
    }

    #[test]
    fn removes_repeated_skills() {
        assert_eq!(
            unique_skills(vec![Skill::Cleaning, Skill::ChildCare, Skill::Cleaning]),
            vec![Skill::Cleaning, Skill::ChildCare]
        );
        assert!(unique_skills(vec![]).is_empty());
    }

    #[test]
    fn any_skill_intersection() {
        let mut profile = Profile::new(ID::new());
        assert!(!profile.has_any_skill(&[Skill::ChildCare]));
        profile.skills = vec![Skill::Cleaning, Skill::ChildCare];
        assert!(profile.has_any_skill(&[Skill::FirstAid, Skill::ChildCare]));
        assert!(!profile.has_any_skill(&[Skill::FirstAid]));
        assert!(!profile.has_any_skill(&[]));
    }
}
