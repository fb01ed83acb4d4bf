use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Volunteer,
    Admin,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Volunteer
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub email: String,
    /// bcrypt hash, the plain password is never stored
    pub password_hash: String,
    pub role: UserRole,
}

impl User {
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: Default::default(),
            name,
            email,
            password_hash,
            role: Default::default(),
        }
    }
}

impl Entity for User {
    fn id(&self) -> &ID {
        &self.id
    }
}
