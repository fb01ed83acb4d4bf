mod event;
mod history;
mod matching;
mod notification;
mod profile;
mod status;
mod user;

pub mod dtos {
    pub use crate::event::dtos::*;
    pub use crate::history::dtos::*;
    pub use crate::matching::dtos::*;
    pub use crate::notification::dtos::*;
    pub use crate::profile::dtos::*;
    pub use crate::user::dtos::*;
}

pub use crate::event::api::*;
pub use crate::history::api::*;
pub use crate::matching::api::*;
pub use crate::notification::api::*;
pub use crate::profile::api::*;
pub use crate::status::api::*;
pub use crate::user::api::*;

/// Body of every error response
#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
