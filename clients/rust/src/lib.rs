mod base;
mod event;
mod history;
mod matching;
mod notification;
mod profile;
mod status;
mod user;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
use event::EventClient;
pub use event::{CreateEventInput, UpdateEventInput};
use history::HistoryClient;
use matching::MatchingClient;
pub use matching::{AssignVolunteersInput, UnassignVolunteersInput};
use notification::NotificationClient;
pub use notification::{CreateCanceledNotificationInput, CreateNotificationInput};
use profile::ProfileClient;
pub use profile::UpsertProfileInput;
use status::StatusClient;
use std::sync::Arc;
use user::UserClient;
pub use user::{LoginUserInput, RegisterUserInput};
pub use volunteer_hub_api_structs::dtos::*;
pub use volunteer_hub_domain::{NotificationKind, Skill, Urgency, UserRole, ID};

// Domain
pub use volunteer_hub_api_structs::dtos::EventDTO as Event;
pub use volunteer_hub_api_structs::dtos::MatchDTO as Match;
pub use volunteer_hub_api_structs::dtos::NotificationDTO as Notification;
pub use volunteer_hub_api_structs::dtos::ProfileDTO as Profile;
pub use volunteer_hub_api_structs::dtos::UserDTO as User;

/// Volunteer Hub Server SDK
///
/// The SDK contains methods for interacting with the Volunteer Hub server
/// API.
#[derive(Clone)]
pub struct VolunteerHubSDK {
    pub event: EventClient,
    pub history: HistoryClient,
    pub matching: MatchingClient,
    pub notification: NotificationClient,
    pub profile: ProfileClient,
    pub status: StatusClient,
    pub user: UserClient,
}

impl VolunteerHubSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let event = EventClient::new(base.clone());
        let history = HistoryClient::new(base.clone());
        let matching = MatchingClient::new(base.clone());
        let notification = NotificationClient::new(base.clone());
        let profile = ProfileClient::new(base.clone());
        let status = StatusClient::new(base.clone());
        let user = UserClient::new(base);

        Self {
            event,
            history,
            matching,
            notification,
            profile,
            status,
            user,
        }
    }
}
