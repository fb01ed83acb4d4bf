mod assignment;
mod date;
mod event;
pub mod matching;
mod notification;
mod profile;
mod shared;
mod user;

pub use assignment::Match;
pub use date::{format_date, normalize, parse_date, parse_timezone, CanonicalDate};
pub use event::{Event, EventSnapshot, Urgency};
pub use notification::{Notification, NotificationKind};
pub use profile::{unique_skills, InvalidProfileError, Profile, Skill, US_STATES};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use user::{User, UserRole};

pub use chrono_tz::Tz;
