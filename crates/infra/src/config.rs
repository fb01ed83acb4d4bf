use chrono_tz::Tz;
use std::{fmt::Display, str::FromStr};
use tracing::{info, warn};
use volunteer_hub_utils::create_random_secret;

const DEFAULT_BCRYPT_COST: u32 = 12;
const BCRYPT_COSTS: std::ops::RangeInclusive<u32> = 4..=31;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Timezone in which event and availability dates are truncated to
    /// midnight before they are compared
    pub reference_tz: Tz,
    /// Secret used to sign the issued tokens
    pub jwt_secret: String,
    pub jwt_expiry_secs: i64,
    pub bcrypt_cost: u32,
    /// Whether unassigning every volunteer of an `Event` at once should
    /// notify the unassigned volunteers
    pub notify_on_unassign_all: bool,
    pub upcoming_events_sweep_interval_secs: u64,
    /// How far ahead of now an `Event` has to be to get an upcoming alert
    pub upcoming_events_lookahead_secs: i64,
}

impl Config {
    pub fn new() -> Self {
        let jwt_secret = match std::env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) => {
                info!("Did not find JWT_SECRET environment variable. Going to create one.");
                create_random_secret(32)
            }
        };

        Self {
            port: from_env("PORT", 5000),
            reference_tz: from_env("REFERENCE_TIMEZONE", chrono_tz::UTC),
            jwt_secret,
            jwt_expiry_secs: from_env("JWT_EXPIRY_SECS", 60 * 60),
            bcrypt_cost: bcrypt_cost_or_default(from_env("BCRYPT_COST", DEFAULT_BCRYPT_COST)),
            notify_on_unassign_all: from_env("NOTIFY_ON_UNASSIGN_ALL", false),
            upcoming_events_sweep_interval_secs: from_env(
                "UPCOMING_EVENTS_SWEEP_INTERVAL_SECS",
                60 * 5,
            ),
            upcoming_events_lookahead_secs: from_env(
                "UPCOMING_EVENTS_LOOKAHEAD_SECS",
                60 * 60 * 24,
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn from_env<T>(name: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    parse_or(name, std::env::var(name).ok(), default)
}

fn parse_or<T>(name: &str, value: Option<String>, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let value = match value {
        Some(value) => value,
        None => return default,
    };
    match value.trim().parse::<T>() {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(
                "The given {}: {} is not valid ({}), falling back to the default: {}.",
                name, value, e, default
            );
            default
        }
    }
}

fn bcrypt_cost_or_default(cost: u32) -> u32 {
    if BCRYPT_COSTS.contains(&cost) {
        return cost;
    }
    warn!(
        "The given BCRYPT_COST: {} is outside of {:?}, falling back to the default: {}.",
        cost, BCRYPT_COSTS, DEFAULT_BCRYPT_COST
    );
    DEFAULT_BCRYPT_COST
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_default_when_missing() {
        assert_eq!(parse_or("PORT", None, 5000usize), 5000);
        assert_eq!(parse_or("NOTIFY_ON_UNASSIGN_ALL", None, false), false);
    }

    #[test]
    fn parses_given_values() {
        assert_eq!(parse_or("PORT", Some("8080".into()), 5000usize), 8080);
        assert_eq!(parse_or("NOTIFY_ON_UNASSIGN_ALL", Some("true".into()), false), true);
        assert_eq!(
            parse_or("REFERENCE_TIMEZONE", Some("Europe/Oslo".into()), chrono_tz::UTC),
            chrono_tz::Europe::Oslo
        );
    }

    #[test]
    fn falls_back_on_invalid_values() {
        assert_eq!(parse_or("PORT", Some("-1".into()), 5000usize), 5000);
        assert_eq!(parse_or("PORT", Some("".into()), 5000usize), 5000);
        assert_eq!(parse_or("NOTIFY_ON_UNASSIGN_ALL", Some("yes".into()), false), false);
        assert_eq!(
            parse_or("REFERENCE_TIMEZONE", Some("Mars/Olympus".into()), chrono_tz::UTC),
            chrono_tz::UTC
        );
    }

    #[test]
    fn bcrypt_cost_must_be_in_range() {
        assert_eq!(bcrypt_cost_or_default(4), 4);
        assert_eq!(bcrypt_cost_or_default(31), 31);
        assert_eq!(bcrypt_cost_or_default(3), DEFAULT_BCRYPT_COST);
        assert_eq!(bcrypt_cost_or_default(32), DEFAULT_BCRYPT_COST);
        assert_eq!(bcrypt_cost_or_default(0), DEFAULT_BCRYPT_COST);
    }
}
