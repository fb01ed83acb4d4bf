use crate::error::HubError;
use chrono::{DateTime, Utc};
use volunteer_hub_domain::{parse_date, ID};

pub struct Guard {}

impl Guard {
    pub fn against_malformed_id(val: String) -> Result<ID, HubError> {
        val.parse()
            .map_err(|e| HubError::BadClientData(format!("{}", e)))
    }

    pub fn against_malformed_ids(vals: Vec<String>) -> Result<Vec<ID>, HubError> {
        vals.into_iter().map(Self::against_malformed_id).collect()
    }

    pub fn against_missing(val: Option<String>, field: &str) -> Result<String, HubError> {
        match val {
            Some(val) if !val.trim().is_empty() => Ok(val),
            _ => Err(HubError::BadClientData(format!("{} is required.", field))),
        }
    }

    pub fn against_malformed_date(val: &str) -> Result<DateTime<Utc>, HubError> {
        parse_date(val).map_err(|_| HubError::BadClientData(format!("Invalid date: {}", val)))
    }

    pub fn against_malformed_dates(vals: &[String]) -> Result<Vec<DateTime<Utc>>, HubError> {
        vals.iter().map(|val| Self::against_malformed_date(val)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_ids() {
        assert!(Guard::against_malformed_id("65f1c0a2b3d4e5f6a7b8c9d0".into()).is_ok());
        assert!(Guard::against_malformed_id("65f1c0a2".into()).is_err());
        assert!(Guard::against_malformed_id("not-an-object-id-at-all!".into()).is_err());
        assert!(Guard::against_malformed_ids(vec![
            "65f1c0a2b3d4e5f6a7b8c9d0".into(),
            "nope".into()
        ])
        .is_err());
    }

    #[test]
    fn rejects_missing_values() {
        assert!(matches!(
            Guard::against_missing(None, "eventId"),
            Err(HubError::BadClientData(msg)) if msg == "eventId is required."
        ));
        assert!(Guard::against_missing(Some("  ".into()), "eventId").is_err());
        assert_eq!(
            Guard::against_missing(Some("abc".into()), "eventId").unwrap(),
            "abc"
        );
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(Guard::against_malformed_date("2024-11-01").is_ok());
        assert!(Guard::against_malformed_date("next friday").is_err());
        assert!(Guard::against_malformed_dates(&["2024-11-01".into(), "x".into()]).is_err());
    }
}
