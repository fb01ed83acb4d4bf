use chrono::prelude::*;
use chrono_tz::Tz;

/// Parses a date as sent by clients. Plain calendar dates (`2024-11-01`) are
/// read as midnight UTC, anything else has to be an RFC 3339 timestamp.
pub fn parse_date(datestr: &str) -> anyhow::Result<DateTime<Utc>> {
    let datestr = datestr.trim();
    if let Ok(date) = NaiveDate::parse_from_str(datestr, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|midnight| Utc.from_utc_datetime(&midnight))
            .ok_or_else(|| anyhow::Error::msg(datestr.to_string()));
    }

    DateTime::parse_from_rfc3339(datestr)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|_| anyhow::Error::msg(datestr.to_string()))
}

pub fn parse_timezone(tz: &str) -> anyhow::Result<Tz> {
    tz.parse::<Tz>()
        .map_err(|_| anyhow::Error::msg(format!("Unknown timezone: {}", tz)))
}

/// Equality key produced by [`normalize`]. It is a calendar date in the
/// reference timezone, so it carries no time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalDate(NaiveDate);

impl CanonicalDate {
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Midnight of this date in the given timezone. `None` only when midnight
    /// does not exist locally, e.g. a DST gap starting at 00:00.
    pub fn midnight(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        self.0
            .and_hms_opt(0, 0, 0)
            .and_then(|naive| tz.from_local_datetime(&naive).earliest())
    }
}

/// Adds one calendar day to `date` and truncates it to midnight in `tz`.
///
/// Dates arrive from the clients one day early, so both the date of an
/// `Event` and every availability date of a `Profile` go through this exactly
/// once before they are compared. Applying it twice shifts the date twice.
pub fn normalize(date: &DateTime<Utc>, tz: &Tz) -> CanonicalDate {
    let local_date = date.with_timezone(tz).naive_local().date();
    CanonicalDate(local_date.succ_opt().unwrap_or(local_date))
}

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%F").to_string()
}
