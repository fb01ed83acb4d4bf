use crate::{
    date::{normalize, CanonicalDate},
    event::Event,
    profile::{Profile, Skill},
};
use chrono_tz::Tz;

/// Decides which volunteer `Profile`s are candidates for an `Event`.
///
/// A `Profile` is a candidate when it shares at least one skill with the
/// required skills of the `Event` and one of its normalized availability
/// dates equals the normalized date of the `Event`.
#[derive(Debug)]
pub struct CandidateFilter<'a> {
    required_skills: &'a [Skill],
    event_date: CanonicalDate,
    tz: Tz,
}

impl<'a> CandidateFilter<'a> {
    pub fn new(event: &'a Event, tz: Tz) -> Self {
        Self {
            required_skills: &event.required_skills,
            event_date: normalize(&event.date, &tz),
            tz,
        }
    }

    pub fn event_date(&self) -> CanonicalDate {
        self.event_date
    }

    pub fn accepts(&self, profile: &Profile) -> bool {
        profile.has_any_skill(self.required_skills)
            && profile
                .availability
                .iter()
                .any(|date| normalize(date, &self.tz) == self.event_date)
    }
}

/// Keeps the candidates among `profiles` without changing their order
pub fn find_candidates(event: &Event, profiles: Vec<Profile>, tz: Tz) -> Vec<Profile> {
    let filter = CandidateFilter::new(event, tz);
    profiles
        .into_iter()
        .filter(|profile| filter.accepts(profile))
        .collect()
}
