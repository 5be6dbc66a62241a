//! Client-side conference filtering

use super::entities::Conference;
use super::value_objects::ConferenceType;
use crate::core::error::ValidationError;
use std::str::FromStr;

/// Type filter applied to an already fetched conference list.
///
/// Filtering keeps the order returned by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConferenceFilter {
    #[default]
    All,
    Type(ConferenceType),
}

impl ConferenceFilter {
    pub fn matches(&self, conference: &Conference) -> bool {
        match self {
            ConferenceFilter::All => true,
            ConferenceFilter::Type(kind) => conference.kind == *kind,
        }
    }

    pub fn apply(&self, conferences: Vec<Conference>) -> Vec<Conference> {
        conferences.into_iter().filter(|c| self.matches(c)).collect()
    }
}

impl From<Option<ConferenceType>> for ConferenceFilter {
    fn from(kind: Option<ConferenceType>) -> Self {
        kind.map_or(ConferenceFilter::All, ConferenceFilter::Type)
    }
}

impl FromStr for ConferenceFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(ConferenceFilter::All)
        } else {
            s.parse().map(ConferenceFilter::Type)
        }
    }
}
