//! Conference value objects

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of conference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConferenceType {
    Academic,
    Commercial,
}

impl ConferenceType {
    pub const ALL: [ConferenceType; 2] = [ConferenceType::Academic, ConferenceType::Commercial];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConferenceType::Academic => "academic",
            ConferenceType::Commercial => "commercial",
        }
    }
}

impl std::fmt::Display for ConferenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConferenceType {
    type Err = ValidationError;

    /// Accepts English and French spellings, case-insensitively
    /// (`academic`, `ACADEMIQUE`, `commercial`, `commerciale`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "academic" | "academique" | "académique" => Ok(ConferenceType::Academic),
            "commercial" | "commerciale" => Ok(ConferenceType::Commercial),
            _ => Err(ValidationError::UnknownConferenceType(s.to_string())),
        }
    }
}
