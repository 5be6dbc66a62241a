//! Review rating value object

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};

/// A review rating: an integer between 1 and 5 inclusive (Value Object).
///
/// Submissions go through [`Rating::new`], which rejects out-of-range
/// values before any network call. Data coming back from the conference
/// service goes through [`Rating::saturating`] so that whatever is
/// displayed is always within range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Validate a rating for submission.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::RatingOutOfRange(value))
        }
    }

    /// Clamp an arbitrary value into range.
    pub fn saturating(value: i64) -> Self {
        Self(value.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// Five-slot star rendering, filled stars first.
    pub fn stars(self) -> String {
        let filled = usize::from(self.0);
        format!(
            "{}{}",
            "★".repeat(filled),
            "☆".repeat(usize::from(Self::MAX) - filled)
        )
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl TryFrom<i64> for Rating {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
