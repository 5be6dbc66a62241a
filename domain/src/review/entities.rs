//! Review entities
//!
//! Reviews are owned by the conference service and persisted as a child
//! collection of their parent conference.

use super::rating::Rating;
use crate::core::error::ValidationError;
use crate::core::ids::{ConferenceId, ReviewId};
use crate::core::string::non_blank;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A persisted review of a conference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub conference_id: ConferenceId,
    pub date: NaiveDate,
    pub comment: String,
    pub rating: Rating,
}

impl Review {
    /// The editable part of this review.
    pub fn draft(&self) -> ReviewDraft {
        ReviewDraft {
            date: self.date,
            comment: self.comment.clone(),
            rating: self.rating,
        }
    }
}

/// Review data as submitted by the user, before the service assigns an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub date: NaiveDate,
    pub comment: String,
    pub rating: Rating,
}

impl ReviewDraft {
    /// Build a draft, rejecting an out-of-range rating or an empty comment.
    pub fn new(
        date: NaiveDate,
        comment: impl Into<String>,
        rating: i64,
    ) -> Result<Self, ValidationError> {
        let draft = Self {
            date,
            comment: comment.into(),
            rating: Rating::new(rating)?,
        };
        draft.validate()?;
        Ok(draft)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if non_blank(&self.comment).is_none() {
            return Err(ValidationError::EmptyField { field: "comment" });
        }
        Ok(())
    }

    /// Return a copy of this draft with one field replaced.
    ///
    /// Accepted field names: `date`, `comment` (`texte`), `rating` (`note`).
    pub fn with_field(&self, field: &str, value: &str) -> Result<Self, ValidationError> {
        let mut next = self.clone();
        match field.trim().to_ascii_lowercase().as_str() {
            "date" => {
                next.date = value
                    .trim()
                    .parse()
                    .map_err(|e| ValidationError::invalid_value("date", value, e))?;
            }
            "comment" | "texte" | "text" => {
                next.comment = non_blank(value)
                    .ok_or(ValidationError::EmptyField { field: "comment" })?
                    .to_string();
            }
            "rating" | "note" => {
                let raw: i64 = value
                    .trim()
                    .parse()
                    .map_err(|e| ValidationError::invalid_value("rating", value, e))?;
                next.rating = Rating::new(raw)?;
            }
            other => {
                return Err(ValidationError::UnknownField {
                    entity: "review",
                    field: other.to_string(),
                });
            }
        }
        Ok(next)
    }
}
