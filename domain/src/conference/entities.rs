//! Conference entities
//!
//! A conference is owned by the conference service. It may reference one
//! keynote speaker through [`Conference::keynote_id`], a soft reference into
//! a different service that the conference service never validates.

use super::value_objects::ConferenceType;
use crate::core::error::ValidationError;
use crate::core::ids::{ConferenceId, KeynoteId};
use crate::core::string::{is_clear_marker, non_blank};
use crate::review::entities::Review;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Highest score a conference can carry.
pub const MAX_SCORE: f64 = 5.0;

/// A persisted conference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conference {
    pub id: ConferenceId,
    pub title: String,
    pub kind: ConferenceType,
    pub date: NaiveDate,
    /// Length in minutes.
    pub duration_minutes: u32,
    pub registered_count: u32,
    /// Average review score in `[0, 5]`, maintained by the conference service.
    pub score: Option<f64>,
    pub keynote_id: Option<KeynoteId>,
    /// Embedded review collection, when the service chose to include it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
}

impl Conference {
    /// Number of embedded reviews, or `None` when no collection was embedded.
    pub fn embedded_review_count(&self) -> Option<usize> {
        self.reviews.as_ref().map(Vec::len)
    }

    pub fn has_keynote(&self) -> bool {
        self.keynote_id.is_some()
    }

    /// The editable part of this conference.
    pub fn draft(&self) -> ConferenceDraft {
        ConferenceDraft {
            title: self.title.clone(),
            kind: self.kind,
            date: self.date,
            duration_minutes: self.duration_minutes,
            registered_count: self.registered_count,
            score: self.score,
            keynote_id: self.keynote_id,
        }
    }
}

/// Conference data as submitted for creation or update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConferenceDraft {
    pub title: String,
    pub kind: ConferenceType,
    pub date: NaiveDate,
    pub duration_minutes: u32,
    pub registered_count: u32,
    pub score: Option<f64>,
    pub keynote_id: Option<KeynoteId>,
}

impl ConferenceDraft {
    pub fn new(
        title: impl Into<String>,
        kind: ConferenceType,
        date: NaiveDate,
        duration_minutes: u32,
    ) -> Self {
        Self {
            title: title.into(),
            kind,
            date,
            duration_minutes,
            registered_count: 0,
            score: None,
            keynote_id: None,
        }
    }

    pub fn with_keynote(mut self, keynote_id: KeynoteId) -> Self {
        self.keynote_id = Some(keynote_id);
        self
    }

    pub fn with_registered_count(mut self, count: u32) -> Self {
        self.registered_count = count;
        self
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// Check the fields the console can verify without a round trip:
    /// non-empty title, positive duration, score within `[0, 5]`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if non_blank(&self.title).is_none() {
            return Err(ValidationError::EmptyField { field: "title" });
        }
        if self.duration_minutes == 0 {
            return Err(ValidationError::NonPositiveDuration(0));
        }
        if let Some(score) = self.score {
            check_score(score)?;
        }
        Ok(())
    }

    /// Return a copy of this draft with one field replaced.
    ///
    /// The value is parsed against the field's type and range; on failure
    /// the draft is left as it was. Both English and wire names are
    /// accepted: `title`/`titre`, `type`, `date`, `duration`/`duree`,
    /// `registered`/`nombreInscrits`, `score`, `keynote`/`keynoteId`.
    /// `score` and `keynote` cannot be cleared: an empty value or `none`
    /// is rejected with [`ValidationError::NotClearable`].
    pub fn with_field(&self, field: &str, value: &str) -> Result<Self, ValidationError> {
        let mut next = self.clone();
        match normalize_field(field).as_str() {
            "title" | "titre" => {
                next.title = non_blank(value)
                    .ok_or(ValidationError::EmptyField { field: "title" })?
                    .to_string();
            }
            "type" | "kind" => {
                next.kind = value.parse()?;
            }
            "date" => {
                next.date = value
                    .trim()
                    .parse()
                    .map_err(|e| ValidationError::invalid_value("date", value, e))?;
            }
            "duration" | "duree" | "durationminutes" => {
                let minutes: i64 = value
                    .trim()
                    .parse()
                    .map_err(|e| ValidationError::invalid_value("duration", value, e))?;
                if minutes <= 0 {
                    return Err(ValidationError::NonPositiveDuration(minutes));
                }
                next.duration_minutes = u32::try_from(minutes)
                    .map_err(|e| ValidationError::invalid_value("duration", value, e))?;
            }
            "registered" | "registeredcount" | "nombreinscrits" => {
                next.registered_count = value.trim().parse().map_err(|e| {
                    ValidationError::invalid_value("registered_count", value, e)
                })?;
            }
            "score" => {
                if is_clear_marker(value) {
                    return Err(ValidationError::NotClearable { field: "score" });
                }
                let score: f64 = value
                    .trim()
                    .parse()
                    .map_err(|e| ValidationError::invalid_value("score", value, e))?;
                check_score(score)?;
                next.score = Some(score);
            }
            "keynote" | "keynoteid" => {
                if is_clear_marker(value) {
                    return Err(ValidationError::NotClearable { field: "keynote_id" });
                }
                next.keynote_id = Some(
                    value
                        .parse()
                        .map_err(|e| ValidationError::invalid_value("keynote_id", value, e))?,
                );
            }
            _ => {
                return Err(ValidationError::UnknownField {
                    entity: "conference",
                    field: field.trim().to_string(),
                });
            }
        }
        Ok(next)
    }
}

fn normalize_field(field: &str) -> String {
    field
        .trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .collect::<String>()
        .to_ascii_lowercase()
}

fn check_score(score: f64) -> Result<(), ValidationError> {
    if score.is_finite() && (0.0..=MAX_SCORE).contains(&score) {
        Ok(())
    } else {
        Err(ValidationError::ScoreOutOfRange(score))
    }
}
