//! Domain validation errors

use thiserror::Error;

/// Client-side validation failures.
///
/// These are raised before any network call is made, so an obviously
/// invalid draft never costs a round trip to a backend service.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    #[error("duration must be greater than 0 minutes (got {0})")]
    NonPositiveDuration(i64),

    #[error("score must be between 0 and 5 (got {0})")]
    ScoreOutOfRange(f64),

    #[error("rating must be an integer between 1 and 5 (got {0})")]
    RatingOutOfRange(i64),

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("unknown conference type: {0}")]
    UnknownConferenceType(String),

    #[error("unknown field '{field}' for {entity}")]
    UnknownField { entity: &'static str, field: String },

    /// The conference service keeps the stored value when a write sends
    /// null for this field.
    #[error("{field} cannot be cleared once set")]
    NotClearable { field: &'static str },

    #[error("invalid value '{value}' for field '{field}': {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl ValidationError {
    /// Name of the offending field, when the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::EmptyField { field } => Some(field),
            ValidationError::NonPositiveDuration(_) => Some("duration"),
            ValidationError::ScoreOutOfRange(_) => Some("score"),
            ValidationError::RatingOutOfRange(_) => Some("rating"),
            ValidationError::InvalidEmail(_) => Some("email"),
            ValidationError::UnknownConferenceType(_) => Some("type"),
            ValidationError::NotClearable { field } => Some(field),
            ValidationError::UnknownField { field, .. } => Some(field),
            ValidationError::InvalidValue { field, .. } => Some(field),
        }
    }

    pub(crate) fn invalid_value(
        field: &'static str,
        value: &str,
        reason: impl std::fmt::Display,
    ) -> Self {
        ValidationError::InvalidValue {
            field,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
