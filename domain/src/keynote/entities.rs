//! Keynote speaker entities
//!
//! Keynotes are owned exclusively by the keynote service. Conferences only
//! ever hold a [`KeynoteId`], never a copy of the record.

use crate::core::error::ValidationError;
use crate::core::ids::KeynoteId;
use crate::core::string::{is_clear_marker, non_blank};
use serde::{Deserialize, Serialize};

/// A keynote speaker as stored by the keynote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keynote {
    pub id: KeynoteId,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    /// Role or job title, e.g. "CTO".
    pub role: Option<String>,
}

impl Keynote {
    /// "First Last", the way the speaker is introduced.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether every required field carries data.
    ///
    /// A degraded conference service embeds a placeholder keynote with
    /// blank fields instead of the real record; such a record is not a
    /// resolved keynote.
    pub fn is_complete(&self) -> bool {
        non_blank(&self.last_name).is_some()
            && non_blank(&self.first_name).is_some()
            && non_blank(&self.email).is_some()
    }

    /// The editable part of this keynote.
    pub fn draft(&self) -> KeynoteDraft {
        KeynoteDraft {
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }
}

/// Keynote data as submitted by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeynoteDraft {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub role: Option<String>,
}

impl KeynoteDraft {
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            email: email.into(),
            role: None,
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Check the required fields: both names and a plausible email.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if non_blank(&self.last_name).is_none() {
            return Err(ValidationError::EmptyField { field: "last_name" });
        }
        if non_blank(&self.first_name).is_none() {
            return Err(ValidationError::EmptyField { field: "first_name" });
        }
        validate_email(&self.email)
    }

    /// Return a copy of this draft with one field replaced.
    ///
    /// Accepted field names: `last_name` (`nom`), `first_name` (`prenom`),
    /// `email`, `role` (`fonction`). Clearing is only allowed for `role`.
    pub fn with_field(&self, field: &str, value: &str) -> Result<Self, ValidationError> {
        let mut next = self.clone();
        match field.trim().to_ascii_lowercase().as_str() {
            "last_name" | "lastname" | "nom" => {
                next.last_name = required(value, "last_name")?;
            }
            "first_name" | "firstname" | "prenom" => {
                next.first_name = required(value, "first_name")?;
            }
            "email" => {
                let email = required(value, "email")?;
                validate_email(&email)?;
                next.email = email;
            }
            "role" | "fonction" => {
                next.role = if is_clear_marker(value) {
                    None
                } else {
                    Some(value.trim().to_string())
                };
            }
            other => {
                return Err(ValidationError::UnknownField {
                    entity: "keynote",
                    field: other.to_string(),
                });
            }
        }
        Ok(next)
    }
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    non_blank(value)
        .map(str::to_string)
        .ok_or(ValidationError::EmptyField { field })
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    let Some(email) = non_blank(email) else {
        return Err(ValidationError::EmptyField { field: "email" });
    };
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ValidationError::InvalidEmail(email.to_string())),
    }
}
