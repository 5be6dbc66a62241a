//! Composite conference view
//!
//! Combines a conference with the outcome of looking up its keynote in the
//! keynote service. The keynote reference is a soft reference, so the
//! outcome has three states and each one is an explicit value:
//!
//! | `keynote_id` | lookup            | status          |
//! |--------------|-------------------|-----------------|
//! | unset        | (not attempted)   | `NoneAssigned`  |
//! | set          | found, id matches | `Resolved`      |
//! | set          | anything else     | `Unavailable`   |
//!
//! The view is derived and never persisted; build a fresh one per request.

use crate::conference::entities::Conference;
use crate::core::ids::KeynoteId;
use crate::keynote::entities::Keynote;
use serde::Serialize;

/// Resolution status of a conference's keynote reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeynoteStatus {
    Resolved,
    NoneAssigned,
    Unavailable,
}

impl std::fmt::Display for KeynoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            KeynoteStatus::Resolved => "RESOLVED",
            KeynoteStatus::NoneAssigned => "NONE_ASSIGNED",
            KeynoteStatus::Unavailable => "UNAVAILABLE",
        };
        write!(f, "{s}")
    }
}

/// Outcome of resolving a keynote reference.
///
/// Keynote data is only reachable through [`KeynoteResolution::Resolved`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeynoteResolution {
    Resolved(Keynote),
    NoneAssigned,
    Unavailable { keynote_id: KeynoteId, reason: String },
}

impl KeynoteResolution {
    pub fn status(&self) -> KeynoteStatus {
        match self {
            KeynoteResolution::Resolved(_) => KeynoteStatus::Resolved,
            KeynoteResolution::NoneAssigned => KeynoteStatus::NoneAssigned,
            KeynoteResolution::Unavailable { .. } => KeynoteStatus::Unavailable,
        }
    }
}

/// What happened when the keynote was looked up.
#[derive(Debug, Clone)]
pub enum KeynoteLookup {
    NotAttempted,
    Found(Keynote),
    Failed(String),
}

/// A conference together with its keynote resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeConferenceView {
    conference: Conference,
    keynote: KeynoteResolution,
}

impl CompositeConferenceView {
    /// Assemble a view from a conference and a keynote lookup outcome.
    ///
    /// The status is derived from the conference's `keynote_id`, so the
    /// three-way invariant holds by construction: a lookup result for a
    /// conference without a keynote reference is ignored, and a keynote
    /// whose id differs from the reference is not treated as resolved.
    pub fn assemble(conference: Conference, lookup: KeynoteLookup) -> Self {
        let keynote = match (conference.keynote_id, lookup) {
            (None, _) => KeynoteResolution::NoneAssigned,
            (Some(expected), KeynoteLookup::Found(keynote)) if keynote.id == expected => {
                KeynoteResolution::Resolved(keynote)
            }
            (Some(expected), KeynoteLookup::Found(keynote)) => KeynoteResolution::Unavailable {
                keynote_id: expected,
                reason: format!(
                    "keynote service returned keynote {} for reference {}",
                    keynote.id, expected
                ),
            },
            (Some(expected), KeynoteLookup::Failed(reason)) => KeynoteResolution::Unavailable {
                keynote_id: expected,
                reason,
            },
            (Some(expected), KeynoteLookup::NotAttempted) => KeynoteResolution::Unavailable {
                keynote_id: expected,
                reason: "keynote lookup was not attempted".to_string(),
            },
        };
        Self {
            conference,
            keynote,
        }
    }

    pub fn conference(&self) -> &Conference {
        &self.conference
    }

    pub fn keynote_resolution(&self) -> &KeynoteResolution {
        &self.keynote
    }

    pub fn keynote_status(&self) -> KeynoteStatus {
        self.keynote.status()
    }

    /// The keynote record, only when the status is `Resolved`.
    pub fn resolved_keynote(&self) -> Option<&Keynote> {
        match &self.keynote {
            KeynoteResolution::Resolved(keynote) => Some(keynote),
            _ => None,
        }
    }

    pub fn into_parts(self) -> (Conference, KeynoteResolution) {
        (self.conference, self.keynote)
    }
}
