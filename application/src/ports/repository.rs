//! Repository failure taxonomy
//!
//! Every repository port reports failures through [`RepositoryError`], so
//! callers always receive a classified result instead of a raw transport
//! error.

use console_domain::ValidationError;
use serde::Serialize;
use thiserror::Error;

/// Backend service a request was addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendService {
    Conference,
    Keynote,
}

impl std::fmt::Display for BackendService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendService::Conference => write!(f, "conference"),
            BackendService::Keynote => write!(f, "keynote"),
        }
    }
}

/// Kind of entity a lookup was about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Conference,
    Keynote,
    Review,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Conference => write!(f, "Conference"),
            EntityKind::Keynote => write!(f, "Keynote"),
            EntityKind::Review => write!(f, "Review"),
        }
    }
}

/// Coarse failure classification, for consumers that only branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    ServiceUnreachable,
    NotFound,
    ValidationError,
    RequestRejected,
}

/// Errors returned by repository ports
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepositoryError {
    /// Network or transport failure, timeouts and gateway-side outages.
    #[error("{service} service unreachable: {reason}")]
    ServiceUnreachable {
        service: BackendService,
        reason: String,
    },

    #[error("{entity} {id} not found")]
    NotFound { entity: EntityKind, id: i64 },

    /// Client-side check failed; no request was sent.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The backend refused the request (validation, conflict, bad payload).
    #[error("{service} service rejected the request ({status}): {message}")]
    RequestRejected {
        service: BackendService,
        status: u16,
        message: String,
    },
}

impl RepositoryError {
    pub fn unreachable(service: BackendService, reason: impl Into<String>) -> Self {
        RepositoryError::ServiceUnreachable {
            service,
            reason: reason.into(),
        }
    }

    pub fn not_found(entity: EntityKind, id: impl Into<i64>) -> Self {
        RepositoryError::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            RepositoryError::ServiceUnreachable { .. } => FailureKind::ServiceUnreachable,
            RepositoryError::NotFound { .. } => FailureKind::NotFound,
            RepositoryError::Validation(_) => FailureKind::ValidationError,
            RepositoryError::RequestRejected { .. } => FailureKind::RequestRejected,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}
