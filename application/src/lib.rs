//! Application layer for conference-console
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ConsoleBehavior, KeynoteResolutionMode};
pub use ports::{
    conference_repository::{ConferenceRepository, ConferenceSnapshot},
    keynote_repository::KeynoteRepository,
    progress::{FetchProgress, NoProgress},
    repository::{BackendService, EntityKind, FailureKind, RepositoryError},
};
pub use use_cases::compute_statistics::ComputeStatisticsUseCase;
pub use use_cases::conference_catalog::ConferenceCatalogUseCase;
pub use use_cases::keynote_directory::KeynoteDirectoryUseCase;
pub use use_cases::resolve_conference::ResolveConferenceUseCase;
pub use use_cases::review_board::ReviewBoardUseCase;
pub use use_cases::view_session::{ViewSession, ViewTicket};
