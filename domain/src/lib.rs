//! Domain layer for conference-console
//!
//! This crate contains the entities, value objects and pure aggregation
//! logic. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Two owners, one view
//!
//! Conferences (with their reviews) and keynote speakers live in two
//! independently deployed services. A conference references its keynote
//! by id only, with no integrity guarantee:
//!
//! - **Conference**: authoritative anchor of every detail view
//! - **Keynote**: best-effort enrichment, resolved per request
//!
//! ## Composite view
//!
//! [`CompositeConferenceView`] makes the three possible keynote states
//! (resolved, none assigned, unavailable) a first-class value.

pub mod aggregation;
pub mod conference;
pub mod core;
pub mod keynote;
pub mod review;

// Re-export commonly used types
pub use aggregation::{
    composite::{CompositeConferenceView, KeynoteLookup, KeynoteResolution, KeynoteStatus},
    statistics::{CountOutcome, DEFAULT_RECENT_LIMIT, DashboardStatistics, total_embedded_reviews},
};
pub use conference::{
    entities::{Conference, ConferenceDraft},
    filter::ConferenceFilter,
    value_objects::ConferenceType,
};
pub use crate::core::{
    error::ValidationError,
    ids::{ConferenceId, KeynoteId, ReviewId},
};
pub use keynote::entities::{Keynote, KeynoteDraft};
pub use review::{
    entities::{Review, ReviewDraft},
    rating::Rating,
};
