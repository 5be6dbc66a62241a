//! Conferences, owned by the conference service.
//!
//! - [`entities::Conference`] / [`entities::ConferenceDraft`]
//! - [`value_objects::ConferenceType`]
//! - [`filter::ConferenceFilter`] — type filter for list views

pub mod entities;
pub mod filter;
pub mod value_objects;
