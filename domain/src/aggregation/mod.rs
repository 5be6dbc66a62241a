//! Cross-service aggregation values.
//!
//! - [`composite::CompositeConferenceView`] — a conference with its keynote
//!   resolution
//! - [`statistics::DashboardStatistics`] — counts for the home display

pub mod composite;
pub mod statistics;
