//! Use cases
//!
//! Application-level operations that orchestrate the repository ports.

pub mod compute_statistics;
pub mod conference_catalog;
pub mod keynote_directory;
pub mod resolve_conference;
pub mod review_board;
pub mod view_session;

#[cfg(test)]
pub(crate) mod test_support;
