//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ValidationError`] — client-side validation failures
//! - [`ids`] — typed identifiers for conferences, keynotes and reviews
//! - [`string`] — small helpers for user-supplied text

pub mod error;
pub mod ids;
pub mod string;
