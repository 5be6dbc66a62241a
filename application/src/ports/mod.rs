//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod conference_repository;
pub mod keynote_repository;
pub mod progress;
pub mod repository;
