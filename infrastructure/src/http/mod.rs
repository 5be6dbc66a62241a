//! Gateway HTTP adapters
//!
//! Implements the repository ports against the API gateway using reqwest.
//! Both services sit behind one gateway, each under its own path prefix.

mod client;
mod conference_client;
mod keynote_client;
mod wire;

pub use client::{GatewayClient, GatewayConfig};
pub use conference_client::HttpConferenceRepository;
pub use keynote_client::HttpKeynoteRepository;
