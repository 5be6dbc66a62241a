//! Infrastructure layer for conference-console
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileConsoleConfig, FileGatewayConfig,
    FileOutputConfig, FileOutputFormat,
};
pub use http::{GatewayClient, GatewayConfig, HttpConferenceRepository, HttpKeynoteRepository};
