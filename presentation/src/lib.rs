//! Presentation layer for conference-console
//!
//! This crate contains CLI definitions, output formatters
//! and progress reporters.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{
    Cli, Command, ConferenceArgs, ConferenceCommand, KeynoteArgs, KeynoteCommand, OutputFormat,
    ReviewCommand,
};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::FetchSpinner;
