//! Application-level configuration.
//!
//! - [`ConsoleBehavior`] — how use cases resolve and summarise data

pub mod console_behavior;

pub use console_behavior::{ConsoleBehavior, KeynoteResolutionMode};
