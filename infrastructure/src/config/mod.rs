//! Configuration file loading for conference-console
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CONSOLE_*` environment variables (`CONSOLE_GATEWAY__BASE_URL=...`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./console.toml` or `./.console.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/conference-console/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileConsoleConfig, FileGatewayConfig, FileOutputConfig,
    FileOutputFormat,
};
pub use loader::ConfigLoader;
