//! Presentation-level configuration
//!
//! Resolved output settings: configuration file values with CLI flags
//! applied on top.

use crate::cli::commands::{Cli, OutputFormat};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show spinners while waiting on the services
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// Apply `--output`, `--no-color` and `--quiet`.
    ///
    /// JSON output never shows spinners so stdout stays machine-readable.
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if let Some(format) = cli.output {
            self.format = format;
        }
        if cli.no_color {
            self.color = false;
        }
        if cli.quiet || self.format == OutputFormat::Json {
            self.show_progress = false;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_json_flag_disables_progress() {
        let cli = Cli::try_parse_from(["conference-console", "stats", "-o", "json"]).unwrap();
        let config = OutputConfig::default().with_cli_overrides(&cli);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.show_progress);
        assert!(config.color);
    }

    #[test]
    fn test_file_format_kept_without_flag() {
        let cli = Cli::try_parse_from(["conference-console", "--no-color", "stats"]).unwrap();
        let config = OutputConfig {
            format: OutputFormat::Json,
            ..OutputConfig::default()
        }
        .with_cli_overrides(&cli);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.color);
    }
}
