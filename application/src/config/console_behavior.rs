//! Console behavior — use case tuning.

use console_domain::DEFAULT_RECENT_LIMIT;
use serde::{Deserialize, Serialize};

/// Where the resolver takes a conference's keynote from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeynoteResolutionMode {
    /// Fetch the plain conference, then look the keynote up in the
    /// keynote service.
    #[default]
    Direct,
    /// Fetch the conference from the "full" endpoint and use its embedded
    /// keynote when it is present and complete; otherwise fall back to the
    /// keynote service.
    PreferEmbedded,
}

impl std::str::FromStr for KeynoteResolutionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "direct" => Ok(KeynoteResolutionMode::Direct),
            "prefer_embedded" | "embedded" => Ok(KeynoteResolutionMode::PreferEmbedded),
            other => Err(format!("unknown keynote resolution mode: {other}")),
        }
    }
}

/// Behavior knobs shared by the use cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleBehavior {
    pub keynote_resolution: KeynoteResolutionMode,
    /// How many conferences the dashboard lists as recent.
    pub recent_limit: usize,
}

impl Default for ConsoleBehavior {
    fn default() -> Self {
        Self {
            keynote_resolution: KeynoteResolutionMode::default(),
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl ConsoleBehavior {
    pub fn with_keynote_resolution(mut self, mode: KeynoteResolutionMode) -> Self {
        self.keynote_resolution = mode;
        self
    }

    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let behavior = ConsoleBehavior::default();
        assert_eq!(behavior.keynote_resolution, KeynoteResolutionMode::Direct);
        assert_eq!(behavior.recent_limit, 3);
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(
            "prefer-embedded".parse::<KeynoteResolutionMode>().unwrap(),
            KeynoteResolutionMode::PreferEmbedded
        );
        assert!("sometimes".parse::<KeynoteResolutionMode>().is_err());
    }
}
