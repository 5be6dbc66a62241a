//! CLI command definitions

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use console_domain::{
    ConferenceDraft, ConferenceId, ConferenceType, KeynoteDraft, KeynoteId, ReviewId,
};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON on stdout (logs stay on stderr)
    Json,
}

/// CLI arguments for conference-console
#[derive(Parser, Debug)]
#[command(name = "conference-console")]
#[command(author, version, about = "Browse and manage conferences, keynotes and reviews")]
#[command(long_about = r#"
Conference Console talks to the conference and keynote services through
their API gateway and joins the two into one view.

A conference's keynote is resolved on every request. If the keynote
service is down or the keynote no longer exists, the conference is still
shown and the keynote is reported as unavailable.

Configuration files are loaded from (in priority order):
1. CONSOLE_* environment variables (e.g. CONSOLE_GATEWAY__BASE_URL)
2. --config <path>     Explicit config file
3. ./console.toml      Project-level config
4. ~/.config/conference-console/config.toml   Global config

Example:
  conference-console stats
  conference-console conferences show 3
  conference-console reviews add 3 --rating 5 --comment "Great talk"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Gateway base URL (overrides configuration)
    #[arg(long, global = true, value_name = "URL")]
    pub gateway: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Dashboard counts and recent conferences
    Stats,

    /// Conference catalog
    #[command(subcommand)]
    Conferences(ConferenceCommand),

    /// Reviews of a conference
    #[command(subcommand)]
    Reviews(ReviewCommand),

    /// Keynote directory
    #[command(subcommand)]
    Keynotes(KeynoteCommand),

    /// Show configuration sources and the effective configuration
    Config,
}

#[derive(Subcommand, Debug)]
pub enum ConferenceCommand {
    /// List conferences
    List {
        /// Only conferences of this type (academic, commercial)
        #[arg(long = "type", value_name = "TYPE")]
        kind: Option<ConferenceType>,

        /// Only conferences given by this keynote
        #[arg(long, value_name = "ID", conflicts_with = "kind")]
        keynote: Option<KeynoteId>,
    },

    /// Show one conference with its keynote
    Show { id: ConferenceId },

    /// Create a conference
    Create(ConferenceArgs),

    /// Change one field of a conference
    Set {
        id: ConferenceId,
        /// title, type, date, duration, registered, score, keynote
        field: String,
        /// New value (score and keynote cannot be cleared)
        value: String,
    },

    /// Delete a conference
    Delete { id: ConferenceId },
}

#[derive(Args, Debug)]
pub struct ConferenceArgs {
    #[arg(long)]
    pub title: String,

    /// academic or commercial
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: ConferenceType,

    /// YYYY-MM-DD
    #[arg(long)]
    pub date: NaiveDate,

    /// Duration in minutes
    #[arg(long)]
    pub duration: u32,

    #[arg(long, default_value_t = 0)]
    pub registered: u32,

    #[arg(long)]
    pub score: Option<f64>,

    #[arg(long, value_name = "ID")]
    pub keynote: Option<KeynoteId>,
}

impl ConferenceArgs {
    pub fn to_draft(&self) -> ConferenceDraft {
        let mut draft = ConferenceDraft::new(&self.title, self.kind, self.date, self.duration)
            .with_registered_count(self.registered);
        if let Some(score) = self.score {
            draft = draft.with_score(score);
        }
        if let Some(keynote) = self.keynote {
            draft = draft.with_keynote(keynote);
        }
        draft
    }
}

#[derive(Subcommand, Debug)]
pub enum ReviewCommand {
    /// List the reviews of a conference
    List { conference: ConferenceId },

    /// Add a review
    Add {
        conference: ConferenceId,

        /// 1 to 5
        #[arg(long)]
        rating: i64,

        #[arg(long)]
        comment: String,

        /// Review date, defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Delete a review
    Delete {
        conference: ConferenceId,
        review: ReviewId,
    },
}

#[derive(Subcommand, Debug)]
pub enum KeynoteCommand {
    /// List keynotes
    List,

    /// Show one keynote
    Show { id: KeynoteId },

    /// Create a keynote
    Create(KeynoteArgs),

    /// Change one field of a keynote
    Set {
        id: KeynoteId,
        /// last_name, first_name, email, role
        field: String,
        value: String,
    },

    /// Delete a keynote
    Delete { id: KeynoteId },
}

#[derive(Args, Debug)]
pub struct KeynoteArgs {
    #[arg(long)]
    pub last_name: String,

    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub role: Option<String>,
}

impl KeynoteArgs {
    pub fn to_draft(&self) -> KeynoteDraft {
        let draft = KeynoteDraft::new(&self.last_name, &self.first_name, &self.email);
        match &self.role {
            Some(role) => draft.with_role(role),
            None => draft,
        }
    }
}
