//! CLI entrypoint for Conference Console
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use console_application::{
    ComputeStatisticsUseCase, ConferenceCatalogUseCase, ConferenceRepository, ConsoleBehavior,
    FetchProgress, KeynoteDirectoryUseCase, KeynoteRepository, NoProgress,
    ResolveConferenceUseCase, ReviewBoardUseCase, ViewSession,
};
use console_domain::{ConferenceFilter, ConferenceId, ReviewDraft};
use console_infrastructure::{
    ConfigLoader, FileConfig, FileOutputFormat, HttpConferenceRepository, HttpKeynoteRepository,
};
use console_presentation::{
    Cli, Command, ConferenceCommand, ConsoleFormatter, FetchSpinner, KeynoteCommand,
    OutputConfig, OutputFormat, ReviewCommand,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; RUST_LOG wins when set
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Conference Console");

    // === Configuration ===
    let mut config = ConfigLoader::load(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("Failed to load configuration")?;
    if let Some(gateway) = &cli.gateway {
        config.gateway.base_url = gateway.clone();
    }
    for issue in config.validate() {
        warn!("Configuration issue: {}", issue);
    }

    let output = output_config(&config).with_cli_overrides(&cli);
    if !output.color {
        colored::control::set_override(false);
    }

    if let Command::Config = cli.command {
        return show_config(&cli, &config);
    }

    // === Dependency Injection ===
    let gateway = config.gateway.to_gateway_config();
    let conferences: Arc<dyn ConferenceRepository> = Arc::new(
        HttpConferenceRepository::new(&gateway).context("Failed to build conference client")?,
    );
    let keynotes: Arc<dyn KeynoteRepository> = Arc::new(
        HttpKeynoteRepository::new(&gateway).context("Failed to build keynote client")?,
    );

    let app = App {
        conferences,
        keynotes,
        behavior: config.console.to_behavior(),
        output,
        spinner: FetchSpinner::new(),
    };

    match cli.command {
        Command::Stats => app.stats().await,
        Command::Conferences(command) => app.conferences(command).await,
        Command::Reviews(command) => app.reviews(command).await,
        Command::Keynotes(command) => app.keynotes(command).await,
        Command::Config => Ok(()),
    }
}

fn output_config(config: &FileConfig) -> OutputConfig {
    OutputConfig {
        format: match config.output.format {
            FileOutputFormat::Text => OutputFormat::Text,
            FileOutputFormat::Json => OutputFormat::Json,
        },
        color: config.output.color,
        ..OutputConfig::default()
    }
}

fn show_config(cli: &Cli, config: &FileConfig) -> Result<()> {
    for source in ConfigLoader::describe_sources(cli.config.as_deref()) {
        eprintln!("{}", source);
    }
    let effective = toml::to_string_pretty(config).context("Failed to render configuration")?;
    println!("{}", effective);
    Ok(())
}

/// Wired repositories plus output settings for one invocation
struct App {
    conferences: Arc<dyn ConferenceRepository>,
    keynotes: Arc<dyn KeynoteRepository>,
    behavior: ConsoleBehavior,
    output: OutputConfig,
    spinner: FetchSpinner,
}

impl App {
    fn progress(&self) -> &dyn FetchProgress {
        if self.output.show_progress {
            &self.spinner
        } else {
            &NoProgress
        }
    }

    fn json(&self) -> bool {
        self.output.format == OutputFormat::Json
    }

    fn emit(&self, json: impl FnOnce() -> String, text: impl FnOnce() -> String) {
        if self.json() {
            println!("{}", json());
        } else {
            print!("{}", text());
        }
    }

    async fn stats(&self) -> Result<()> {
        let stats = ComputeStatisticsUseCase::new(self.conferences.clone(), self.keynotes.clone())
            .with_recent_limit(self.behavior.recent_limit)
            .execute_with_progress(self.progress())
            .await;
        self.spinner.clear();

        self.emit(
            || ConsoleFormatter::format_json(&stats),
            || ConsoleFormatter::format_statistics(&stats),
        );
        Ok(())
    }

    async fn conferences(&self, command: ConferenceCommand) -> Result<()> {
        let catalog = ConferenceCatalogUseCase::new(self.conferences.clone());

        match command {
            ConferenceCommand::List { kind, keynote } => {
                let list = match keynote {
                    Some(keynote) => catalog.by_keynote(keynote).await?,
                    None => catalog.list(ConferenceFilter::from(kind)).await?,
                };
                self.emit(
                    || ConsoleFormatter::format_json(&list),
                    || ConsoleFormatter::format_conference_list(&list),
                );
            }
            ConferenceCommand::Show { id } => self.show_conference(id).await?,
            ConferenceCommand::Create(args) => {
                let conference = catalog
                    .save(None, &args.to_draft())
                    .await
                    .context("Failed to create conference")?;
                self.emit(
                    || ConsoleFormatter::format_json(&conference),
                    || ConsoleFormatter::format_conference(&conference),
                );
            }
            ConferenceCommand::Set { id, field, value } => {
                let conference = catalog
                    .apply_field(id, &field, &value)
                    .await
                    .with_context(|| format!("Failed to update conference {id}"))?;
                self.emit(
                    || ConsoleFormatter::format_json(&conference),
                    || ConsoleFormatter::format_conference(&conference),
                );
            }
            ConferenceCommand::Delete { id } => {
                catalog.delete(id).await?;
                eprintln!("Deleted conference #{id}");
            }
        }
        Ok(())
    }

    /// Detail view: the only navigation that joins both services, so it
    /// runs under a view session that Ctrl-C can cancel.
    async fn show_conference(&self, id: ConferenceId) -> Result<()> {
        let resolver =
            ResolveConferenceUseCase::new(self.conferences.clone(), self.keynotes.clone())
                .with_mode(self.behavior.keynote_resolution);

        let session = Arc::new(ViewSession::new());
        let interrupt = {
            let session = session.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    session.shutdown();
                }
            })
        };

        let ticket = session.navigate();
        let outcome = ticket
            .run(resolver.execute_with_progress(id, self.progress()))
            .await;
        interrupt.abort();
        self.spinner.clear();

        let Some(result) = outcome else {
            eprintln!("Cancelled");
            return Ok(());
        };
        let view = result.with_context(|| format!("Failed to load conference {id}"))?;

        self.emit(
            || ConsoleFormatter::format_json(&view),
            || ConsoleFormatter::format_conference_view(&view),
        );
        Ok(())
    }

    async fn reviews(&self, command: ReviewCommand) -> Result<()> {
        let board = ReviewBoardUseCase::new(self.conferences.clone());

        let reviews = match command {
            ReviewCommand::List { conference } => board.list(conference).await?,
            ReviewCommand::Add {
                conference,
                rating,
                comment,
                date,
            } => {
                let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
                let draft = ReviewDraft::new(date, &comment, rating)?;
                board
                    .add(conference, &draft)
                    .await
                    .with_context(|| format!("Failed to add review to conference {conference}"))?
            }
            ReviewCommand::Delete { conference, review } => {
                board.delete(conference, review).await?
            }
        };

        self.emit(
            || ConsoleFormatter::format_json(&reviews),
            || ConsoleFormatter::format_reviews(&reviews),
        );
        Ok(())
    }

    async fn keynotes(&self, command: KeynoteCommand) -> Result<()> {
        let directory = KeynoteDirectoryUseCase::new(self.keynotes.clone());

        match command {
            KeynoteCommand::List => {
                let list = directory.list().await?;
                self.emit(
                    || ConsoleFormatter::format_json(&list),
                    || ConsoleFormatter::format_keynote_list(&list),
                );
            }
            KeynoteCommand::Show { id } => {
                let keynote = directory.get(id).await?;
                self.emit(
                    || ConsoleFormatter::format_json(&keynote),
                    || ConsoleFormatter::format_keynote(&keynote),
                );
            }
            KeynoteCommand::Create(args) => {
                let keynote = directory
                    .save(None, &args.to_draft())
                    .await
                    .context("Failed to create keynote")?;
                self.emit(
                    || ConsoleFormatter::format_json(&keynote),
                    || ConsoleFormatter::format_keynote(&keynote),
                );
            }
            KeynoteCommand::Set { id, field, value } => {
                let keynote = directory
                    .apply_field(id, &field, &value)
                    .await
                    .with_context(|| format!("Failed to update keynote {id}"))?;
                self.emit(
                    || ConsoleFormatter::format_json(&keynote),
                    || ConsoleFormatter::format_keynote(&keynote),
                );
            }
            KeynoteCommand::Delete { id } => {
                directory.delete(id).await?;
                eprintln!("Deleted keynote #{id}");
            }
        }
        Ok(())
    }
}
