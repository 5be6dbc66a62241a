//! Console output formatter for conference data

use colored::Colorize;
use console_domain::core::string::preview;
use console_domain::{
    CompositeConferenceView, Conference, CountOutcome, DashboardStatistics, Keynote,
    KeynoteResolution, Review,
};
use serde::Serialize;

/// Longest title shown in list rows
const TITLE_WIDTH: usize = 40;

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the dashboard summary
    pub fn format_statistics(stats: &DashboardStatistics) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Conference Dashboard"));
        output.push('\n');
        output.push_str(&Self::count_line("Conferences:", &stats.conferences));
        output.push_str(&Self::count_line("Keynotes:", &stats.keynotes));
        output.push_str(&Self::count_line("Reviews:", &stats.reviews));

        if !stats.recent.is_empty() {
            output.push_str(&Self::section_header("Recent conferences"));
            for conference in &stats.recent {
                output.push_str(&Self::conference_row(conference));
                output.push('\n');
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format a conference list, one row per conference
    pub fn format_conference_list(conferences: &[Conference]) -> String {
        if conferences.is_empty() {
            return format!("{}\n", "No conferences.".dimmed());
        }
        let mut output = String::new();
        for conference in conferences {
            output.push_str(&Self::conference_row(conference));
            output.push('\n');
        }
        output.push_str(&format!(
            "{}\n",
            format!("{} conference(s)", conferences.len()).dimmed()
        ));
        output
    }

    /// Format one conference together with its keynote resolution
    pub fn format_conference_view(view: &CompositeConferenceView) -> String {
        let mut output = Self::format_conference(view.conference());

        output.push_str(&Self::section_header("Keynote"));
        match view.keynote_resolution() {
            KeynoteResolution::Resolved(keynote) => {
                output.push_str(&Self::keynote_details(keynote));
            }
            KeynoteResolution::NoneAssigned => {
                output.push_str(&format!("{}\n", "No keynote assigned".dimmed()));
            }
            KeynoteResolution::Unavailable { keynote_id, reason } => {
                output.push_str(&format!(
                    "{} {}\n",
                    "Keynote assigned but unavailable".yellow().bold(),
                    format!("(#{keynote_id})").dimmed()
                ));
                output.push_str(&format!("  {} {}\n", "Reason:".dimmed(), reason));
            }
        }

        output
    }

    /// Format a single conference without keynote resolution
    pub fn format_conference(conference: &Conference) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} {}\n",
            format!("#{}", conference.id).yellow().bold(),
            conference.title.bold()
        ));
        output.push_str(&Self::field("Type:", conference.kind.to_string()));
        output.push_str(&Self::field("Date:", conference.date.to_string()));
        output.push_str(&Self::field(
            "Duration:",
            format!("{} min", conference.duration_minutes),
        ));
        output.push_str(&Self::field(
            "Registered:",
            conference.registered_count.to_string(),
        ));
        output.push_str(&Self::field("Score:", Self::score(conference.score)));
        if let Some(count) = conference.embedded_review_count() {
            output.push_str(&Self::field("Reviews:", count.to_string()));
        }

        output
    }

    /// Format a review list
    pub fn format_reviews(reviews: &[Review]) -> String {
        if reviews.is_empty() {
            return format!("{}\n", "No reviews yet.".dimmed());
        }
        let mut output = String::new();
        for review in reviews {
            output.push_str(&format!(
                "{} {} {}\n",
                format!("#{}", review.id).yellow(),
                review.rating.stars(),
                review.date.to_string().dimmed()
            ));
            output.push_str(&Self::indent(&review.comment, "    "));
            output.push('\n');
        }
        output
    }

    /// Format a keynote list
    pub fn format_keynote_list(keynotes: &[Keynote]) -> String {
        if keynotes.is_empty() {
            return format!("{}\n", "No keynotes.".dimmed());
        }
        let mut output = String::new();
        for keynote in keynotes {
            output.push_str(&format!(
                "{:>6}  {:<30} {}\n",
                format!("#{}", keynote.id).yellow(),
                keynote.display_name(),
                keynote.email.dimmed()
            ));
        }
        output
    }

    /// Format one keynote
    pub fn format_keynote(keynote: &Keynote) -> String {
        format!(
            "{}\n{}",
            format!("#{}", keynote.id).yellow().bold(),
            Self::keynote_details(keynote)
        )
    }

    /// Format any result as pretty JSON
    pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn keynote_details(keynote: &Keynote) -> String {
        let mut output = Self::field("Name:", keynote.display_name());
        output.push_str(&Self::field("Email:", keynote.email.clone()));
        if let Some(role) = &keynote.role {
            output.push_str(&Self::field("Role:", role.clone()));
        }
        output
    }

    fn conference_row(conference: &Conference) -> String {
        format!(
            "{:>6}  {:<width$} {:<10} {}  {}",
            format!("#{}", conference.id).yellow(),
            preview(&conference.title, TITLE_WIDTH),
            conference.kind.to_string(),
            conference.date,
            Self::score(conference.score).dimmed(),
            width = TITLE_WIDTH
        )
    }

    fn count_line(label: &str, outcome: &CountOutcome) -> String {
        let value = match outcome {
            CountOutcome::Available(n) => n.to_string().green().bold().to_string(),
            CountOutcome::Unavailable(_) => "unavailable".red().to_string(),
        };
        format!("{:<13} {}\n", label.cyan().bold(), value)
    }

    fn field(label: &str, value: String) -> String {
        format!("  {:<12} {}\n", label.cyan(), value)
    }

    fn score(score: Option<f64>) -> String {
        score.map_or_else(|| "-".to_string(), |s| format!("{s:.1}/5"))
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
