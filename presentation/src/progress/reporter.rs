//! Progress reporting while waiting on the backend services

use colored::Colorize;
use console_application::{BackendService, FetchProgress};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// One spinner per in-flight fetch, drawn on stderr
pub struct FetchSpinner {
    multi: MultiProgress,
    bars: Mutex<HashMap<String, ProgressBar>>,
}

impl FetchSpinner {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            bars: Mutex::new(HashMap::new()),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn key(service: BackendService, what: &str) -> String {
        format!("{service}:{what}")
    }

    /// Remove any spinner still running (e.g. after cancellation)
    pub fn clear(&self) {
        let mut bars = self.bars.lock().unwrap_or_else(PoisonError::into_inner);
        for (_, bar) in bars.drain() {
            bar.finish_and_clear();
        }
    }
}

impl Default for FetchSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchProgress for FetchSpinner {
    fn on_fetch_start(&self, service: BackendService, what: &str) {
        let bar = self.multi.add(ProgressBar::new_spinner());
        bar.set_style(Self::spinner_style());
        bar.set_prefix(format!("[{service}]"));
        bar.set_message(format!("Loading {what}..."));
        bar.enable_steady_tick(Duration::from_millis(100));

        self.bars
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(Self::key(service, what), bar);
    }

    fn on_fetch_complete(&self, service: BackendService, what: &str, success: bool) {
        let bar = self
            .bars
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&Self::key(service, what));
        if let Some(bar) = bar {
            let status = if success {
                format!("{} {}", "v".green(), what)
            } else {
                format!("{} {} (unavailable)", "x".red(), what)
            };
            bar.finish_with_message(status);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_fetch_removes_spinner() {
        let spinner = FetchSpinner::new();
        spinner.on_fetch_start(BackendService::Keynote, "keynote 7");
        spinner.on_fetch_start(BackendService::Conference, "conference 1");
        spinner.on_fetch_complete(BackendService::Keynote, "keynote 7", false);

        let bars = spinner.bars.lock().unwrap();
        assert_eq!(bars.len(), 1);
        assert!(bars.contains_key("conference:conference 1"));
    }

    #[test]
    fn test_clear_drops_pending_spinners() {
        let spinner = FetchSpinner::new();
        spinner.on_fetch_start(BackendService::Conference, "conferences");
        spinner.clear();
        assert!(spinner.bars.lock().unwrap().is_empty());
    }
}
