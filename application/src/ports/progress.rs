//! Progress notification port
//!
//! Lets the presentation layer show what a use case is waiting on.

use super::repository::BackendService;

/// Callback for fetch progress
///
/// Implementations live in the presentation layer (spinners, status
/// lines). Callbacks may arrive from concurrently running fetches.
pub trait FetchProgress: Send + Sync {
    /// Called before a request to `service` is issued.
    fn on_fetch_start(&self, service: BackendService, what: &str);

    /// Called when that request finished, successfully or not.
    fn on_fetch_complete(&self, service: BackendService, what: &str, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl FetchProgress for NoProgress {
    fn on_fetch_start(&self, _service: BackendService, _what: &str) {}
    fn on_fetch_complete(&self, _service: BackendService, _what: &str, _success: bool) {}
}
