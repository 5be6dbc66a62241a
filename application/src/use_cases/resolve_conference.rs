//! Resolve Conference use case
//!
//! Builds a [`CompositeConferenceView`] for one conference.
//!
//! The conference lookup is authoritative: if it fails, the whole
//! operation fails with the classified error. The keynote lookup is
//! best-effort: any failure (not found, timeout, unreachable) degrades the
//! view to `Unavailable` and is never surfaced as an operation failure.
//! The two services share no referential-integrity contract, so a
//! conference may reference a keynote that never existed or was deleted.

use crate::config::KeynoteResolutionMode;
use crate::ports::conference_repository::ConferenceRepository;
use crate::ports::keynote_repository::KeynoteRepository;
use crate::ports::progress::{FetchProgress, NoProgress};
use crate::ports::repository::{BackendService, RepositoryError};
use console_domain::{CompositeConferenceView, Conference, ConferenceId, Keynote, KeynoteLookup};
use std::sync::Arc;
use tracing::{debug, warn};

/// Use case for resolving a conference with its keynote
pub struct ResolveConferenceUseCase {
    conferences: Arc<dyn ConferenceRepository>,
    keynotes: Arc<dyn KeynoteRepository>,
    mode: KeynoteResolutionMode,
}

impl ResolveConferenceUseCase {
    pub fn new(
        conferences: Arc<dyn ConferenceRepository>,
        keynotes: Arc<dyn KeynoteRepository>,
    ) -> Self {
        Self {
            conferences,
            keynotes,
            mode: KeynoteResolutionMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: KeynoteResolutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        id: ConferenceId,
    ) -> Result<CompositeConferenceView, RepositoryError> {
        self.execute_with_progress(id, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        id: ConferenceId,
        progress: &dyn FetchProgress,
    ) -> Result<CompositeConferenceView, RepositoryError> {
        // Step 1: the anchor entity. Failure here is fatal.
        let (conference, embedded) = self.fetch_conference(id, progress).await?;

        // Step 2: no reference, nothing to resolve.
        let Some(keynote_id) = conference.keynote_id else {
            debug!("Conference {} has no keynote assigned", id);
            return Ok(CompositeConferenceView::assemble(
                conference,
                KeynoteLookup::NotAttempted,
            ));
        };

        // Step 3: best-effort keynote lookup.
        if let Some(keynote) = embedded {
            if keynote.id == keynote_id && keynote.is_complete() {
                debug!("Conference {} resolved keynote {} from embedded data", id, keynote_id);
                return Ok(CompositeConferenceView::assemble(
                    conference,
                    KeynoteLookup::Found(keynote),
                ));
            }
            debug!(
                "Conference {}: embedded keynote unusable, asking keynote service",
                id
            );
        }

        let what = format!("keynote {keynote_id}");
        progress.on_fetch_start(BackendService::Keynote, &what);
        let lookup = match self.keynotes.get_by_id(keynote_id).await {
            Ok(keynote) => {
                progress.on_fetch_complete(BackendService::Keynote, &what, true);
                KeynoteLookup::Found(keynote)
            }
            Err(e) => {
                progress.on_fetch_complete(BackendService::Keynote, &what, false);
                warn!(
                    "Keynote {} for conference {} unavailable: {}",
                    keynote_id, id, e
                );
                KeynoteLookup::Failed(e.to_string())
            }
        };

        Ok(CompositeConferenceView::assemble(conference, lookup))
    }

    async fn fetch_conference(
        &self,
        id: ConferenceId,
        progress: &dyn FetchProgress,
    ) -> Result<(Conference, Option<Keynote>), RepositoryError> {
        let what = format!("conference {id}");
        progress.on_fetch_start(BackendService::Conference, &what);

        let result = match self.mode {
            KeynoteResolutionMode::Direct => {
                self.conferences.get_by_id(id).await.map(|c| (c, None))
            }
            KeynoteResolutionMode::PreferEmbedded => self
                .conferences
                .get_by_id_with_keynote_hint(id)
                .await
                .map(|snapshot| (snapshot.conference, snapshot.embedded_keynote)),
        };

        progress.on_fetch_complete(BackendService::Conference, &what, result.is_ok());
        result
    }
}
