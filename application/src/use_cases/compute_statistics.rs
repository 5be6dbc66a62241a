//! Compute Statistics use case
//!
//! Fetches the conference and keynote collections concurrently and folds
//! them into [`DashboardStatistics`]. The two fetches are independent and
//! degrade independently: a failed keynote list leaves the conference and
//! review counts intact, and vice versa.

use crate::ports::conference_repository::ConferenceRepository;
use crate::ports::keynote_repository::KeynoteRepository;
use crate::ports::progress::{FetchProgress, NoProgress};
use crate::ports::repository::BackendService;
use console_domain::{DEFAULT_RECENT_LIMIT, DashboardStatistics};
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for the dashboard summary
pub struct ComputeStatisticsUseCase {
    conferences: Arc<dyn ConferenceRepository>,
    keynotes: Arc<dyn KeynoteRepository>,
    recent_limit: usize,
}

impl ComputeStatisticsUseCase {
    pub fn new(
        conferences: Arc<dyn ConferenceRepository>,
        keynotes: Arc<dyn KeynoteRepository>,
    ) -> Self {
        Self {
            conferences,
            keynotes,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }

    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self) -> DashboardStatistics {
        self.execute_with_progress(&NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// Never fails as a whole; each count carries its own availability.
    pub async fn execute_with_progress(&self, progress: &dyn FetchProgress) -> DashboardStatistics {
        progress.on_fetch_start(BackendService::Conference, "conferences");
        progress.on_fetch_start(BackendService::Keynote, "keynotes");

        let (conferences, keynotes) =
            tokio::join!(self.conferences.list_all(), self.keynotes.list_all());

        progress.on_fetch_complete(BackendService::Conference, "conferences", conferences.is_ok());
        progress.on_fetch_complete(BackendService::Keynote, "keynotes", keynotes.is_ok());

        let conferences = conferences.map_err(|e| {
            warn!("Conference list unavailable for statistics: {}", e);
            e.to_string()
        });
        let keynote_count = keynotes.map(|list| list.len()).map_err(|e| {
            warn!("Keynote list unavailable for statistics: {}", e);
            e.to_string()
        });

        let stats = DashboardStatistics::fold(conferences, keynote_count, self.recent_limit);
        info!(
            "Statistics: conferences={:?} keynotes={:?} reviews={:?}",
            stats.conferences.value(),
            stats.keynotes.value(),
            stats.reviews.value()
        );
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{
        InMemoryConferenceRepository, InMemoryKeynoteRepository, review_draft, sample_conference,
        sample_keynote,
    };
    use console_domain::{ConferenceId, CountOutcome};

    #[tokio::test]
    async fn test_empty_conference_collection() {
        let conferences = Arc::new(InMemoryConferenceRepository::new());
        let keynotes = Arc::new(InMemoryKeynoteRepository::new());
        keynotes.insert(sample_keynote(1));
        keynotes.insert(sample_keynote(2));

        let stats = ComputeStatisticsUseCase::new(conferences, keynotes)
            .execute()
            .await;

        assert_eq!(stats.conferences, CountOutcome::Available(0));
        assert_eq!(stats.reviews, CountOutcome::Available(0));
        assert_eq!(stats.keynotes, CountOutcome::Available(2));
    }

    #[tokio::test]
    async fn test_review_total_sums_embedded_collections() {
        let conferences = Arc::new(InMemoryConferenceRepository::new());
        conferences.insert(sample_conference(1, None));
        conferences.insert(sample_conference(2, Some(7)));
        conferences.set_embed_reviews(true);
        for (conference, comment) in [(1, "a"), (1, "b"), (2, "c")] {
            conferences
                .add_review(ConferenceId::new(conference), &review_draft(comment, 4))
                .await
                .unwrap();
        }
        let keynotes = Arc::new(InMemoryKeynoteRepository::new());

        let stats = ComputeStatisticsUseCase::new(conferences, keynotes)
            .execute()
            .await;

        assert_eq!(stats.conferences, CountOutcome::Available(2));
        assert_eq!(stats.reviews, CountOutcome::Available(3));
    }

    #[tokio::test]
    async fn test_keynote_outage_does_not_hide_conference_counts() {
        let conferences = Arc::new(InMemoryConferenceRepository::new());
        conferences.insert(sample_conference(1, None));
        let keynotes = Arc::new(InMemoryKeynoteRepository::new());
        keynotes.set_unreachable(true);

        let stats = ComputeStatisticsUseCase::new(conferences.clone(), keynotes.clone())
            .execute()
            .await;

        assert_eq!(stats.conferences, CountOutcome::Available(1));
        assert!(!stats.keynotes.is_available());
        assert_eq!(conferences.list_calls(), 1);
        assert_eq!(keynotes.list_calls(), 1);
    }

    #[tokio::test]
    async fn test_conference_outage_keeps_keynote_count() {
        let conferences = Arc::new(InMemoryConferenceRepository::new());
        conferences.set_unreachable(true);
        let keynotes = Arc::new(InMemoryKeynoteRepository::new());
        keynotes.insert(sample_keynote(1));

        let stats = ComputeStatisticsUseCase::new(conferences, keynotes)
            .execute()
            .await;

        assert!(!stats.conferences.is_available());
        assert!(!stats.reviews.is_available());
        assert_eq!(stats.keynotes, CountOutcome::Available(1));
        assert!(stats.recent.is_empty());
    }

    #[tokio::test]
    async fn test_recent_limit() {
        let conferences = Arc::new(InMemoryConferenceRepository::new());
        for id in 1..=5 {
            conferences.insert(sample_conference(id, None));
        }
        let keynotes = Arc::new(InMemoryKeynoteRepository::new());

        let stats = ComputeStatisticsUseCase::new(conferences, keynotes)
            .with_recent_limit(2)
            .execute()
            .await;

        let ids: Vec<i64> = stats.recent.iter().map(|c| c.id.get()).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
