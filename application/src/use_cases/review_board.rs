//! Review board use case
//!
//! Reviews live inside the conference service. Every mutation is followed
//! by a fresh fetch of the conference's review list, so callers always
//! render what the service holds rather than a locally patched copy.

use crate::ports::conference_repository::ConferenceRepository;
use crate::ports::repository::RepositoryError;
use console_domain::{ConferenceId, Review, ReviewDraft, ReviewId};
use std::sync::Arc;
use tracing::{debug, info};

/// Use case for a conference's review list
pub struct ReviewBoardUseCase {
    conferences: Arc<dyn ConferenceRepository>,
}

impl ReviewBoardUseCase {
    pub fn new(conferences: Arc<dyn ConferenceRepository>) -> Self {
        Self { conferences }
    }

    pub async fn list(&self, conference_id: ConferenceId) -> Result<Vec<Review>, RepositoryError> {
        self.conferences.list_reviews(conference_id).await
    }

    /// Add a review and return the refreshed list.
    pub async fn add(
        &self,
        conference_id: ConferenceId,
        draft: &ReviewDraft,
    ) -> Result<Vec<Review>, RepositoryError> {
        let review = self.conferences.add_review(conference_id, draft).await?;
        info!("Review {} added to conference {}", review.id, conference_id);
        self.list(conference_id).await
    }

    /// Delete a review and return the refreshed list.
    ///
    /// A review that is already gone is not an error.
    pub async fn delete(
        &self,
        conference_id: ConferenceId,
        review_id: ReviewId,
    ) -> Result<Vec<Review>, RepositoryError> {
        match self.conferences.delete_review(review_id).await {
            Ok(()) => info!("Review {} deleted", review_id),
            Err(e) if e.is_not_found() => debug!("Review {} already absent", review_id),
            Err(e) => return Err(e),
        }
        self.list(conference_id).await
    }

    pub async fn update(
        &self,
        review_id: ReviewId,
        draft: &ReviewDraft,
    ) -> Result<Review, RepositoryError> {
        self.conferences.update_review(review_id, draft).await
    }
}
