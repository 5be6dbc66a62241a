//! Conference repository port
//!
//! Typed access to conference CRUD and the nested review collection owned
//! by the conference service.

use super::repository::RepositoryError;
use async_trait::async_trait;
use console_domain::{
    Conference, ConferenceDraft, ConferenceId, ConferenceType, Keynote, KeynoteId, Review,
    ReviewDraft, ReviewId,
};

/// A conference as returned by the "full" endpoint.
///
/// The conference service may embed the keynote it resolved server-side.
/// `embedded_keynote` is whatever it sent, unverified: a degraded service
/// sends the conference without it, or with a placeholder record.
#[derive(Debug, Clone, PartialEq)]
pub struct ConferenceSnapshot {
    pub conference: Conference,
    pub embedded_keynote: Option<Keynote>,
}

/// Conference service access
///
/// Implementations validate drafts locally before sending them, so
/// obviously invalid input fails with [`RepositoryError::Validation`]
/// without a network call.
#[async_trait]
pub trait ConferenceRepository: Send + Sync {
    /// All conferences, in the order the service returns them.
    async fn list_all(&self) -> Result<Vec<Conference>, RepositoryError>;

    async fn get_by_id(&self, id: ConferenceId) -> Result<Conference, RepositoryError>;

    /// Conference plus its raw keynote reference and any embedded keynote.
    /// Does not resolve the keynote itself.
    async fn get_by_id_with_keynote_hint(
        &self,
        id: ConferenceId,
    ) -> Result<ConferenceSnapshot, RepositoryError>;

    async fn list_by_type(&self, kind: ConferenceType) -> Result<Vec<Conference>, RepositoryError>;

    async fn list_by_keynote(
        &self,
        keynote_id: KeynoteId,
    ) -> Result<Vec<Conference>, RepositoryError>;

    async fn create(&self, draft: &ConferenceDraft) -> Result<Conference, RepositoryError>;

    async fn update(
        &self,
        id: ConferenceId,
        draft: &ConferenceDraft,
    ) -> Result<Conference, RepositoryError>;

    /// Reports `NotFound` faithfully; idempotency is a caller concern.
    async fn delete(&self, id: ConferenceId) -> Result<(), RepositoryError>;

    // ==================== Reviews ====================

    /// Reviews of a conference, in the order received.
    async fn list_reviews(&self, conference_id: ConferenceId)
    -> Result<Vec<Review>, RepositoryError>;

    async fn get_review(&self, review_id: ReviewId) -> Result<Review, RepositoryError>;

    async fn add_review(
        &self,
        conference_id: ConferenceId,
        draft: &ReviewDraft,
    ) -> Result<Review, RepositoryError>;

    async fn update_review(
        &self,
        review_id: ReviewId,
        draft: &ReviewDraft,
    ) -> Result<Review, RepositoryError>;

    async fn delete_review(&self, review_id: ReviewId) -> Result<(), RepositoryError>;
}
