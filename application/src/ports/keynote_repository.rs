//! Keynote repository port

use super::repository::RepositoryError;
use async_trait::async_trait;
use console_domain::{Keynote, KeynoteDraft, KeynoteId};

/// Keynote service access
///
/// `get_by_id` must turn every failure (missing id, service down, timeout)
/// into a [`RepositoryError`] so the resolver can classify the keynote as
/// unavailable instead of propagating a raw transport error.
#[async_trait]
pub trait KeynoteRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Keynote>, RepositoryError>;

    async fn get_by_id(&self, id: KeynoteId) -> Result<Keynote, RepositoryError>;

    async fn create(&self, draft: &KeynoteDraft) -> Result<Keynote, RepositoryError>;

    async fn update(&self, id: KeynoteId, draft: &KeynoteDraft)
    -> Result<Keynote, RepositoryError>;

    async fn delete(&self, id: KeynoteId) -> Result<(), RepositoryError>;
}
