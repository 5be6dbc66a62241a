//! Keynote directory use case

use crate::ports::keynote_repository::KeynoteRepository;
use crate::ports::repository::RepositoryError;
use console_domain::{Keynote, KeynoteDraft, KeynoteId};
use std::sync::Arc;
use tracing::{debug, info};

/// Use case for keynote list and edit flows
pub struct KeynoteDirectoryUseCase {
    keynotes: Arc<dyn KeynoteRepository>,
}

impl KeynoteDirectoryUseCase {
    pub fn new(keynotes: Arc<dyn KeynoteRepository>) -> Self {
        Self { keynotes }
    }

    pub async fn list(&self) -> Result<Vec<Keynote>, RepositoryError> {
        self.keynotes.list_all().await
    }

    pub async fn get(&self, id: KeynoteId) -> Result<Keynote, RepositoryError> {
        self.keynotes.get_by_id(id).await
    }

    /// Create when `id` is `None`, update otherwise.
    pub async fn save(
        &self,
        id: Option<KeynoteId>,
        draft: &KeynoteDraft,
    ) -> Result<Keynote, RepositoryError> {
        let saved = match id {
            None => self.keynotes.create(draft).await?,
            Some(id) => self.keynotes.update(id, draft).await?,
        };
        info!("Keynote {} saved", saved.id);
        Ok(saved)
    }

    pub async fn apply_field(
        &self,
        id: KeynoteId,
        field: &str,
        value: &str,
    ) -> Result<Keynote, RepositoryError> {
        let current = self.keynotes.get_by_id(id).await?;
        let draft = current.draft().with_field(field, value)?;
        self.keynotes.update(id, &draft).await
    }

    /// Delete a keynote. Conferences referencing it are left untouched;
    /// their keynote then resolves as unavailable.
    pub async fn delete(&self, id: KeynoteId) -> Result<(), RepositoryError> {
        match self.keynotes.delete(id).await {
            Ok(()) => {
                info!("Keynote {} deleted", id);
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                debug!("Keynote {} already absent", id);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
