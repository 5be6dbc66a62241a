//! Conference catalog use case
//!
//! List, create, edit and delete conferences.

use crate::ports::conference_repository::ConferenceRepository;
use crate::ports::repository::RepositoryError;
use console_domain::{Conference, ConferenceDraft, ConferenceFilter, ConferenceId, KeynoteId};
use std::sync::Arc;
use tracing::{debug, info};

/// Use case for conference list and edit flows
pub struct ConferenceCatalogUseCase {
    conferences: Arc<dyn ConferenceRepository>,
}

impl ConferenceCatalogUseCase {
    pub fn new(conferences: Arc<dyn ConferenceRepository>) -> Self {
        Self { conferences }
    }

    /// Conferences matching `filter`, in service order.
    ///
    /// Filtering happens client-side over the full list.
    pub async fn list(&self, filter: ConferenceFilter) -> Result<Vec<Conference>, RepositoryError> {
        let list = self.conferences.list_all().await?;
        debug!("Filtering {} conferences by {:?}", list.len(), filter);
        Ok(filter.apply(list))
    }

    /// Conferences that reference the given keynote.
    pub async fn by_keynote(
        &self,
        keynote_id: KeynoteId,
    ) -> Result<Vec<Conference>, RepositoryError> {
        self.conferences.list_by_keynote(keynote_id).await
    }

    pub async fn get(&self, id: ConferenceId) -> Result<Conference, RepositoryError> {
        self.conferences.get_by_id(id).await
    }

    /// Create when `id` is `None`, update otherwise.
    pub async fn save(
        &self,
        id: Option<ConferenceId>,
        draft: &ConferenceDraft,
    ) -> Result<Conference, RepositoryError> {
        let saved = match id {
            None => self.conferences.create(draft).await?,
            Some(id) => self.conferences.update(id, draft).await?,
        };
        info!("Conference {} saved", saved.id);
        Ok(saved)
    }

    /// Replace a single field of a stored conference.
    ///
    /// The field value is validated before any write is sent.
    pub async fn apply_field(
        &self,
        id: ConferenceId,
        field: &str,
        value: &str,
    ) -> Result<Conference, RepositoryError> {
        let current = self.conferences.get_by_id(id).await?;
        let draft = current.draft().with_field(field, value)?;
        self.conferences.update(id, &draft).await
    }

    /// Delete a conference. Deleting an id that does not exist succeeds.
    pub async fn delete(&self, id: ConferenceId) -> Result<(), RepositoryError> {
        match self.conferences.delete(id).await {
            Ok(()) => {
                info!("Conference {} deleted", id);
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                debug!("Conference {} already absent", id);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
