//! Keynote service adapter

use super::client::{GatewayClient, GatewayConfig, Target};
use super::wire::{KeynoteDto, KeynoteRequestDto};
use async_trait::async_trait;
use console_application::{BackendService, EntityKind, KeynoteRepository, RepositoryError};
use console_domain::{Keynote, KeynoteDraft, KeynoteId};
use tracing::info;

/// [`KeynoteRepository`] over the gateway's keynote routes
pub struct HttpKeynoteRepository {
    client: GatewayClient,
}

impl HttpKeynoteRepository {
    pub fn new(config: &GatewayConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: GatewayClient::new(config, BackendService::Keynote)?,
        })
    }

    fn to_keynote(dto: KeynoteDto) -> Result<Keynote, RepositoryError> {
        dto.into_keynote()
            .map_err(|message| RepositoryError::RequestRejected {
                service: BackendService::Keynote,
                status: 200,
                message,
            })
    }

    fn target(id: KeynoteId) -> Target {
        Target::Entity(EntityKind::Keynote, id.get())
    }
}

#[async_trait]
impl KeynoteRepository for HttpKeynoteRepository {
    async fn list_all(&self) -> Result<Vec<Keynote>, RepositoryError> {
        let dtos: Vec<KeynoteDto> = self.client.get("keynotes", Target::Collection).await?;
        dtos.into_iter().map(Self::to_keynote).collect()
    }

    async fn get_by_id(&self, id: KeynoteId) -> Result<Keynote, RepositoryError> {
        let dto: KeynoteDto = self
            .client
            .get(&format!("keynotes/{id}"), Self::target(id))
            .await?;
        Self::to_keynote(dto)
    }

    async fn create(&self, draft: &KeynoteDraft) -> Result<Keynote, RepositoryError> {
        draft.validate()?;
        let dto: KeynoteDto = self
            .client
            .post("keynotes", &KeynoteRequestDto::from(draft), Target::Collection)
            .await?;
        let keynote = Self::to_keynote(dto)?;
        info!("Created keynote {}", keynote.id);
        Ok(keynote)
    }

    async fn update(
        &self,
        id: KeynoteId,
        draft: &KeynoteDraft,
    ) -> Result<Keynote, RepositoryError> {
        draft.validate()?;
        let dto: KeynoteDto = self
            .client
            .put(
                &format!("keynotes/{id}"),
                &KeynoteRequestDto::from(draft),
                Self::target(id),
            )
            .await?;
        let keynote = Self::to_keynote(dto)?;
        info!("Updated keynote {}", id);
        Ok(keynote)
    }

    async fn delete(&self, id: KeynoteId) -> Result<(), RepositoryError> {
        self.client
            .delete(&format!("keynotes/{id}"), Self::target(id))
            .await?;
        info!("Deleted keynote {}", id);
        Ok(())
    }
}
