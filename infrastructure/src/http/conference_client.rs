//! Conference service adapter

use super::client::{GatewayClient, GatewayConfig, Target};
use super::wire::{
    ConferenceDto, ConferenceRequestDto, ConferenceTypeDto, ReviewDto, ReviewRequestDto,
};
use async_trait::async_trait;
use console_application::{
    BackendService, ConferenceRepository, ConferenceSnapshot, EntityKind, RepositoryError,
};
use console_domain::{
    Conference, ConferenceDraft, ConferenceId, ConferenceType, KeynoteId, Review, ReviewDraft,
    ReviewId,
};
use tracing::{debug, info};

/// [`ConferenceRepository`] over the gateway's conference routes
pub struct HttpConferenceRepository {
    client: GatewayClient,
}

impl HttpConferenceRepository {
    pub fn new(config: &GatewayConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: GatewayClient::new(config, BackendService::Conference)?,
        })
    }

    fn rejected(&self, message: String) -> RepositoryError {
        RepositoryError::RequestRejected {
            service: BackendService::Conference,
            status: 200,
            message,
        }
    }

    fn to_conference(&self, dto: ConferenceDto) -> Result<Conference, RepositoryError> {
        dto.into_conference().map_err(|m| self.rejected(m))
    }

    fn to_conferences(&self, dtos: Vec<ConferenceDto>) -> Result<Vec<Conference>, RepositoryError> {
        dtos.into_iter().map(|dto| self.to_conference(dto)).collect()
    }

    fn to_review(
        &self,
        dto: ReviewDto,
        conference_id: Option<ConferenceId>,
    ) -> Result<Review, RepositoryError> {
        dto.into_review(conference_id.map(ConferenceId::get))
            .map_err(|m| self.rejected(m))
    }

    fn conference_target(id: ConferenceId) -> Target {
        Target::Entity(EntityKind::Conference, id.get())
    }

    fn review_target(id: ReviewId) -> Target {
        Target::Entity(EntityKind::Review, id.get())
    }
}

#[async_trait]
impl ConferenceRepository for HttpConferenceRepository {
    async fn list_all(&self) -> Result<Vec<Conference>, RepositoryError> {
        let dtos: Vec<ConferenceDto> = self.client.get("conferences", Target::Collection).await?;
        self.to_conferences(dtos)
    }

    async fn get_by_id(&self, id: ConferenceId) -> Result<Conference, RepositoryError> {
        let dto: ConferenceDto = self
            .client
            .get(&format!("conferences/{id}"), Self::conference_target(id))
            .await?;
        self.to_conference(dto)
    }

    async fn get_by_id_with_keynote_hint(
        &self,
        id: ConferenceId,
    ) -> Result<ConferenceSnapshot, RepositoryError> {
        let dto: ConferenceDto = self
            .client
            .get(&format!("conferences/{id}/full"), Self::conference_target(id))
            .await?;
        let (conference, embedded) = dto.into_parts().map_err(|m| self.rejected(m))?;

        // Keep the embedded keynote only when it is the referenced one and
        // carries real data; the service's degraded placeholder fails both.
        let embedded_keynote = embedded.filter(|keynote| {
            let usable = conference.keynote_id == Some(keynote.id) && keynote.is_complete();
            if !usable {
                debug!("Conference {}: discarding placeholder keynote {}", id, keynote.id);
            }
            usable
        });

        Ok(ConferenceSnapshot {
            conference,
            embedded_keynote,
        })
    }

    async fn list_by_type(&self, kind: ConferenceType) -> Result<Vec<Conference>, RepositoryError> {
        let segment = ConferenceTypeDto::from(kind).as_path();
        let dtos: Vec<ConferenceDto> = self
            .client
            .get(&format!("conferences/type/{segment}"), Target::Collection)
            .await?;
        self.to_conferences(dtos)
    }

    async fn list_by_keynote(
        &self,
        keynote_id: KeynoteId,
    ) -> Result<Vec<Conference>, RepositoryError> {
        let dtos: Vec<ConferenceDto> = self
            .client
            .get(
                &format!("conferences/keynote/{keynote_id}"),
                Target::Collection,
            )
            .await?;
        self.to_conferences(dtos)
    }

    async fn create(&self, draft: &ConferenceDraft) -> Result<Conference, RepositoryError> {
        draft.validate()?;
        let dto: ConferenceDto = self
            .client
            .post(
                "conferences",
                &ConferenceRequestDto::from(draft),
                Target::Collection,
            )
            .await?;
        let conference = self.to_conference(dto)?;
        info!("Created conference {}", conference.id);
        Ok(conference)
    }

    async fn update(
        &self,
        id: ConferenceId,
        draft: &ConferenceDraft,
    ) -> Result<Conference, RepositoryError> {
        draft.validate()?;
        let dto: ConferenceDto = self
            .client
            .put(
                &format!("conferences/{id}"),
                &ConferenceRequestDto::from(draft),
                Self::conference_target(id),
            )
            .await?;
        let conference = self.to_conference(dto)?;
        info!("Updated conference {}", id);
        Ok(conference)
    }

    async fn delete(&self, id: ConferenceId) -> Result<(), RepositoryError> {
        self.client
            .delete(&format!("conferences/{id}"), Self::conference_target(id))
            .await?;
        info!("Deleted conference {}", id);
        Ok(())
    }

    async fn list_reviews(
        &self,
        conference_id: ConferenceId,
    ) -> Result<Vec<Review>, RepositoryError> {
        let dtos: Vec<ReviewDto> = self
            .client
            .get(
                &format!("conferences/{conference_id}/reviews"),
                Self::conference_target(conference_id),
            )
            .await?;
        dtos.into_iter()
            .map(|dto| self.to_review(dto, Some(conference_id)))
            .collect()
    }

    async fn get_review(&self, review_id: ReviewId) -> Result<Review, RepositoryError> {
        let dto: ReviewDto = self
            .client
            .get(
                &format!("conferences/reviews/{review_id}"),
                Self::review_target(review_id),
            )
            .await?;
        self.to_review(dto, None)
    }

    async fn add_review(
        &self,
        conference_id: ConferenceId,
        draft: &ReviewDraft,
    ) -> Result<Review, RepositoryError> {
        draft.validate()?;
        let dto: ReviewDto = self
            .client
            .post(
                &format!("conferences/{conference_id}/reviews"),
                &ReviewRequestDto::new(draft, Some(conference_id)),
                Self::conference_target(conference_id),
            )
            .await?;
        let review = self.to_review(dto, Some(conference_id))?;
        info!("Added review {} to conference {}", review.id, conference_id);
        Ok(review)
    }

    async fn update_review(
        &self,
        review_id: ReviewId,
        draft: &ReviewDraft,
    ) -> Result<Review, RepositoryError> {
        draft.validate()?;
        let dto: ReviewDto = self
            .client
            .put(
                &format!("conferences/reviews/{review_id}"),
                &ReviewRequestDto::new(draft, None),
                Self::review_target(review_id),
            )
            .await?;
        let review = self.to_review(dto, None)?;
        info!("Updated review {}", review_id);
        Ok(review)
    }

    async fn delete_review(&self, review_id: ReviewId) -> Result<(), RepositoryError> {
        self.client
            .delete(
                &format!("conferences/reviews/{review_id}"),
                Self::review_target(review_id),
            )
            .await?;
        info!("Deleted review {}", review_id);
        Ok(())
    }
}
