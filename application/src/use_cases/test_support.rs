//! In-memory repositories for use case tests.

use crate::ports::conference_repository::{ConferenceRepository, ConferenceSnapshot};
use crate::ports::keynote_repository::KeynoteRepository;
use crate::ports::repository::{BackendService, EntityKind, RepositoryError};
use async_trait::async_trait;
use chrono::NaiveDate;
use console_domain::{
    Conference, ConferenceDraft, ConferenceId, ConferenceType, Keynote, KeynoteDraft, KeynoteId,
    Review, ReviewDraft, ReviewId,
};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

pub(crate) fn sample_conference(id: i64, keynote_id: Option<i64>) -> Conference {
    Conference {
        id: ConferenceId::new(id),
        title: format!("Conference {id}"),
        kind: ConferenceType::Academic,
        date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        duration_minutes: 45,
        registered_count: 0,
        score: None,
        keynote_id: keynote_id.map(KeynoteId::new),
        reviews: None,
    }
}

pub(crate) fn sample_keynote(id: i64) -> Keynote {
    Keynote {
        id: KeynoteId::new(id),
        last_name: "Hopper".to_string(),
        first_name: "Grace".to_string(),
        email: format!("speaker{id}@example.org"),
        role: Some("Keynote speaker".to_string()),
    }
}

pub(crate) fn review_draft(comment: &str, rating: i64) -> ReviewDraft {
    ReviewDraft::new(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(), comment, rating).unwrap()
}

fn unreachable(service: BackendService) -> RepositoryError {
    RepositoryError::unreachable(service, "connection refused")
}

#[derive(Default)]
pub(crate) struct InMemoryConferenceRepository {
    conferences: Mutex<Vec<Conference>>,
    reviews: Mutex<Vec<Review>>,
    embedded_keynotes: Mutex<HashMap<ConferenceId, Keynote>>,
    unreachable: AtomicBool,
    embed_reviews: AtomicBool,
    next_id: AtomicI64,
    list_calls: AtomicUsize,
    write_calls: AtomicUsize,
}

impl InMemoryConferenceRepository {
    pub(crate) fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1000),
            ..Default::default()
        }
    }

    pub(crate) fn insert(&self, conference: Conference) {
        self.conferences.lock().unwrap().push(conference);
    }

    pub(crate) fn insert_review(&self, review: Review) {
        self.reviews.lock().unwrap().push(review);
    }

    pub(crate) fn embed_keynote(&self, id: ConferenceId, keynote: Keynote) {
        self.embedded_keynotes.lock().unwrap().insert(id, keynote);
    }

    pub(crate) fn set_unreachable(&self, value: bool) {
        self.unreachable.store(value, Ordering::SeqCst);
    }

    /// Embed each conference's reviews in list/get responses.
    pub(crate) fn set_embed_reviews(&self, value: bool) {
        self.embed_reviews.store(value, Ordering::SeqCst);
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn write_calls(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), RepositoryError> {
        if self.unreachable.load(Ordering::SeqCst) {
            Err(unreachable(BackendService::Conference))
        } else {
            Ok(())
        }
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    fn present(&self, mut conference: Conference) -> Conference {
        if self.embed_reviews.load(Ordering::SeqCst) {
            let reviews = self.reviews.lock().unwrap();
            conference.reviews = Some(
                reviews
                    .iter()
                    .filter(|r| r.conference_id == conference.id)
                    .cloned()
                    .collect(),
            );
        }
        conference
    }

    fn find(&self, id: ConferenceId) -> Result<Conference, RepositoryError> {
        let found = self
            .conferences
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned();
        found
            .map(|c| self.present(c))
            .ok_or_else(|| RepositoryError::not_found(EntityKind::Conference, id))
    }

    fn listed(&self, keep: impl Fn(&Conference) -> bool) -> Vec<Conference> {
        let all: Vec<Conference> = self
            .conferences
            .lock()
            .unwrap()
            .iter()
            .filter(|c| keep(c))
            .cloned()
            .collect();
        all.into_iter().map(|c| self.present(c)).collect()
    }

    fn materialize(id: ConferenceId, draft: &ConferenceDraft) -> Conference {
        Conference {
            id,
            title: draft.title.clone(),
            kind: draft.kind,
            date: draft.date,
            duration_minutes: draft.duration_minutes,
            registered_count: draft.registered_count,
            score: draft.score,
            keynote_id: draft.keynote_id,
            reviews: None,
        }
    }
}

#[async_trait]
impl ConferenceRepository for InMemoryConferenceRepository {
    async fn list_all(&self) -> Result<Vec<Conference>, RepositoryError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.listed(|_| true))
    }

    async fn get_by_id(&self, id: ConferenceId) -> Result<Conference, RepositoryError> {
        self.check()?;
        self.find(id)
    }

    async fn get_by_id_with_keynote_hint(
        &self,
        id: ConferenceId,
    ) -> Result<ConferenceSnapshot, RepositoryError> {
        self.check()?;
        let conference = self.find(id)?;
        let embedded_keynote = self.embedded_keynotes.lock().unwrap().get(&id).cloned();
        Ok(ConferenceSnapshot {
            conference,
            embedded_keynote,
        })
    }

    async fn list_by_type(&self, kind: ConferenceType) -> Result<Vec<Conference>, RepositoryError> {
        self.check()?;
        Ok(self.listed(|c| c.kind == kind))
    }

    async fn list_by_keynote(
        &self,
        keynote_id: KeynoteId,
    ) -> Result<Vec<Conference>, RepositoryError> {
        self.check()?;
        Ok(self.listed(|c| c.keynote_id == Some(keynote_id)))
    }

    async fn create(&self, draft: &ConferenceDraft) -> Result<Conference, RepositoryError> {
        draft.validate()?;
        self.check()?;
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        let conference = Self::materialize(ConferenceId::new(self.next_id()), draft);
        self.insert(conference.clone());
        Ok(conference)
    }

    async fn update(
        &self,
        id: ConferenceId,
        draft: &ConferenceDraft,
    ) -> Result<Conference, RepositoryError> {
        draft.validate()?;
        self.check()?;
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        let mut conferences = self.conferences.lock().unwrap();
        let slot = conferences
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| RepositoryError::not_found(EntityKind::Conference, id))?;
        *slot = Self::materialize(id, draft);
        Ok(slot.clone())
    }

    async fn delete(&self, id: ConferenceId) -> Result<(), RepositoryError> {
        self.check()?;
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        let mut conferences = self.conferences.lock().unwrap();
        let before = conferences.len();
        conferences.retain(|c| c.id != id);
        if conferences.len() == before {
            return Err(RepositoryError::not_found(EntityKind::Conference, id));
        }
        Ok(())
    }

    async fn list_reviews(
        &self,
        conference_id: ConferenceId,
    ) -> Result<Vec<Review>, RepositoryError> {
        self.check()?;
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.conference_id == conference_id)
            .cloned()
            .collect())
    }

    async fn get_review(&self, review_id: ReviewId) -> Result<Review, RepositoryError> {
        self.check()?;
        self.reviews
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == review_id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(EntityKind::Review, review_id))
    }

    async fn add_review(
        &self,
        conference_id: ConferenceId,
        draft: &ReviewDraft,
    ) -> Result<Review, RepositoryError> {
        draft.validate()?;
        self.check()?;
        self.find(conference_id)?;
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        let review = Review {
            id: ReviewId::new(self.next_id()),
            conference_id,
            date: draft.date,
            comment: draft.comment.clone(),
            rating: draft.rating,
        };
        self.insert_review(review.clone());
        Ok(review)
    }

    async fn update_review(
        &self,
        review_id: ReviewId,
        draft: &ReviewDraft,
    ) -> Result<Review, RepositoryError> {
        draft.validate()?;
        self.check()?;
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        let mut reviews = self.reviews.lock().unwrap();
        let slot = reviews
            .iter_mut()
            .find(|r| r.id == review_id)
            .ok_or_else(|| RepositoryError::not_found(EntityKind::Review, review_id))?;
        slot.date = draft.date;
        slot.comment = draft.comment.clone();
        slot.rating = draft.rating;
        Ok(slot.clone())
    }

    async fn delete_review(&self, review_id: ReviewId) -> Result<(), RepositoryError> {
        self.check()?;
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        let mut reviews = self.reviews.lock().unwrap();
        let before = reviews.len();
        reviews.retain(|r| r.id != review_id);
        if reviews.len() == before {
            return Err(RepositoryError::not_found(EntityKind::Review, review_id));
        }
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct InMemoryKeynoteRepository {
    keynotes: Mutex<Vec<Keynote>>,
    unreachable: AtomicBool,
    next_id: AtomicI64,
    get_calls: AtomicUsize,
    list_calls: AtomicUsize,
}

impl InMemoryKeynoteRepository {
    pub(crate) fn new() -> Self {
        Self {
            next_id: AtomicI64::new(500),
            ..Default::default()
        }
    }

    pub(crate) fn insert(&self, keynote: Keynote) {
        self.keynotes.lock().unwrap().push(keynote);
    }

    pub(crate) fn set_unreachable(&self, value: bool) {
        self.unreachable.store(value, Ordering::SeqCst);
    }

    pub(crate) fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), RepositoryError> {
        if self.unreachable.load(Ordering::SeqCst) {
            Err(unreachable(BackendService::Keynote))
        } else {
            Ok(())
        }
    }

    fn materialize(id: KeynoteId, draft: &KeynoteDraft) -> Keynote {
        Keynote {
            id,
            last_name: draft.last_name.clone(),
            first_name: draft.first_name.clone(),
            email: draft.email.clone(),
            role: draft.role.clone(),
        }
    }
}

#[async_trait]
impl KeynoteRepository for InMemoryKeynoteRepository {
    async fn list_all(&self) -> Result<Vec<Keynote>, RepositoryError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.keynotes.lock().unwrap().clone())
    }

    async fn get_by_id(&self, id: KeynoteId) -> Result<Keynote, RepositoryError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.keynotes
            .lock()
            .unwrap()
            .iter()
            .find(|k| k.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(EntityKind::Keynote, id))
    }

    async fn create(&self, draft: &KeynoteDraft) -> Result<Keynote, RepositoryError> {
        draft.validate()?;
        self.check()?;
        let id = KeynoteId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let keynote = Self::materialize(id, draft);
        self.insert(keynote.clone());
        Ok(keynote)
    }

    async fn update(
        &self,
        id: KeynoteId,
        draft: &KeynoteDraft,
    ) -> Result<Keynote, RepositoryError> {
        draft.validate()?;
        self.check()?;
        let mut keynotes = self.keynotes.lock().unwrap();
        let slot = keynotes
            .iter_mut()
            .find(|k| k.id == id)
            .ok_or_else(|| RepositoryError::not_found(EntityKind::Keynote, id))?;
        *slot = Self::materialize(id, draft);
        Ok(slot.clone())
    }

    async fn delete(&self, id: KeynoteId) -> Result<(), RepositoryError> {
        self.check()?;
        let mut keynotes = self.keynotes.lock().unwrap();
        let before = keynotes.len();
        keynotes.retain(|k| k.id != id);
        if keynotes.len() == before {
            return Err(RepositoryError::not_found(EntityKind::Keynote, id));
        }
        Ok(())
    }
}
