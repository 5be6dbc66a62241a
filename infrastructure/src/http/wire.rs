//! Wire DTOs
//!
//! The services speak JSON with French field names (`titre`, `duree`,
//! `nom`, `texte`, `note`, ...). These types mirror that format exactly
//! and convert to and from the domain types at the adapter boundary.

use chrono::NaiveDate;
use console_domain::{
    Conference, ConferenceDraft, ConferenceId, ConferenceType, Keynote, KeynoteDraft, KeynoteId,
    Rating, Review, ReviewDraft, ReviewId,
};
use serde::{Deserialize, Serialize};

/// Conference type as spelled on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum ConferenceTypeDto {
    #[serde(rename = "ACADEMIQUE")]
    Academique,
    #[serde(rename = "COMMERCIALE")]
    Commerciale,
}

impl ConferenceTypeDto {
    /// Path segment for `/conferences/type/{type}`
    pub(crate) fn as_path(self) -> &'static str {
        match self {
            ConferenceTypeDto::Academique => "ACADEMIQUE",
            ConferenceTypeDto::Commerciale => "COMMERCIALE",
        }
    }
}

impl From<ConferenceType> for ConferenceTypeDto {
    fn from(kind: ConferenceType) -> Self {
        match kind {
            ConferenceType::Academic => ConferenceTypeDto::Academique,
            ConferenceType::Commercial => ConferenceTypeDto::Commerciale,
        }
    }
}

impl From<ConferenceTypeDto> for ConferenceType {
    fn from(kind: ConferenceTypeDto) -> Self {
        match kind {
            ConferenceTypeDto::Academique => ConferenceType::Academic,
            ConferenceTypeDto::Commerciale => ConferenceType::Commercial,
        }
    }
}

// ==================== Keynote ====================

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct KeynoteDto {
    pub id: Option<i64>,
    #[serde(default)]
    pub nom: Option<String>,
    #[serde(default)]
    pub prenom: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub fonction: Option<String>,
}

impl KeynoteDto {
    /// Convert to the domain type. Missing strings become empty, so an
    /// incomplete record stays detectable through [`Keynote::is_complete`].
    pub(crate) fn into_keynote(self) -> Result<Keynote, String> {
        let id = self.id.ok_or("keynote without id")?;
        Ok(Keynote {
            id: KeynoteId::new(id),
            last_name: self.nom.unwrap_or_default(),
            first_name: self.prenom.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            role: self.fonction.filter(|f| !f.trim().is_empty()),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct KeynoteRequestDto<'a> {
    pub nom: &'a str,
    pub prenom: &'a str,
    pub email: &'a str,
    pub fonction: Option<&'a str>,
}

impl<'a> From<&'a KeynoteDraft> for KeynoteRequestDto<'a> {
    fn from(draft: &'a KeynoteDraft) -> Self {
        Self {
            nom: draft.last_name.trim(),
            prenom: draft.first_name.trim(),
            email: draft.email.trim(),
            fonction: draft.role.as_deref(),
        }
    }
}

// ==================== Review ====================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReviewDto {
    pub id: Option<i64>,
    pub date: NaiveDate,
    #[serde(default)]
    pub texte: Option<String>,
    pub note: Option<i64>,
    pub conference_id: Option<i64>,
}

impl ReviewDto {
    /// Convert to the domain type.
    ///
    /// `fallback_conference` fills in the parent id when the service omits
    /// it (embedded collections). A stored rating outside 1..=5 is clamped
    /// so one bad row does not hide the whole list.
    pub(crate) fn into_review(self, fallback_conference: Option<i64>) -> Result<Review, String> {
        let id = self.id.ok_or("review without id")?;
        let conference_id = self
            .conference_id
            .or(fallback_conference)
            .ok_or_else(|| format!("review {id} without conference id"))?;
        let note = self.note.ok_or_else(|| format!("review {id} without rating"))?;
        Ok(Review {
            id: ReviewId::new(id),
            conference_id: ConferenceId::new(conference_id),
            date: self.date,
            comment: self.texte.unwrap_or_default(),
            rating: Rating::saturating(note),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReviewRequestDto<'a> {
    pub date: NaiveDate,
    pub texte: &'a str,
    pub note: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conference_id: Option<i64>,
}

impl<'a> ReviewRequestDto<'a> {
    pub(crate) fn new(draft: &'a ReviewDraft, conference_id: Option<ConferenceId>) -> Self {
        Self {
            date: draft.date,
            texte: draft.comment.trim(),
            note: draft.rating.value(),
            conference_id: conference_id.map(ConferenceId::get),
        }
    }
}

// ==================== Conference ====================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConferenceDto {
    pub id: Option<i64>,
    #[serde(default)]
    pub titre: Option<String>,
    #[serde(rename = "type")]
    pub kind: ConferenceTypeDto,
    pub date: NaiveDate,
    pub duree: Option<i64>,
    pub nombre_inscrits: Option<i64>,
    pub score: Option<f64>,
    pub keynote_id: Option<i64>,
    #[serde(default)]
    pub keynote: Option<KeynoteDto>,
    #[serde(default)]
    pub reviews: Option<Vec<ReviewDto>>,
}

impl ConferenceDto {
    pub(crate) fn into_conference(self) -> Result<Conference, String> {
        self.into_parts().map(|(conference, _)| conference)
    }

    /// Conference plus whatever keynote the service embedded, unverified.
    pub(crate) fn into_parts(self) -> Result<(Conference, Option<Keynote>), String> {
        let id = self.id.ok_or("conference without id")?;
        let reviews = self
            .reviews
            .map(|list| {
                list.into_iter()
                    .map(|r| r.into_review(Some(id)))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;
        let embedded = self.keynote.and_then(|k| k.into_keynote().ok());
        let conference = Conference {
            id: ConferenceId::new(id),
            title: self.titre.unwrap_or_default(),
            kind: self.kind.into(),
            date: self.date,
            duration_minutes: non_negative(self.duree),
            registered_count: non_negative(self.nombre_inscrits),
            score: self.score,
            keynote_id: self.keynote_id.map(KeynoteId::new),
            reviews,
        };
        Ok((conference, embedded))
    }
}

fn non_negative(value: Option<i64>) -> u32 {
    value
        .map(|v| u32::try_from(v.max(0)).unwrap_or(u32::MAX))
        .unwrap_or(0)
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ConferenceRequestDto<'a> {
    pub titre: &'a str,
    #[serde(rename = "type")]
    pub kind: ConferenceTypeDto,
    pub date: NaiveDate,
    pub duree: u32,
    pub nombre_inscrits: u32,
    pub score: Option<f64>,
    pub keynote_id: Option<i64>,
}

impl<'a> From<&'a ConferenceDraft> for ConferenceRequestDto<'a> {
    fn from(draft: &'a ConferenceDraft) -> Self {
        Self {
            titre: draft.title.trim(),
            kind: draft.kind.into(),
            date: draft.date,
            duree: draft.duration_minutes,
            nombre_inscrits: draft.registered_count,
            score: draft.score,
            keynote_id: draft.keynote_id.map(KeynoteId::get),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_conference_with_fallback_keynote() {
        let body = json!({
            "id": 4,
            "titre": "Rust in production",
            "type": "COMMERCIALE",
            "date": "2024-06-12",
            "duree": 90,
            "nombreInscrits": 120,
            "score": 4.5,
            "keynoteId": 9,
            "keynote": {
                "id": 9,
                "nom": "Service indisponible",
                "prenom": "",
                "email": "",
                "fonction": ""
            },
            "reviews": [
                {"id": 1, "date": "2024-06-13", "texte": "Great", "note": 5, "conferenceId": 4},
                {"id": 2, "date": "2024-06-14", "texte": "Ok", "note": 3}
            ]
        });

        let dto: ConferenceDto = serde_json::from_value(body).unwrap();
        let (conference, keynote) = dto.into_parts().unwrap();

        assert_eq!(conference.kind, ConferenceType::Commercial);
        assert_eq!(conference.duration_minutes, 90);
        assert_eq!(conference.keynote_id, Some(KeynoteId::new(9)));
        assert_eq!(conference.embedded_review_count(), Some(2));
        assert_eq!(
            conference.reviews.as_ref().unwrap()[1].conference_id,
            ConferenceId::new(4)
        );
        let keynote = keynote.unwrap();
        assert!(!keynote.is_complete());
        assert_eq!(keynote.role, None);
    }

    #[test]
    fn test_decode_minimal_conference() {
        let body = json!({
            "id": 1,
            "titre": "Intro",
            "type": "ACADEMIQUE",
            "date": "2024-01-01",
            "duree": null,
            "nombreInscrits": null,
            "score": null,
            "keynoteId": null
        });

        let conference = serde_json::from_value::<ConferenceDto>(body)
            .unwrap()
            .into_conference()
            .unwrap();
        assert_eq!(conference.duration_minutes, 0);
        assert_eq!(conference.keynote_id, None);
        assert_eq!(conference.reviews, None);
    }

    #[test]
    fn test_unknown_type_fails_to_decode() {
        let body = json!({"id": 1, "titre": "X", "type": "WORKSHOP", "date": "2024-01-01"});
        assert!(serde_json::from_value::<ConferenceDto>(body).is_err());
    }

    #[test]
    fn test_encode_conference_request_uses_wire_names() {
        let draft = ConferenceDraft::new(
            " Intro ",
            ConferenceType::Academic,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            60,
        )
        .with_keynote(KeynoteId::new(3));

        let value = serde_json::to_value(ConferenceRequestDto::from(&draft)).unwrap();
        assert_eq!(
            value,
            json!({
                "titre": "Intro",
                "type": "ACADEMIQUE",
                "date": "2024-01-01",
                "duree": 60,
                "nombreInscrits": 0,
                "score": null,
                "keynoteId": 3
            })
        );
    }

    #[test]
    fn test_encode_review_request() {
        let draft =
            ReviewDraft::new(NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(), "Solid", 4).unwrap();
        let value =
            serde_json::to_value(ReviewRequestDto::new(&draft, Some(ConferenceId::new(8))))
                .unwrap();
        assert_eq!(
            value,
            json!({"date": "2024-02-03", "texte": "Solid", "note": 4, "conferenceId": 8})
        );
    }

    #[test]
    fn test_stored_rating_out_of_range_is_clamped() {
        let dto: ReviewDto = serde_json::from_value(
            json!({"id": 5, "date": "2024-02-03", "texte": "?", "note": 9, "conferenceId": 1}),
        )
        .unwrap();
        assert_eq!(dto.into_review(None).unwrap().rating.value(), 5);
    }

    #[test]
    fn test_review_without_rating_fails_to_convert() {
        let dto: ReviewDto = serde_json::from_value(
            json!({"id": 6, "date": "2024-02-03", "texte": "?", "note": null, "conferenceId": 1}),
        )
        .unwrap();
        assert_eq!(
            dto.into_review(None).unwrap_err(),
            "review 6 without rating".to_string()
        );
    }
}
