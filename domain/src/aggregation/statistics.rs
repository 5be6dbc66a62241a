//! Dashboard statistics
//!
//! A pure fold over the two independently fetched collections. Each count
//! reports its own availability, so a keynote service outage does not hide
//! the conference numbers and vice versa.

use crate::conference::entities::Conference;
use serde::Serialize;

/// Default number of conferences shown in the "recent" strip.
pub const DEFAULT_RECENT_LIMIT: usize = 3;

/// A count that may be unavailable because its source could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum CountOutcome {
    Available(usize),
    Unavailable(String),
}

impl CountOutcome {
    pub fn value(&self) -> Option<usize> {
        match self {
            CountOutcome::Available(n) => Some(*n),
            CountOutcome::Unavailable(_) => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, CountOutcome::Available(_))
    }
}

/// Summary numbers for the home display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStatistics {
    pub conferences: CountOutcome,
    pub keynotes: CountOutcome,
    /// Sum of embedded review collections; follows the conference list's
    /// availability.
    pub reviews: CountOutcome,
    /// First conferences as returned by the service.
    pub recent: Vec<Conference>,
}

impl DashboardStatistics {
    /// Fold the two list outcomes into statistics.
    ///
    /// `keynotes` only needs a count; no cross-referencing with the
    /// conferences' keynote ids is done.
    pub fn fold(
        conferences: Result<Vec<Conference>, String>,
        keynotes: Result<usize, String>,
        recent_limit: usize,
    ) -> Self {
        let keynotes = match keynotes {
            Ok(n) => CountOutcome::Available(n),
            Err(reason) => CountOutcome::Unavailable(reason),
        };

        match conferences {
            Ok(list) => {
                let reviews = total_embedded_reviews(&list);
                let conference_count = list.len();
                let recent = list.into_iter().take(recent_limit).collect();
                Self {
                    conferences: CountOutcome::Available(conference_count),
                    keynotes,
                    reviews: CountOutcome::Available(reviews),
                    recent,
                }
            }
            Err(reason) => Self {
                conferences: CountOutcome::Unavailable(reason.clone()),
                keynotes,
                reviews: CountOutcome::Unavailable(reason),
                recent: Vec::new(),
            },
        }
    }
}

/// Total number of embedded reviews; conferences without an embedded
/// collection contribute zero.
pub fn total_embedded_reviews(conferences: &[Conference]) -> usize {
    conferences
        .iter()
        .filter_map(Conference::embedded_review_count)
        .sum()
}
