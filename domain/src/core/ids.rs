//! Typed identifiers.
//!
//! Identifiers are server-assigned integers. Each entity gets its own
//! newtype so a keynote id can never be passed where a conference id is
//! expected, even though both services use the same numeric space.

use serde::{Deserialize, Serialize};
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the raw numeric id as used in request paths.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of a conference, owned by the conference service.
    ConferenceId
);

entity_id!(
    /// Identifier of a keynote speaker, owned by the keynote service.
    ///
    /// Conferences hold this id as a soft reference: nothing guarantees
    /// that a keynote with this id exists.
    KeynoteId
);

entity_id!(
    /// Identifier of a review, owned by the conference service.
    ReviewId
);
