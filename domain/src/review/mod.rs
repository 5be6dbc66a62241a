//! Reviews: a conference's nested, user-submitted feedback.

pub mod entities;
pub mod rating;
