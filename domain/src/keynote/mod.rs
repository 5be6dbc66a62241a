//! Keynote speakers, owned by the keynote service.

pub mod entities;
