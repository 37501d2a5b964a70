//! # Feedlens Profile
//!
//! Topic profile model for timeline filtering.
//!
//! A [`TopicProfile`] describes one user interest area: a display name, a
//! free-text description, and a lowercase keyword list. Profiles are created
//! and edited by a configuration surface outside this workspace; the engine
//! only ever reads them. This crate also carries the deterministic local
//! keyword generator used when no remote generator is reachable, and the
//! single-slot store through which a configuration channel publishes the
//! active profile to filtering callers.

mod error;
mod keywords;
mod slot;
mod types;

pub use error::{ProfileError, Result};
pub use keywords::{expand_local, parse_generated};
pub use slot::ProfileSlot;
pub use types::TopicProfile;
