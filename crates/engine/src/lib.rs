//! # Feedlens Engine
//!
//! The timeline filtering pipeline.
//!
//! [`FilterEngine::filter`] takes a raw response body and a topic profile
//! and returns a rewritten body plus match statistics:
//!
//! ```text
//! raw body ──> parse ──> locate instructions ──> per instruction:
//!                                                  classify entry
//!                                                  extract text
//!                                                  score vs profile
//!                                                  rewrite entry list
//!              reserialize <── aggregate stats <──┘
//! ```
//!
//! The engine is synchronous, reentrant, and fail-open at every level: a
//! malformed body, a missing instruction list, or a single odd entry can at
//! worst leave the response (or that entry) unfiltered. Nothing in this
//! crate panics or performs I/O; hosts intercepting network responses call
//! [`FilterEngine::filter`] and substitute the returned body.

mod engine;
mod error;
mod rewrite;

pub use engine::{FilterEngine, FilterOutcome, FilterStats};
pub use error::{EngineError, Result};
