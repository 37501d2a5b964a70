//! # Feedlens Matcher
//!
//! Scores free text against a topic profile.
//!
//! Two-phase hybrid, fast path first:
//!
//! 1. **Keyword phase** — weighted substring hits from the profile's keyword
//!    list and description words. Cheap, and alone decides "obviously
//!    on-topic".
//! 2. **Similarity phase** — single-document term-frequency vectors over a
//!    fixed tokenizer, cosine similarity, plus small auditable boosts for
//!    literal keyword containment, capitalized near-keyword words, and a
//!    closed per-domain term list for the built-in topics.
//!
//! The design deliberately stops short of real NLP: every score is a fixed,
//! explainable numeric procedure, and recomputing any cached intermediate
//! always yields the same value.

mod cache;
mod domains;
mod matcher;
mod tokenize;

pub use domains::BuiltinDomain;
pub use matcher::{MatchMethod, MatchResult, TopicMatcher};
pub use tokenize::{cosine_similarity, term_frequencies, tokenize, TfVector};
