//! # Feedlens Timeline
//!
//! Model of the provider's timeline payload, kept deliberately loose.
//!
//! Timeline response bodies are large, loosely-typed JSON documents whose
//! shape varies by surface (home feed vs. user profile) and drifts over
//! time. Rather than mirror the provider schema in structs that would break
//! on every drift, this crate works directly on `serde_json::Value` and
//! commits to three narrow contracts:
//!
//! - [`locate_instructions`] finds the timeline instruction list: known hot
//!   paths first, then a bounded depth-first search.
//! - [`classify`] labels an entry from its `entryId` prefix alone, never
//!   from its content subtree.
//! - [`extract_entry_text`] pulls a searchable `"<author> <body>"` string
//!   out of post and thread entries, yielding `None` instead of failing on
//!   any shape mismatch.
//!
//! Everything here is pure and total; malformed subtrees degrade to "no
//! result", never to an error.

mod document;
mod entry;
mod extract;
mod request;

pub use document::{instructions_pointer, locate_instructions, TIMELINE_ADD_ENTRIES};
pub use entry::{classify, classify_entry, EntryKind};
pub use extract::extract_entry_text;
pub use request::is_timeline_url;
