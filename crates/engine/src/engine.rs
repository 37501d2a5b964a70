use crate::error::Result;
use crate::rewrite::{rewrite_instruction, RewriteOutcome};
use feedlens_matcher::TopicMatcher;
use feedlens_profile::TopicProfile;
use feedlens_timeline::locate_instructions;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Aggregated match statistics for one processed response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterStats {
    /// Content (post/thread) entries seen
    pub total: usize,
    /// Content entries kept
    pub kept: usize,
    /// Content entries removed
    pub removed: usize,
    /// Display name of the profile that was applied
    pub profile_name: String,
}

/// A rewritten response body plus the statistics behind it.
///
/// `stats` is `None` whenever the body passed through unchanged (no
/// profile, unparseable body, or no instructions found).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    pub body: String,
    pub stats: Option<FilterStats>,
}

impl FilterOutcome {
    fn pass_through(raw_body: &str) -> Self {
        Self {
            body: raw_body.to_string(),
            stats: None,
        }
    }
}

/// The timeline filtering engine.
///
/// Reentrant: each call is a pure function of its two inputs plus the
/// matcher's topic-vector cache, so one engine can serve any number of
/// concurrent in-flight responses. Callers supply the profile per call —
/// typically a [`feedlens_profile::ProfileSlot`] snapshot taken once — so a
/// configuration update mid-response never changes decisions half way
/// through a document.
pub struct FilterEngine {
    matcher: TopicMatcher,
}

impl FilterEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            matcher: TopicMatcher::new(),
        }
    }

    /// The engine's matcher, for hosts that also score ad-hoc text
    #[must_use]
    pub fn matcher(&self) -> &TopicMatcher {
        &self.matcher
    }

    /// Filter a raw response body against a profile.
    ///
    /// Fail-open end to end: with no profile, an unparseable body, a
    /// document without timeline instructions, or any internal error, the
    /// original body comes back byte-identical and `stats` is `None`. The
    /// worst outcome of any failure is an unfiltered response.
    pub fn filter(&self, raw_body: &str, profile: Option<&TopicProfile>) -> FilterOutcome {
        let Some(profile) = profile else {
            return FilterOutcome::pass_through(raw_body);
        };

        match self.try_filter(raw_body, profile) {
            Ok(Some(outcome)) => outcome,
            Ok(None) => FilterOutcome::pass_through(raw_body),
            Err(err) => {
                log::warn!("Filtering failed, passing response through unchanged: {err}");
                FilterOutcome::pass_through(raw_body)
            }
        }
    }

    fn try_filter(&self, raw_body: &str, profile: &TopicProfile) -> Result<Option<FilterOutcome>> {
        let Ok(mut document) = serde_json::from_str::<Value>(raw_body) else {
            log::debug!("Response body is not JSON, passing through");
            return Ok(None);
        };

        let Some(instructions) = locate_instructions(&mut document) else {
            log::debug!("No timeline instructions in response, passing through");
            return Ok(None);
        };

        let mut totals = RewriteOutcome::default();
        for instruction in instructions.iter_mut() {
            totals.absorb(rewrite_instruction(instruction, &self.matcher, profile));
        }

        let body = serde_json::to_string(&document)?;
        log::info!(
            "Filtered timeline for '{}': {} content entries, {} kept, {} removed",
            profile.name,
            totals.total,
            totals.kept,
            totals.removed
        );

        Ok(Some(FilterOutcome {
            body,
            stats: Some(FilterStats {
                total: totals.total,
                kept: totals.kept,
                removed: totals.removed,
                profile_name: profile.name.clone(),
            }),
        }))
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new()
    }
}
