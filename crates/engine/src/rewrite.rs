use feedlens_matcher::TopicMatcher;
use feedlens_profile::TopicProfile;
use feedlens_timeline::{classify_entry, extract_entry_text, TIMELINE_ADD_ENTRIES};
use serde_json::Value;

/// Per-instruction rewrite tally over content (post/thread) entries
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct RewriteOutcome {
    pub total: usize,
    pub kept: usize,
    pub removed: usize,
}

impl RewriteOutcome {
    pub(crate) fn absorb(&mut self, other: Self) {
        self.total += other.total;
        self.kept += other.kept;
        self.removed += other.removed;
    }
}

/// Rewrite one instruction's entry list under the profile's match decisions.
///
/// Only `TimelineAddEntries` instructions are touched; anything else passes
/// through unmodified. Cursor and unrecognized entries are always kept so
/// provider-controlled pagination and prompts survive. Content entries are
/// kept when their text matches the profile, or when no text could be
/// extracted (fail-open: ambiguous content is never silently dropped).
pub(crate) fn rewrite_instruction(
    instruction: &mut Value,
    matcher: &TopicMatcher,
    profile: &TopicProfile,
) -> RewriteOutcome {
    let mut outcome = RewriteOutcome::default();

    if instruction.get("type").and_then(Value::as_str) != Some(TIMELINE_ADD_ENTRIES) {
        return outcome;
    }
    let Some(entries) = instruction.get_mut("entries").and_then(Value::as_array_mut) else {
        return outcome;
    };

    let original_len = entries.len();
    let original: Vec<Value> = std::mem::take(entries);

    let mut kept: Vec<(usize, Value)> = Vec::with_capacity(original_len);
    let mut first_dropped: Option<(usize, Value)> = None;
    let mut content_kept = 0usize;

    for (index, entry) in original.into_iter().enumerate() {
        if !classify_entry(&entry).is_content() {
            kept.push((index, entry));
            continue;
        }

        outcome.total += 1;
        let keep = match extract_entry_text(&entry) {
            None => true,
            Some(text) => matcher.score(&text, profile).matched,
        };

        if keep {
            content_kept += 1;
            outcome.kept += 1;
            kept.push((index, entry));
        } else {
            outcome.removed += 1;
            if first_dropped.is_none() {
                first_dropped = Some((index, entry));
            }
        }
    }

    // Pagination safety: some clients stop requesting further pages when a
    // response carries no content entries at all, so an aggressive filter
    // must leave one survivor. Reinserted at its original relative position.
    if content_kept == 0 && original_len > 2 {
        if let Some((index, entry)) = first_dropped {
            log::debug!(
                "No content entry survived; forcing first original entry {index} back in"
            );
            let position = kept.partition_point(|(kept_index, _)| *kept_index < index);
            kept.insert(position, (index, entry));
            outcome.kept += 1;
            outcome.removed -= 1;
        }
    }

    *entries = kept.into_iter().map(|(_, entry)| entry).collect();
    outcome
}
