use serde_json::Value;

/// Entry kind derived from the `entryId` prefix.
///
/// Classification never inspects the entry's content subtree; the prefix is
/// the provider's own stable discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Pagination cursor, always kept
    Cursor,
    /// Single post
    Post,
    /// Multi-post conversation thread
    Thread,
    /// Anything unrecognized (prompts, modules), always kept
    Other,
}

impl EntryKind {
    /// True for kinds that carry user content and are subject to scoring
    #[must_use]
    pub const fn is_content(self) -> bool {
        matches!(self, Self::Post | Self::Thread)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cursor => "cursor",
            Self::Post => "post",
            Self::Thread => "thread",
            Self::Other => "other",
        }
    }
}

/// Classify an entry id. Total: unknown prefixes map to [`EntryKind::Other`].
#[must_use]
pub fn classify(entry_id: &str) -> EntryKind {
    if entry_id.starts_with("cursor-") {
        EntryKind::Cursor
    } else if entry_id.starts_with("tweet-") {
        EntryKind::Post
    } else if entry_id.starts_with("home-conversation-")
        || entry_id.starts_with("conversationthread-")
    {
        EntryKind::Thread
    } else {
        EntryKind::Other
    }
}

/// Classify a raw entry value by its `entryId` field.
///
/// Entries without a string `entryId` classify as [`EntryKind::Other`] and
/// therefore pass through unfiltered.
#[must_use]
pub fn classify_entry(entry: &Value) -> EntryKind {
    entry
        .get("entryId")
        .and_then(Value::as_str)
        .map_or(EntryKind::Other, classify)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_prefixes() {
        assert_eq!(classify("cursor-top-123"), EntryKind::Cursor);
        assert_eq!(classify("tweet-1750000000000000000"), EntryKind::Post);
        assert_eq!(classify("home-conversation-1234-56"), EntryKind::Thread);
        assert_eq!(classify("conversationthread-9876"), EntryKind::Thread);
        assert_eq!(classify("who-to-follow-8"), EntryKind::Other);
        assert_eq!(classify(""), EntryKind::Other);
    }

    #[test]
    fn test_prefix_must_anchor_at_start() {
        assert_eq!(classify("promoted-tweet-123"), EntryKind::Other);
    }

    #[test]
    fn test_classify_entry_without_id() {
        assert_eq!(classify_entry(&json!({})), EntryKind::Other);
        assert_eq!(classify_entry(&json!({"entryId": 42})), EntryKind::Other);
    }

    #[test]
    fn test_is_content() {
        assert!(EntryKind::Post.is_content());
        assert!(EntryKind::Thread.is_content());
        assert!(!EntryKind::Cursor.is_content());
        assert!(!EntryKind::Other.is_content());
    }
}
