use crate::entry::{classify_entry, EntryKind};
use serde_json::Value;

/// Produce the searchable text for a post or thread entry.
///
/// Returns `"<author> <body>"` for posts, and the per-item strings joined by
/// single spaces for threads, preserving original casing (the matcher owns
/// case normalization). Cursor and other entries, and any entry whose
/// expected substructure is missing, yield `None` — callers must treat that
/// as "keep, unscored".
#[must_use]
pub fn extract_entry_text(entry: &Value) -> Option<String> {
    match classify_entry(entry) {
        EntryKind::Post => post_text(entry.get("content")?),
        EntryKind::Thread => thread_text(entry.get("content")?),
        EntryKind::Cursor | EntryKind::Other => None,
    }
}

fn post_text(content: &Value) -> Option<String> {
    let result = content.pointer("/itemContent/tweet_results/result")?;
    tweet_text(result)
}

/// Author and body from a tweet result, handling the repost-style nesting
/// where the actual tweet hangs one level deeper under `tweet`.
fn tweet_text(result: &Value) -> Option<String> {
    let legacy = result
        .get("legacy")
        .or_else(|| result.pointer("/tweet/legacy"))?;
    let body = legacy.get("full_text").and_then(Value::as_str).unwrap_or("");

    let author = result
        .pointer("/core/user_results/result/legacy/screen_name")
        .or_else(|| result.pointer("/tweet/core/user_results/result/legacy/screen_name"))
        .and_then(Value::as_str)
        .unwrap_or("");

    Some(format!("{author} {body}"))
}

fn thread_text(content: &Value) -> Option<String> {
    let items = content.get("items")?.as_array()?;

    let parts: Vec<String> = items
        .iter()
        .filter_map(|item| {
            item.pointer("/item/itemContent/tweet_results/result")
                .or_else(|| item.pointer("/itemContent/tweet_results/result"))
        })
        .filter_map(tweet_text)
        .filter(|text| !text.trim().is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}
