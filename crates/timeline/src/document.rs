use serde_json::Value;

/// Instruction type subject to rewriting; every other type passes through
pub const TIMELINE_ADD_ENTRIES: &str = "TimelineAddEntries";

/// Maximum depth for the fallback instruction search
const MAX_SEARCH_DEPTH: usize = 6;

/// Known hot paths to the instruction list, by provider surface
const PROBE_POINTERS: [&str; 3] = [
    "/data/home/home_timeline_urt/instructions",
    "/data/home_timeline_urt/instructions",
    "/data/user/result/timeline_v2/timeline/instructions",
];

/// Find the timeline instruction list inside an arbitrary response document.
///
/// Returns the first array that contains at least one
/// `TimelineAddEntries`-typed element, or `None` when the document carries no
/// such list anywhere the search reaches.
pub fn locate_instructions(document: &mut Value) -> Option<&mut Vec<Value>> {
    let pointer = instructions_pointer(document)?;
    document.pointer_mut(&pointer)?.as_array_mut()
}

/// JSON Pointer to the instruction list, probing hot paths before falling
/// back to a bounded depth-first search rooted at the document's `data`
/// member (or the document root when `data` is absent).
pub fn instructions_pointer(document: &Value) -> Option<String> {
    for pointer in PROBE_POINTERS {
        if let Some(Value::Array(instructions)) = document.pointer(pointer) {
            if has_add_entries(instructions) {
                log::debug!("Instructions at probe path {pointer}");
                return Some(pointer.to_string());
            }
        }
    }

    let (root, mut prefix) = match document.get("data") {
        Some(data) => (data, "/data".to_string()),
        None => (document, String::new()),
    };

    let found = search(root, 0, &mut prefix);
    match &found {
        Some(pointer) => log::debug!("Instructions found by deep search at {pointer}"),
        None => log::debug!("No timeline instructions in document"),
    }
    found
}

fn search(value: &Value, depth: usize, prefix: &mut String) -> Option<String> {
    if depth > MAX_SEARCH_DEPTH {
        return None;
    }
    match value {
        Value::Object(map) => {
            if let Some(Value::Array(instructions)) = map.get("instructions") {
                if has_add_entries(instructions) {
                    return Some(format!("{prefix}/instructions"));
                }
            }
            for (key, child) in map {
                let saved = prefix.len();
                prefix.push('/');
                prefix.push_str(&escape_pointer_token(key));
                if let Some(found) = search(child, depth + 1, prefix) {
                    return Some(found);
                }
                prefix.truncate(saved);
            }
            None
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                let saved = prefix.len();
                prefix.push('/');
                prefix.push_str(&index.to_string());
                if let Some(found) = search(child, depth + 1, prefix) {
                    return Some(found);
                }
                prefix.truncate(saved);
            }
            None
        }
        _ => None,
    }
}

fn has_add_entries(instructions: &[Value]) -> bool {
    instructions
        .iter()
        .any(|inst| inst.get("type").and_then(Value::as_str) == Some(TIMELINE_ADD_ENTRIES))
}

/// RFC 6901 token escaping: `~` then `/`
fn escape_pointer_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn add_entries_instruction() -> Value {
        json!({"type": "TimelineAddEntries", "entries": []})
    }

    #[test]
    fn test_probe_home_timeline_path() {
        let mut doc = json!({
            "data": {"home": {"home_timeline_urt": {"instructions": [add_entries_instruction()]}}}
        });
        let pointer = instructions_pointer(&doc).unwrap();
        assert_eq!(pointer, "/data/home/home_timeline_urt/instructions");
        assert!(locate_instructions(&mut doc).is_some());
    }

    #[test]
    fn test_probe_user_profile_path() {
        let doc = json!({
            "data": {"user": {"result": {"timeline_v2": {"timeline": {
                "instructions": [add_entries_instruction()]
            }}}}}
        });
        assert_eq!(
            instructions_pointer(&doc).unwrap(),
            "/data/user/result/timeline_v2/timeline/instructions"
        );
    }

    #[test]
    fn test_probe_requires_add_entries_element() {
        // A probe hit with only other instruction types does not count
        let doc = json!({
            "data": {"home": {"home_timeline_urt": {
                "instructions": [{"type": "TimelineClearCache"}]
            }}}
        });
        assert_eq!(instructions_pointer(&doc), None);
    }

    #[test]
    fn test_deep_search_fallback() {
        let mut doc = json!({
            "data": {"search_by_raw_query": {"search_timeline": {"timeline": {
                "instructions": [{"type": "TimelineClearCache"}, add_entries_instruction()]
            }}}}
        });
        let pointer = instructions_pointer(&doc).unwrap();
        assert_eq!(
            pointer,
            "/data/search_by_raw_query/search_timeline/timeline/instructions"
        );
        assert!(locate_instructions(&mut doc).is_some());
    }

    #[test]
    fn test_deep_search_descends_arrays() {
        let doc = json!({
            "data": {"threaded_conversation_with_injections_v2": {
                "timelines": [{"timeline": {"instructions": [add_entries_instruction()]}}]
            }}
        });
        let pointer = instructions_pointer(&doc).unwrap();
        assert!(pointer.ends_with("/timelines/0/timeline/instructions"));
    }

    #[test]
    fn test_depth_bound_stops_pathological_nesting() {
        let mut doc = json!({"instructions": [add_entries_instruction()]});
        for _ in 0..8 {
            doc = json!({"wrap": doc});
        }
        let doc = json!({"data": doc});
        assert_eq!(instructions_pointer(&doc), None);
    }

    #[test]
    fn test_missing_instructions_yields_none() {
        let mut doc = json!({"data": {"viewer": {"settings": {}}}});
        assert!(locate_instructions(&mut doc).is_none());
    }

    #[test]
    fn test_root_search_when_data_absent() {
        let doc = json!({"timeline": {"instructions": [add_entries_instruction()]}});
        assert_eq!(
            instructions_pointer(&doc).unwrap(),
            "/timeline/instructions"
        );
    }

    #[test]
    fn test_pointer_escapes_odd_keys() {
        let doc = json!({
            "data": {"a/b": {"instructions": [add_entries_instruction()]}}
        });
        assert_eq!(instructions_pointer(&doc).unwrap(), "/data/a~1b/instructions");
    }
}
