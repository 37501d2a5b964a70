use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Hard cap on locally generated keyword lists
const MAX_LOCAL_KEYWORDS: usize = 1000;

/// Suffixes appended to every stem by the local generator
const STEM_SUFFIXES: [&str; 6] = ["", "s", "ing", "ed", "er", "ers"];

static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```.*?```").expect("valid code fence pattern"));
static INLINE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`]+)`").expect("valid inline code pattern"));
static BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*[-*\u{2022}]\s+").expect("valid bullet pattern"));
static NUMBERING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*\d+\.\s+").expect("valid numbering pattern"));
static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid bold pattern"));
static FILLER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(keywords?|here|are|the|list):?$").expect("valid filler pattern"));

/// Clean a remote generator's response down to a flat keyword list.
///
/// Generators are asked for a bare comma-separated list but routinely wrap it
/// in markdown, bullets, or a "Keywords:" preamble anyway.
pub fn parse_generated(text: &str) -> Vec<String> {
    let cleaned = CODE_FENCE.replace_all(text, "");
    let cleaned = INLINE_CODE.replace_all(&cleaned, "$1");
    let cleaned = BULLET.replace_all(&cleaned, "");
    let cleaned = NUMBERING.replace_all(&cleaned, "");
    let cleaned = BOLD.replace_all(&cleaned, "$1");

    let mut seen = HashSet::new();
    cleaned
        .split(['\n', ','])
        .map(|kw| kw.trim().to_lowercase())
        .filter(|kw| !kw.is_empty())
        .filter(|kw| kw.len() < 50)
        .filter(|kw| !kw.contains(':'))
        .filter(|kw| !FILLER.is_match(kw))
        .filter(|kw| seen.insert(kw.clone()))
        .collect()
}

/// Deterministic fallback keyword generation from the topic's own words.
///
/// Used when no remote generator is reachable. Takes every word of the name
/// and description longer than two characters and emits common suffix
/// variants plus a hashtag form, then joined/bigram forms for multi-word
/// topic names.
pub fn expand_local(name: &str, description: &str, existing: &[String]) -> Vec<String> {
    let mut keywords: Vec<String> = existing.to_vec();
    let topic = name.to_lowercase();
    let desc = description.to_lowercase();

    let words = topic
        .split_whitespace()
        .chain(desc.split(|c: char| c.is_whitespace() || c == ','))
        .filter(|w| w.len() > 2);

    for word in words {
        let stem: String = word
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();
        if stem.len() < 2 {
            continue;
        }

        for suffix in STEM_SUFFIXES {
            keywords.push(format!("{stem}{suffix}"));
        }
        keywords.push(format!("#{stem}"));

        // Crude singular/stem variant
        if stem.len() > 4 {
            keywords.push(stem[..stem.len() - 1].to_string());
        }
    }

    let topic_words: Vec<&str> = topic.split_whitespace().filter(|w| w.len() > 2).collect();
    if topic_words.len() > 1 {
        let joined = topic_words.concat();
        keywords.push(joined.clone());
        keywords.push(format!("#{joined}"));

        for pair in topic_words.windows(2) {
            keywords.push(format!("{}{}", pair[0], pair[1]));
            keywords.push(format!("{} {}", pair[0], pair[1]));
        }
    }

    let mut seen = HashSet::new();
    keywords
        .into_iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| k.len() > 1 && k.len() < 50)
        .filter(|k| seen.insert(k.clone()))
        .take(MAX_LOCAL_KEYWORDS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_local_suffix_variants() {
        let keywords = expand_local("cooking", "", &[]);
        assert!(keywords.contains(&"cooking".to_string()));
        assert!(keywords.contains(&"cookings".to_string()));
        assert!(keywords.contains(&"#cooking".to_string()));
        // Stem minus final char for words longer than 4
        assert!(keywords.contains(&"cookin".to_string()));
    }

    #[test]
    fn test_expand_local_multiword_combinations() {
        let keywords = expand_local("formula one", "motor racing", &[]);
        assert!(keywords.contains(&"formulaone".to_string()));
        assert!(keywords.contains(&"#formulaone".to_string()));
        assert!(keywords.contains(&"formula one".to_string()));
        assert!(keywords.contains(&"racing".to_string()));
    }

    #[test]
    fn test_expand_local_keeps_existing_first() {
        let existing = vec!["lakers".to_string()];
        let keywords = expand_local("basketball", "", &existing);
        assert_eq!(keywords[0], "lakers");
    }

    #[test]
    fn test_expand_local_skips_short_words() {
        let keywords = expand_local("ai", "ml is it", &[]);
        // Every source word is <= 2 chars, nothing to expand
        assert!(keywords.is_empty());
    }

    #[test]
    fn test_parse_generated_plain_list() {
        let keywords = parse_generated("Lakers, Warriors, LeBron, dunk");
        assert_eq!(keywords, vec!["lakers", "warriors", "lebron", "dunk"]);
    }

    #[test]
    fn test_parse_generated_strips_markup() {
        let text = "Keywords:\n- **Lakers**\n- `Warriors`\n1. dunk\n";
        let keywords = parse_generated(text);
        assert_eq!(keywords, vec!["lakers", "warriors", "dunk"]);
    }

    #[test]
    fn test_parse_generated_drops_category_labels() {
        // "teams: lakers" carries a colon and is dropped whole
        let keywords = parse_generated("teams: lakers, warriors, here, list");
        assert_eq!(keywords, vec!["warriors"]);
    }

    #[test]
    fn test_parse_generated_dedupes_preserving_order() {
        let keywords = parse_generated("dunk, Lakers, dunk, lakers");
        assert_eq!(keywords, vec!["dunk", "lakers"]);
    }
}
