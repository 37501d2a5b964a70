use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Sparse term-frequency vector keyed by token
pub type TfVector = HashMap<String, f32>;

/// Minimum token length; shorter tokens carry no topical signal
const MIN_TOKEN_LEN: usize = 3;

/// Constant scale applied to every term weight. Cosine similarity is
/// magnitude-invariant, so this only keeps the stored weights in a readable
/// range; document-frequency normalization is intentionally omitted.
const TF_SCALE: f32 = 100.0;

/// Everything stripped before splitting: punctuation except `#` and `@`,
/// which mark hashtags and mentions
static STRIP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s#@]+").expect("valid strip pattern"));

/// Tokenize text: lowercase, strip punctuation except `#`/`@`, split on
/// whitespace, drop tokens shorter than three characters
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped = STRIP.replace_all(&lowered, "");
    stripped
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

/// Single-document term-frequency vector: token count over token total,
/// constant-scaled
#[must_use]
pub fn term_frequencies(tokens: &[String]) -> TfVector {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token).or_insert(0) += 1;
    }

    let total = tokens.len() as f32;
    counts
        .into_iter()
        .map(|(token, count)| (token.to_string(), count as f32 / total * TF_SCALE))
        .collect()
}

/// Cosine similarity between two sparse vectors over the union of their
/// keys. Zero when either vector is empty or zero-magnitude.
#[must_use]
pub fn cosine_similarity(a: &TfVector, b: &TfVector) -> f32 {
    let dot: f32 = a
        .iter()
        .filter_map(|(token, weight)| b.get(token).map(|other| weight * other))
        .sum();
    if dot == 0.0 {
        return 0.0;
    }

    let norm_a: f32 = a.values().map(|w| w * w).sum::<f32>().sqrt();
    let norm_b: f32 = b.values().map(|w| w * w).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokenize_strips_punctuation() {
        assert_eq!(
            tokenize("LeBron's dunk, unreal!!!"),
            vec!["lebrons", "dunk", "unreal"]
        );
    }

    #[test]
    fn test_tokenize_keeps_hashtags_and_mentions() {
        assert_eq!(
            tokenize("#NBA finals with @KingJames"),
            vec!["#nba", "finals", "with", "@kingjames"]
        );
    }

    #[test]
    fn test_tokenize_drops_short_tokens() {
        assert_eq!(tokenize("a to of the nba"), vec!["the", "nba"]);
    }

    #[test]
    fn test_term_frequencies_sum_to_scale() {
        let tokens = tokenize("dunk dunk rebound");
        let tf = term_frequencies(&tokens);
        let sum: f32 = tf.values().sum();
        assert!((sum - 100.0).abs() < 1e-4);
        assert!(tf["dunk"] > tf["rebound"]);
    }

    #[test]
    fn test_cosine_identical_texts() {
        let tf = term_frequencies(&tokenize("warriors win the game"));
        let sim = cosine_similarity(&tf, &tf);
        assert!((sim - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_cosine_disjoint_texts() {
        let a = term_frequencies(&tokenize("warriors win the game"));
        let b = term_frequencies(&tokenize("sourdough starter recipe"));
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_empty_vector() {
        let a = term_frequencies(&tokenize("warriors win"));
        let empty = TfVector::new();
        assert_eq!(cosine_similarity(&a, &empty), 0.0);
        assert_eq!(cosine_similarity(&empty, &a), 0.0);
    }

    #[test]
    fn test_cosine_partial_overlap_is_between() {
        let a = term_frequencies(&tokenize("lakers game tonight"));
        let b = term_frequencies(&tokenize("lakers trade rumors"));
        let sim = cosine_similarity(&a, &b);
        assert!(sim > 0.0 && sim < 1.0);
    }
}
