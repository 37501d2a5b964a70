use crate::cache::TopicVectorCache;
use crate::domains::BuiltinDomain;
use crate::tokenize::{cosine_similarity, term_frequencies, tokenize};
use feedlens_profile::TopicProfile;
use serde::{Deserialize, Serialize};

/// Weight of a keyword substring hit in the fast path
const KEYWORD_WEIGHT: u32 = 3;

/// Weight of a description-word substring hit in the fast path
const DESCRIPTION_WORD_WEIGHT: u32 = 1;

/// Description words this short are too generic to count
const MIN_DESCRIPTION_WORD_LEN: usize = 4;

/// Fast-path accumulated score that decides "obviously on-topic"
const KEYWORD_PHASE_THRESHOLD: u32 = 3;

/// Divisor mapping the unbounded fast-path score into [0, 1]
const KEYWORD_SCORE_SCALE: f32 = 10.0;

/// Boost per profile keyword literally contained in the candidate text
const KEYWORD_BOOST: f32 = 0.15;

/// Boost per capitalized word whose lowercase form appears inside a keyword
const CAPITALIZED_WORD_BOOST: f32 = 0.10;

/// Boost per built-in domain term found in the candidate text
const DOMAIN_TERM_BOOST: f32 = 0.05;

/// Which phase produced a match decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMethod {
    Keyword,
    Similarity,
}

/// Outcome of scoring one text against one profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched: bool,
    /// Combined score, clamped to [0, 1]
    pub score: f32,
    pub method: MatchMethod,
}

/// Hybrid keyword + cosine-similarity scorer.
///
/// Stateless apart from the topic-vector cache, which is a pure
/// optimization: clearing it never changes any result. Safe to share across
/// threads; scoring holds no lock while computing.
pub struct TopicMatcher {
    cache: TopicVectorCache,
}

impl TopicMatcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: TopicVectorCache::new(),
        }
    }

    /// Score `text` against `profile`. Total: any input yields a result.
    ///
    /// Case normalization happens here, not in the caller — extracted entry
    /// text arrives in original case so the capitalization heuristic can see
    /// it.
    pub fn score(&self, text: &str, profile: &TopicProfile) -> MatchResult {
        let lowered = text.to_lowercase();

        let raw = self.keyword_score(&lowered, profile);
        if raw >= KEYWORD_PHASE_THRESHOLD {
            log::debug!(
                "Keyword match (raw {raw}) for profile {}: {}",
                profile.id,
                preview(text)
            );
            return MatchResult {
                matched: true,
                score: (raw as f32 / KEYWORD_SCORE_SCALE).min(1.0),
                method: MatchMethod::Keyword,
            };
        }

        let score = self.similarity_score(text, &lowered, profile);
        let matched = score > profile.similarity_threshold();
        if matched {
            log::debug!(
                "Similarity match ({score:.3}) for profile {}: {}",
                profile.id,
                preview(text)
            );
        }
        MatchResult {
            matched,
            score,
            method: MatchMethod::Similarity,
        }
    }

    /// Drop all cached topic vectors; results are unaffected
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Phase A: weighted substring hits over the lowercased text
    fn keyword_score(&self, lowered: &str, profile: &TopicProfile) -> u32 {
        let keyword_hits = profile
            .keywords
            .iter()
            .filter(|keyword| lowered.contains(keyword.as_str()))
            .count() as u32;

        let description = profile.description.to_lowercase();
        let description_hits = description
            .split_whitespace()
            .filter(|word| word.chars().count() >= MIN_DESCRIPTION_WORD_LEN)
            .filter(|word| lowered.contains(word))
            .count() as u32;

        keyword_hits * KEYWORD_WEIGHT + description_hits * DESCRIPTION_WORD_WEIGHT
    }

    /// Phase B: TF cosine similarity plus the three fixed boosts
    fn similarity_score(&self, text: &str, lowered: &str, profile: &TopicProfile) -> f32 {
        let topic_vector = self.cache.topic_vector(profile);
        let candidate_vector = term_frequencies(&tokenize(text));

        let mut score = cosine_similarity(&topic_vector, &candidate_vector);

        let contained_keywords = profile
            .keywords
            .iter()
            .filter(|keyword| lowered.contains(keyword.as_str()))
            .count();
        score += contained_keywords as f32 * KEYWORD_BOOST;

        // Lightweight named-entity heuristic: a capitalized word sitting
        // inside one of the profile's keywords is probably the entity the
        // keyword names
        let capitalized_hits = text
            .split_whitespace()
            .filter_map(|word| {
                let trimmed = word.trim_matches(|c: char| !c.is_alphanumeric());
                let first = trimmed.chars().next()?;
                (first.is_uppercase() && trimmed.chars().count() > 2).then(|| trimmed.to_lowercase())
            })
            .filter(|word| profile.keywords.iter().any(|k| k.contains(word.as_str())))
            .count();
        score += capitalized_hits as f32 * CAPITALIZED_WORD_BOOST;

        if let Some(domain) = BuiltinDomain::from_profile_id(&profile.id) {
            score += domain.count_terms(lowered) as f32 * DOMAIN_TERM_BOOST;
        }

        score.clamp(0.0, 1.0)
    }
}

impl Default for TopicMatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn preview(text: &str) -> &str {
    let end = text
        .char_indices()
        .nth(60)
        .map_or(text.len(), |(idx, _)| idx);
    &text[..end]
}
