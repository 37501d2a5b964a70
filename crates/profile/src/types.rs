use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Keyword count above which a profile is considered broad enough to lower
/// the similarity match bar
pub const BROAD_PROFILE_KEYWORDS: usize = 15;

/// Similarity threshold for profiles with more than [`BROAD_PROFILE_KEYWORDS`] keywords
const BROAD_THRESHOLD: f32 = 0.20;

/// Similarity threshold for narrower profiles
const NARROW_THRESHOLD: f32 = 0.25;

/// A user-defined interest area used to judge content relevance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopicProfile {
    /// Stable identifier; also selects a built-in domain heuristic when it
    /// names one (e.g. "basketball")
    pub id: String,

    /// Display name shown in the hosting UI
    pub name: String,

    /// Free-text description of the topic
    pub description: String,

    /// Lowercase keyword list, may be empty
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Unix timestamp (ms) of the last keyword generation, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<u64>,
}

impl TopicProfile {
    /// Create a profile, normalizing keywords to trimmed lowercase and
    /// dropping empties and duplicates
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        keywords: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            keywords: normalize_keywords(keywords),
            generated_at: None,
        }
    }

    /// Parse a profile from a JSON document
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let profile: Self = serde_json::from_str(raw)?;
        Ok(profile.normalized())
    }

    /// Parse a profile from a TOML document
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let profile: Self = toml::from_str(raw)?;
        Ok(profile.normalized())
    }

    /// Re-apply keyword normalization after deserialization
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.keywords = normalize_keywords(self.keywords);
        self
    }

    #[must_use]
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    /// Match threshold for the similarity phase. Broad profiles justify a
    /// lower bar: more keywords imply wider topical coverage.
    #[must_use]
    pub fn similarity_threshold(&self) -> f32 {
        if self.keywords.len() > BROAD_PROFILE_KEYWORDS {
            BROAD_THRESHOLD
        } else {
            NARROW_THRESHOLD
        }
    }

    /// The combined topic text the similarity phase vectorizes
    #[must_use]
    pub fn combined_text(&self) -> String {
        let mut combined =
            String::with_capacity(self.name.len() + self.description.len() + 64);
        combined.push_str(&self.name);
        combined.push(' ');
        combined.push_str(&self.description);
        for keyword in &self.keywords {
            combined.push(' ');
            combined.push_str(keyword);
        }
        combined
    }
}

fn normalize_keywords(keywords: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    keywords
        .into_iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .filter(|k| seen.insert(k.clone()))
        .collect()
}
