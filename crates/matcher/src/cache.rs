use crate::tokenize::{term_frequencies, tokenize, TfVector};
use feedlens_profile::TopicProfile;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, PoisonError};

/// Bounded capacity; entries are pure recomputations, so eviction is always
/// safe
const TOPIC_CACHE_CAPACITY: usize = 64;

/// Cache of per-profile topic vectors.
///
/// Keyed by `(profile id, joined keywords)` so editing a profile's keywords
/// naturally misses and recomputes. The lock is held only around lookups and
/// inserts, never during vectorization; two callers racing on the same miss
/// just compute the same vector twice.
pub(crate) struct TopicVectorCache {
    inner: Mutex<LruCache<CacheKey, Arc<TfVector>>>,
}

type CacheKey = (String, String);

impl TopicVectorCache {
    pub(crate) fn new() -> Self {
        let capacity = NonZeroUsize::new(TOPIC_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub(crate) fn topic_vector(&self, profile: &TopicProfile) -> Arc<TfVector> {
        let key = (profile.id.clone(), profile.keywords.join(" "));

        if let Some(vector) = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Arc::clone(vector);
        }

        let vector = Arc::new(term_frequencies(&tokenize(&profile.combined_text())));
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .put(key, Arc::clone(&vector));
        log::debug!(
            "Topic vector computed for profile {} ({} terms)",
            profile.id,
            vector.len()
        );
        vector
    }

    pub(crate) fn clear(&self) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
