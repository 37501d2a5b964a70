use crate::types::TopicProfile;
use std::sync::{Arc, PoisonError, RwLock};

/// Single-slot store for the active profile.
///
/// The configuration channel calls [`ProfileSlot::store`] whenever the user
/// picks a different topic; filtering callers call [`ProfileSlot::snapshot`]
/// exactly once per response so a mid-flight update never changes the profile
/// half way through a rewrite. Last write wins.
#[derive(Debug, Default)]
pub struct ProfileSlot {
    inner: RwLock<Option<Arc<TopicProfile>>>,
}

impl ProfileSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active profile. `None` switches to pass-through mode.
    pub fn store(&self, profile: Option<TopicProfile>) {
        let next = profile.map(Arc::new);
        let mut slot = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        match &next {
            Some(p) => log::info!("Active profile set: {} ({})", p.name, p.id),
            None => log::info!("Active profile cleared"),
        }
        *slot = next;
    }

    /// Snapshot the active profile for one filtering call
    #[must_use]
    pub fn snapshot(&self) -> Option<Arc<TopicProfile>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str) -> TopicProfile {
        TopicProfile::new(id, id, "test", vec![])
    }

    #[test]
    fn test_empty_slot_snapshots_none() {
        let slot = ProfileSlot::new();
        assert!(slot.snapshot().is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let slot = ProfileSlot::new();
        slot.store(Some(profile("first")));
        slot.store(Some(profile("second")));
        assert_eq!(slot.snapshot().unwrap().id, "second");
    }

    #[test]
    fn test_clear_returns_to_pass_through() {
        let slot = ProfileSlot::new();
        slot.store(Some(profile("topic")));
        slot.store(None);
        assert!(slot.snapshot().is_none());
    }

    #[test]
    fn test_snapshot_survives_replacement() {
        let slot = ProfileSlot::new();
        slot.store(Some(profile("old")));
        let held = slot.snapshot().unwrap();
        slot.store(Some(profile("new")));
        // A call that snapshotted before the update keeps its profile
        assert_eq!(held.id, "old");
        assert_eq!(slot.snapshot().unwrap().id, "new");
    }
}
