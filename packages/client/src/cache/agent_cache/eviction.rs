//! Least-recently-used eviction

use super::core::{AgentCache, LruState};

impl<V> AgentCache<V> {
    /// Drop least-recently-used entries until the cache fits its capacity.
    /// Returns the number of entries evicted.
    pub(super) fn evict_lru_entries(&self, state: &mut LruState<V>) -> usize {
        let mut evicted = 0;

        while state.entries.len() > self.capacity {
            let Some((_, key)) = state.order.pop_first() else {
                break;
            };
            if state.entries.remove(&key).is_some() {
                self.stats.record_eviction();
                evicted += 1;
                tracing::debug!(target: "agentry::cache", key = %key, "evicted least recently used agent");
            }
        }

        evicted
    }
}
