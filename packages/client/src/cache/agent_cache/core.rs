//! Core AgentCache structure and initialization

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use hashbrown::HashMap;

use super::super::cache_stats::CacheStats;
use crate::agent::Agent;
use crate::config::DEFAULT_CACHE_CAPACITY;

/// Bounded key-value store with least-recently-used eviction.
///
/// Keys are [`CacheKey`](crate::cache::CacheKey) strings; values default to
/// shared agents but any cheaply clonable handle works.
pub struct AgentCache<V = Arc<Agent>> {
    pub(super) state: Mutex<LruState<V>>,
    pub(super) capacity: usize,
    pub(super) stats: CacheStats,
}

pub(super) struct LruState<V> {
    pub(super) entries: HashMap<String, Slot<V>>,
    /// Recency order: lowest tick is least recently used.
    pub(super) order: BTreeMap<u64, String>,
    pub(super) tick: u64,
}

pub(super) struct Slot<V> {
    pub(super) value: V,
    pub(super) tick: u64,
}

impl<V> LruState<V> {
    fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: BTreeMap::new(),
            tick: 0,
        }
    }

    pub(super) fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }
}

impl<V: Clone> LruState<V> {
    /// Mark `key` most recently used and return its value.
    pub(super) fn touch(&mut self, key: &str) -> Option<V> {
        let tick = self.next_tick();
        let slot = self.entries.get_mut(key)?;
        self.order.remove(&slot.tick);
        slot.tick = tick;
        self.order.insert(tick, key.to_owned());
        Some(slot.value.clone())
    }

    /// Insert or overwrite `key` as most recently used.
    pub(super) fn insert(&mut self, key: String, value: V) {
        let tick = self.next_tick();
        if let Some(previous) = self.entries.insert(key.clone(), Slot { value, tick }) {
            self.order.remove(&previous.tick);
        }
        self.order.insert(tick, key);
    }
}

impl<V> AgentCache<V> {
    /// Create a cache holding at most `capacity` entries (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            state: Mutex::new(LruState::new()),
            capacity: capacity.max(1),
            stats: CacheStats::default(),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all cached entries
    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.order.clear();
    }

    /// Keys from least to most recently used.
    pub fn keys(&self) -> Vec<String> {
        self.lock().order.values().cloned().collect()
    }

    pub(super) fn lock(&self) -> MutexGuard<'_, LruState<V>> {
        self.state.lock().unwrap_or_else(|poisoned| {
            tracing::warn!(target: "agentry::cache", "recovering poisoned agent cache lock");
            poisoned.into_inner()
        })
    }
}

impl<V> Default for AgentCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl<V> std::fmt::Debug for AgentCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentCache")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .field("stats", &self.stats.snapshot())
            .finish()
    }
}
