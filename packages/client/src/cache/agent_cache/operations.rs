//! Cache operations: peek, get, set and get-or-insert

use super::core::AgentCache;

impl<V: Clone> AgentCache<V> {
    /// Look up `key` without changing its recency.
    pub fn peek(&self, key: &str) -> Option<V> {
        self.lock().entries.get(key).map(|slot| slot.value.clone())
    }

    /// True if `key` is cached; does not change recency.
    pub fn contains(&self, key: &str) -> bool {
        self.lock().entries.contains_key(key)
    }

    /// Look up `key` and mark it most recently used.
    pub fn get(&self, key: &str) -> Option<V> {
        let value = self.lock().touch(key);
        match value {
            Some(_) => self.stats.record_hit(),
            None => self.stats.record_miss(),
        }
        value
    }

    /// Insert or overwrite `key` as most recently used, evicting the least
    /// recently used entry if the cache grows past capacity.
    pub fn set(&self, key: impl Into<String>, value: V) {
        let mut state = self.lock();
        state.insert(key.into(), value);
        self.stats.record_insertion();
        self.evict_lru_entries(&mut state);
    }

    /// Return the cached value for `key` (promoting it), or build one with
    /// `make`, store it and return it.
    ///
    /// The lock is held across `make`, so concurrent callers asking for the
    /// same key observe a single construction.
    ///
    /// # Errors
    ///
    /// Propagates the error from `make`; nothing is cached in that case.
    pub fn get_or_try_insert_with<E, F>(&self, key: &str, make: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        let mut state = self.lock();

        if let Some(value) = state.touch(key) {
            self.stats.record_hit();
            tracing::trace!(target: "agentry::cache", key = %key, "agent cache hit");
            return Ok(value);
        }

        self.stats.record_miss();
        tracing::debug!(target: "agentry::cache", key = %key, "agent cache miss");

        let value = make()?;
        state.insert(key.to_owned(), value.clone());
        self.stats.record_insertion();
        self.evict_lru_entries(&mut state);
        Ok(value)
    }
}
