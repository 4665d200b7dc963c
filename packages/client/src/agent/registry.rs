//! Transport registry
//!
//! Each transport implementation is resolved at most once per registry, on
//! first demand, and reused for every agent of that kind afterwards.

use std::sync::{Arc, Mutex, MutexGuard};

use hashbrown::HashMap;

use super::transport::{PooledTransport, TransportFactory};
use super::types::AgentKind;

/// Produces the factory for a kind the first time it is needed.
pub type TransportLoader = fn(AgentKind) -> Arc<dyn TransportFactory>;

/// Loader used by [`TransportRegistry::new`].
pub fn default_loader(kind: AgentKind) -> Arc<dyn TransportFactory> {
    Arc::new(PooledTransport::new(kind))
}

/// Mutex-guarded map from agent kind to its lazily loaded factory.
pub struct TransportRegistry {
    loader: TransportLoader,
    slots: Mutex<HashMap<AgentKind, Arc<dyn TransportFactory>>>,
}

impl TransportRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::with_loader(default_loader)
    }

    #[must_use]
    pub fn with_loader(loader: TransportLoader) -> Self {
        Self {
            loader,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Install `factory` for its kind, replacing whatever was loaded.
    pub fn register(&self, factory: Arc<dyn TransportFactory>) {
        let kind = factory.kind();
        self.lock().insert(kind, factory);
        tracing::debug!(target: "agentry::agent", kind = %kind, "registered transport");
    }

    /// The factory for `kind`, loading it on first use.
    pub fn factory(&self, kind: AgentKind) -> Arc<dyn TransportFactory> {
        let mut slots = self.lock();
        slots
            .entry(kind)
            .or_insert_with(|| {
                tracing::debug!(target: "agentry::agent", kind = %kind, "initializing transport");
                (self.loader)(kind)
            })
            .clone()
    }

    #[must_use]
    pub fn is_loaded(&self, kind: AgentKind) -> bool {
        self.lock().contains_key(&kind)
    }

    /// Kinds whose factory has been loaded or registered, in a stable order.
    #[must_use]
    pub fn loaded_kinds(&self) -> Vec<AgentKind> {
        let mut kinds: Vec<AgentKind> = self.lock().keys().copied().collect();
        kinds.sort();
        kinds
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<AgentKind, Arc<dyn TransportFactory>>> {
        self.slots.lock().unwrap_or_else(|poisoned| {
            tracing::warn!(target: "agentry::agent", "recovering poisoned transport registry lock");
            poisoned.into_inner()
        })
    }
}

impl Default for TransportRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TransportRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportRegistry")
            .field("loaded", &self.loaded_kinds())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    static LOADS: AtomicUsize = AtomicUsize::new(0);

    fn counting_loader(kind: AgentKind) -> Arc<dyn TransportFactory> {
        LOADS.fetch_add(1, Ordering::SeqCst);
        default_loader(kind)
    }

    #[test]
    fn each_kind_loads_once() {
        let registry = TransportRegistry::with_loader(counting_loader);
        assert!(registry.loaded_kinds().is_empty());

        let first = registry.factory(AgentKind::Https);
        let second = registry.factory(AgentKind::Https);
        assert!(Arc::ptr_eq(&first, &second));
        registry.factory(AgentKind::Http);

        assert_eq!(LOADS.load(Ordering::SeqCst), 2);
        assert_eq!(registry.loaded_kinds(), vec![AgentKind::Http, AgentKind::Https]);
        assert!(!registry.is_loaded(AgentKind::SocksProxy));
    }

    #[test]
    fn registered_factory_replaces_default() {
        let registry = TransportRegistry::new();
        let custom: Arc<dyn TransportFactory> = Arc::new(PooledTransport::new(AgentKind::Http));
        registry.register(custom.clone());

        assert!(Arc::ptr_eq(&registry.factory(AgentKind::Http), &custom));
    }
}
