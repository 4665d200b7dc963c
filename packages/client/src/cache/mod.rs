//! Agent caching
//!
//! This module provides the pieces that let requests share pooled agents:
//! - [`CacheKey`] derivation from connection-relevant options
//! - [`AgentCache`], a bounded least-recently-used store
//! - [`CacheStats`] hit, miss and eviction counters

pub mod agent_cache;
pub mod cache_key;
pub mod cache_stats;

pub use agent_cache::AgentCache;
pub use cache_key::CacheKey;
pub use cache_stats::{CacheStats, CacheStatsSnapshot};
