//! Bounded least-recently-used agent cache
//!
//! - `core`: AgentCache struct, recency bookkeeping and construction
//! - `operations`: peek/get/set and the atomic get-or-insert used by selection
//! - `eviction`: dropping least-recently-used entries past capacity
//!
//! All operations take a single mutex so recency order and entry set never
//! disagree, and concurrent selectors never build the same agent twice.

pub mod core;
pub mod eviction;
pub mod operations;

pub use core::AgentCache;
