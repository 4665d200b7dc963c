//! Agentry Prelude
//!
//! The types most callers need to select agents.

// Selection
pub use crate::agent::{
    Agent, AgentHandle, AgentKind, AgentOptions, AgentSelector, ConnectionOptions,
    PooledTransport, TransportFactory, TransportLoader, TransportRegistry,
};

// Caching
pub use crate::cache::{AgentCache, CacheKey, CacheStats, CacheStatsSnapshot};

// Configuration
pub use crate::config::{DEFAULT_CACHE_CAPACITY, DEFAULT_MAX_SOCKETS, SelectorConfig};

// Error types
pub use crate::error::{Error, Kind as ErrorKind, Result};

// Request and proxy types
pub use crate::http::{IntoRequestUrl, RequestScheme};
pub use crate::proxy::{
    EnvSource, NoProxy, ProcessEnv, ProxyRoute, ProxySetting, ProxyTarget, get_process_env,
};

// TLS
pub use crate::tls::TlsMaterial;
