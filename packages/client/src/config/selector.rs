//! Agent selector configuration
//!
//! Sizing knobs for the agent cache and the pools of the agents it builds.
//! Loading these values from files or the environment is up to the embedding
//! application; the type is `serde`-ready for that purpose.

use serde::{Deserialize, Serialize};

use super::validation::{ConfigResult, ConfigValidator, Validator};

/// Default number of agents kept in the cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 50;
/// Default pool size of a built agent when the request does not set one.
pub const DEFAULT_MAX_SOCKETS: usize = 15;

const MAX_CACHE_CAPACITY: usize = 100_000;
const MAX_SOCKETS_LIMIT: usize = 65_535;

/// Configuration for an `AgentSelector`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Maximum number of agents kept before least-recently-used eviction
    pub cache_capacity: usize,
    /// Pool size used when a request leaves `max_sockets` unset or zero
    pub default_max_sockets: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            default_max_sockets: DEFAULT_MAX_SOCKETS,
        }
    }
}

impl SelectorConfig {
    /// Many distinct proxies, bind addresses or TLS identities in one process
    #[must_use]
    pub fn high_fanout() -> Self {
        Self {
            cache_capacity: 500,
            default_max_sockets: 64,
        }
    }

    /// Few agents with small pools, for constrained environments
    #[must_use]
    pub fn conservative() -> Self {
        Self {
            cache_capacity: 10,
            default_max_sockets: 4,
        }
    }
}

impl Validator for SelectorConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_count(self.cache_capacity, MAX_CACHE_CAPACITY, "cache_capacity")?;
        ConfigValidator::validate_count(
            self.default_max_sockets,
            MAX_SOCKETS_LIMIT,
            "default_max_sockets",
        )
    }
}
