//! Agent selection
//!
//! [`AgentSelector`] owns the agent cache, the transport registry and the
//! environment it reads proxy settings from. Embedding applications create
//! one per HTTP client context and share it through `Arc`.

use std::sync::Arc;

use super::builder::plan_agent;
use super::options::ConnectionOptions;
use super::registry::TransportRegistry;
use super::types::AgentHandle;
use crate::cache::{AgentCache, CacheKey};
use crate::config::{SelectorConfig, Validator};
use crate::error::{self, Result};
use crate::http::{IntoRequestUrl, RequestScheme};
use crate::proxy::{EnvSource, ProcessEnv, resolve_proxy};

/// Selects, builds and caches pooled agents for outbound requests.
pub struct AgentSelector {
    config: SelectorConfig,
    cache: AgentCache,
    registry: TransportRegistry,
    env: Arc<dyn EnvSource>,
}

impl AgentSelector {
    /// Selector with default sizing reading the process environment.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(SelectorConfig::default(), Arc::new(ProcessEnv))
    }

    /// Selector with custom sizing.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if `config` fails validation.
    pub fn with_config(config: SelectorConfig) -> Result<Self> {
        config.validate().map_err(error::configuration)?;
        Ok(Self::from_parts(config, Arc::new(ProcessEnv)))
    }

    /// Read proxy variables from `env` instead of the process environment.
    #[must_use]
    pub fn with_env(mut self, env: Arc<dyn EnvSource>) -> Self {
        self.env = env;
        self
    }

    /// Use `registry` to obtain transports.
    #[must_use]
    pub fn with_registry(mut self, registry: TransportRegistry) -> Self {
        self.registry = registry;
        self
    }

    fn from_parts(config: SelectorConfig, env: Arc<dyn EnvSource>) -> Self {
        Self {
            cache: AgentCache::new(config.cache_capacity),
            registry: TransportRegistry::new(),
            config,
            env,
        }
    }

    /// Select the agent for a request.
    ///
    /// An explicit `options.agent` is returned verbatim without touching the
    /// cache. Otherwise the request is routed, its cache key derived, and the
    /// cached agent returned or a new one built and cached.
    ///
    /// # Errors
    ///
    /// Fails on unparseable request or proxy URIs, unsupported proxy schemes,
    /// unusable TLS material and transport failures. Failed builds are not
    /// cached.
    pub fn select<R: IntoRequestUrl>(
        &self,
        request: R,
        options: &ConnectionOptions,
    ) -> Result<AgentHandle> {
        if let Some(agent) = &options.agent {
            tracing::trace!(target: "agentry::agent", "using caller supplied agent");
            return Ok(agent.clone());
        }

        let url = request.into_request_url()?;
        let scheme = RequestScheme::of(&url)?;
        let route = resolve_proxy(&*self.env, &url, options)?;
        let key = CacheKey::derive(&url, &route, options)?;

        let agent = self.cache.get_or_try_insert_with(key.as_str(), || {
            let (kind, params) = plan_agent(scheme, &route, options, self.config.default_max_sockets);
            self.registry.factory(kind).build(params).map(Arc::new)
        })?;

        Ok(AgentHandle::Shared(agent))
    }

    /// Cache key a request would be stored under.
    ///
    /// # Errors
    ///
    /// Same routing failures as [`select`](Self::select).
    pub fn cache_key<R: IntoRequestUrl>(&self, request: R, options: &ConnectionOptions) -> Result<CacheKey> {
        let url = request.into_request_url()?;
        let route = resolve_proxy(&*self.env, &url, options)?;
        CacheKey::derive(&url, &route, options)
    }

    #[must_use]
    pub fn cache(&self) -> &AgentCache {
        &self.cache
    }

    #[must_use]
    pub fn registry(&self) -> &TransportRegistry {
        &self.registry
    }

    #[must_use]
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }
}

impl Default for AgentSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AgentSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentSelector")
            .field("config", &self.config)
            .field("cache", &self.cache)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
