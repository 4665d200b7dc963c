//! Terminal methods
//!
//! Selecting an agent, or just computing the cache key a request maps to.

use agentry_client::{AgentHandle, CacheKey, IntoRequestUrl, Result};

use crate::builder::core::AgentBuilder;

impl AgentBuilder<'_> {
    /// Select the agent for `request`
    ///
    /// # Errors
    ///
    /// Fails on unparseable request or proxy URIs, unsupported proxy schemes
    /// and unusable TLS material.
    ///
    /// # Examples
    /// ```no_run
    /// use agentry::Agentry;
    ///
    /// let handle = Agentry::builder()
    ///     .no_proxy("internal.example")
    ///     .select("https://api.internal.example/v1")?;
    /// # Ok::<(), agentry::Error>(())
    /// ```
    pub fn select<R: IntoRequestUrl>(self, request: R) -> Result<AgentHandle> {
        let handle = self.selector.select(request, &self.options)?;

        if self.debug_enabled {
            match handle.agent() {
                Some(agent) => tracing::debug!(
                    target: "agentry::agent",
                    kind = %agent.kind(),
                    proxy = ?agent.proxy().map(agentry_client::ProxyTarget::descriptor),
                    "selected agent"
                ),
                None => tracing::debug!(target: "agentry::agent", "pooling disabled"),
            }
        }

        Ok(handle)
    }

    /// Cache key `request` maps to with these options
    ///
    /// # Errors
    ///
    /// Same routing failures as [`select`](Self::select).
    pub fn cache_key<R: IntoRequestUrl>(&self, request: R) -> Result<CacheKey> {
        self.selector.cache_key(request, &self.options)
    }
}
