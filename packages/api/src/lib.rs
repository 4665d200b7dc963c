//! Agentry Public API
//!
//! Pick the pooled connection agent an outbound HTTP(S) request should use.
//! Requests are routed direct or through a proxy taken from explicit options
//! or the `https_proxy`/`http_proxy`/`proxy` environment variables, honoring
//! `no_proxy`, and agents are shared between requests whose connection
//! settings are compatible.
//!
//! ```rust
//! let handle = agentry::Agentry::builder()
//!     .proxy("http://proxy.internal:3128")
//!     .max_sockets(32)
//!     .select("http://example.com/")?;
//!
//! let agent = handle.agent().expect("pooling is enabled");
//! assert_eq!(agent.max_sockets(), 32);
//! # Ok::<(), agentry::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

use once_cell::sync::OnceCell;

pub mod builder;

pub use builder::AgentBuilder;

// Re-export the selection engine
pub use agentry_client::proxy::{NoProxy, ProxySetting, get_process_env};
pub use agentry_client::{
    Agent, AgentHandle, AgentKind, AgentOptions, AgentSelector, CacheKey, CacheStatsSnapshot,
    ConnectionOptions, Error, ErrorKind, IntoRequestUrl, Result, SelectorConfig, TlsMaterial,
    TransportFactory,
};

pub use ::http::Uri;
pub use url::Url;

static DEFAULT_SELECTOR: OnceCell<AgentSelector> = OnceCell::new();

/// The process-wide selector used by [`select_agent`] and [`Agentry::builder`].
///
/// Created with default sizing on first use unless
/// [`init_default_selector`] ran before.
pub fn default_selector() -> &'static AgentSelector {
    DEFAULT_SELECTOR.get_or_init(AgentSelector::new)
}

/// Size the process-wide selector.
///
/// Returns `Ok(false)` without changing anything when the default selector
/// was already created.
///
/// # Errors
///
/// Returns a `Config` error if `config` fails validation.
pub fn init_default_selector(config: SelectorConfig) -> Result<bool> {
    let selector = AgentSelector::with_config(config)?;
    match DEFAULT_SELECTOR.set(selector) {
        Ok(()) => Ok(true),
        Err(_) => {
            tracing::warn!(
                target: "agentry::agent",
                "default selector already initialized, keeping existing configuration"
            );
            Ok(false)
        }
    }
}

/// Select the agent for `request` with the process-wide selector.
///
/// # Errors
///
/// See [`AgentSelector::select`].
pub fn select_agent<R: IntoRequestUrl>(request: R, options: &ConnectionOptions) -> Result<AgentHandle> {
    default_selector().select(request, options)
}

/// Counters of the process-wide agent cache.
#[must_use]
pub fn cache_stats() -> CacheStatsSnapshot {
    default_selector().cache().stats().snapshot()
}

/// Main entry point providing builder constructors
pub struct Agentry;

impl Agentry {
    /// Builder backed by the process-wide selector
    #[must_use]
    pub fn builder() -> AgentBuilder<'static> {
        AgentBuilder::new(default_selector())
    }

    /// Builder backed by `selector`
    #[must_use]
    pub fn with_selector(selector: &AgentSelector) -> AgentBuilder<'_> {
        AgentBuilder::new(selector)
    }
}
