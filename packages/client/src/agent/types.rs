//! Agent types
//!
//! An [`Agent`] is the immutable pooled-connection handle shared by every
//! request whose cache key matches. [`AgentHandle`] is what selection hands
//! back: a shared agent, or the explicit "no pooling" sentinel.

use std::net::IpAddr;
use std::sync::Arc;

use rustls::ClientConfig;

use crate::proxy::ProxyTarget;
use crate::tls::TlsMaterial;

/// The transport variant an agent implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AgentKind {
    /// Keep-alive pool straight to http origins
    Http,
    /// Keep-alive pool straight to https origins
    Https,
    /// Requests forwarded through an http proxy
    HttpProxy,
    /// Requests tunneled through a TLS-speaking proxy
    HttpsProxy,
    /// Connections tunneled through a SOCKS proxy
    SocksProxy,
}

impl AgentKind {
    pub const ALL: [AgentKind; 5] = [
        AgentKind::Http,
        AgentKind::Https,
        AgentKind::HttpProxy,
        AgentKind::HttpsProxy,
        AgentKind::SocksProxy,
    ];

    #[must_use]
    pub fn is_proxy(self) -> bool {
        matches!(
            self,
            AgentKind::HttpProxy | AgentKind::HttpsProxy | AgentKind::SocksProxy
        )
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Http => "http",
            AgentKind::Https => "https",
            AgentKind::HttpProxy => "http-proxy",
            AgentKind::HttpsProxy => "https-proxy",
            AgentKind::SocksProxy => "socks-proxy",
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters a transport builds an agent from.
#[derive(Clone, PartialEq, Eq)]
pub struct AgentOptions {
    /// Proxy endpoint for proxy variants; `None` for direct agents
    pub proxy: Option<ProxyTarget>,
    /// Maximum concurrent sockets per origin
    pub max_sockets: usize,
    /// Local address outgoing sockets bind to
    pub local_address: Option<IpAddr>,
    /// TLS material; `None` for direct http agents
    pub tls: Option<TlsMaterial>,
}

/// A pooled-connection handle.
pub struct Agent {
    pub(crate) kind: AgentKind,
    pub(crate) options: AgentOptions,
    pub(crate) tls_config: Option<Arc<ClientConfig>>,
}

impl Agent {
    pub fn new(kind: AgentKind, options: AgentOptions, tls_config: Option<Arc<ClientConfig>>) -> Self {
        Self {
            kind,
            options,
            tls_config,
        }
    }

    #[must_use]
    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    #[must_use]
    pub fn options(&self) -> &AgentOptions {
        &self.options
    }

    #[must_use]
    pub fn max_sockets(&self) -> usize {
        self.options.max_sockets
    }

    #[must_use]
    pub fn local_address(&self) -> Option<IpAddr> {
        self.options.local_address
    }

    #[must_use]
    pub fn proxy(&self) -> Option<&ProxyTarget> {
        self.options.proxy.as_ref()
    }

    /// Whether server certificates are verified. Always true for agents
    /// without TLS material.
    #[must_use]
    pub fn reject_unauthorized(&self) -> bool {
        self.options
            .tls
            .as_ref()
            .is_none_or(|tls| tls.reject_unauthorized)
    }

    /// Prepared rustls configuration for TLS-bearing agents.
    #[must_use]
    pub fn tls_config(&self) -> Option<&Arc<ClientConfig>> {
        self.tls_config.as_ref()
    }
}

/// Result of agent selection, also accepted as an explicit override.
#[derive(Clone)]
pub enum AgentHandle {
    /// Use this agent; shared with every request that maps to it
    Shared(Arc<Agent>),
    /// Do not pool: the caller opens a fresh connection per request
    Disabled,
}

impl AgentHandle {
    #[must_use]
    pub fn agent(&self) -> Option<&Arc<Agent>> {
        match self {
            AgentHandle::Shared(agent) => Some(agent),
            AgentHandle::Disabled => None,
        }
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        matches!(self, AgentHandle::Disabled)
    }

    /// True when both handles are the same agent instance (or both disabled).
    #[must_use]
    pub fn ptr_eq(&self, other: &AgentHandle) -> bool {
        match (self, other) {
            (AgentHandle::Shared(a), AgentHandle::Shared(b)) => Arc::ptr_eq(a, b),
            (AgentHandle::Disabled, AgentHandle::Disabled) => true,
            _ => false,
        }
    }
}

impl From<Agent> for AgentHandle {
    fn from(agent: Agent) -> Self {
        AgentHandle::Shared(Arc::new(agent))
    }
}

impl From<Arc<Agent>> for AgentHandle {
    fn from(agent: Arc<Agent>) -> Self {
        AgentHandle::Shared(agent)
    }
}
