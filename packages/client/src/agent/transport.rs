//! Transport factories
//!
//! A [`TransportFactory`] is the seam to the code that actually opens and
//! pools sockets: given [`AgentOptions`] it produces an [`Agent`]. The
//! bundled [`PooledTransport`] prepares the agent's parameters and TLS
//! configuration and leaves socket handling to whoever drives the agent.

use std::sync::Arc;

use super::types::{Agent, AgentKind, AgentOptions};
use crate::error::{self, Result};

/// Builds agents of one [`AgentKind`].
pub trait TransportFactory: Send + Sync {
    /// The kind of agent this factory builds.
    fn kind(&self) -> AgentKind;

    /// Build an agent from `options`.
    ///
    /// # Errors
    ///
    /// Implementations return `Tls` errors for unusable material and
    /// `Transport` errors for anything else they cannot honor.
    fn build(&self, options: AgentOptions) -> Result<Agent>;
}

#[derive(Debug, thiserror::Error)]
#[error("{kind} transport cannot be built {reason}")]
struct RouteMismatch {
    kind: AgentKind,
    reason: &'static str,
}

/// Default transport for every agent kind.
#[derive(Debug, Clone, Copy)]
pub struct PooledTransport {
    kind: AgentKind,
}

impl PooledTransport {
    #[must_use]
    pub fn new(kind: AgentKind) -> Self {
        Self { kind }
    }
}

impl TransportFactory for PooledTransport {
    fn kind(&self) -> AgentKind {
        self.kind
    }

    fn build(&self, options: AgentOptions) -> Result<Agent> {
        match (self.kind.is_proxy(), options.proxy.is_some()) {
            (true, false) => {
                return Err(error::transport(RouteMismatch {
                    kind: self.kind,
                    reason: "without a proxy endpoint",
                }));
            }
            (false, true) => {
                return Err(error::transport(RouteMismatch {
                    kind: self.kind,
                    reason: "with a proxy endpoint",
                }));
            }
            _ => {}
        }

        let tls_config = match options.tls.as_ref() {
            Some(material) => Some(Arc::new(material.client_config().map_err(error::tls)?)),
            None => None,
        };

        tracing::debug!(
            target: "agentry::agent",
            kind = %self.kind,
            max_sockets = options.max_sockets,
            local_address = ?options.local_address,
            proxy = ?options.proxy.as_ref().map(|p| p.descriptor()),
            "built agent"
        );

        Ok(Agent::new(self.kind, options, tls_config))
    }
}
