//! Per-request connection options

use std::net::IpAddr;

use super::types::AgentHandle;
use crate::proxy::{NoProxy, ProxySetting};
use crate::tls::TlsMaterial;

/// Connection options supplied with each request.
///
/// Every field is optional; the defaults select a direct agent with
/// certificate verification on and the configured default pool size.
#[derive(Clone)]
pub struct ConnectionOptions {
    /// Bypass selection entirely and use this handle as-is
    pub agent: Option<AgentHandle>,
    /// Explicit proxy, taking precedence over the environment
    pub proxy: Option<ProxySetting>,
    /// Exemption list, taking precedence over `no_proxy` in the environment
    pub no_proxy: Option<NoProxy>,
    /// Local address outgoing sockets bind to
    pub local_address: Option<IpAddr>,
    /// Verify server certificates (https only)
    pub strict_ssl: bool,
    /// Trusted CA certificates, PEM
    pub ca: Option<String>,
    /// Client certificate chain, PEM
    pub cert: Option<String>,
    /// Client private key, PEM
    pub key: Option<String>,
    /// Pool size; `None` or zero means the selector default
    pub max_sockets: Option<usize>,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            agent: None,
            proxy: None,
            no_proxy: None,
            local_address: None,
            strict_ssl: true,
            ca: None,
            cert: None,
            key: None,
            max_sockets: None,
        }
    }
}

impl ConnectionOptions {
    /// Pool size to build with, falling back to `default` for unset or zero.
    #[must_use]
    pub fn effective_max_sockets(&self, default: usize) -> usize {
        self.max_sockets.filter(|n| *n > 0).unwrap_or(default)
    }

    /// TLS material carried by these options.
    #[must_use]
    pub fn tls_material(&self) -> TlsMaterial {
        TlsMaterial {
            ca: self.ca.clone(),
            cert: self.cert.clone(),
            key: self.key.clone(),
            reject_unauthorized: self.strict_ssl,
        }
    }
}
