//! Debug implementations that keep key material and credentials out of logs

use std::fmt;

use super::options::ConnectionOptions;
use super::types::{Agent, AgentHandle, AgentOptions};

impl fmt::Debug for AgentOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentOptions")
            .field("proxy", &self.proxy)
            .field("max_sockets", &self.max_sockets)
            .field("local_address", &self.local_address)
            .field("tls", &self.tls)
            .finish()
    }
}

impl fmt::Debug for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent")
            .field("kind", &self.kind)
            .field("options", &self.options)
            .field("tls_config", &self.tls_config.is_some())
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for AgentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentHandle::Shared(agent) => f.debug_tuple("Shared").field(agent).finish(),
            AgentHandle::Disabled => f.write_str("Disabled"),
        }
    }
}

impl fmt::Debug for ConnectionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionOptions")
            .field("agent", &self.agent)
            .field("proxy", &self.proxy)
            .field("no_proxy", &self.no_proxy)
            .field("local_address", &self.local_address)
            .field("strict_ssl", &self.strict_ssl)
            .field("ca", &self.ca.is_some())
            .field("cert", &self.cert.is_some())
            .field("key", &self.key.as_ref().map(|_| "[redacted]"))
            .field("max_sockets", &self.max_sockets)
            .finish()
    }
}
