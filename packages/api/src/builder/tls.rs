//! TLS options for HTTPS and proxied agents

use crate::builder::core::AgentBuilder;

impl AgentBuilder<'_> {
    /// Verify server certificates (the default)
    ///
    /// Passing `false` accepts any certificate the server presents. Agents
    /// built that way are cached separately from verifying ones.
    #[must_use]
    pub fn strict_ssl(mut self, strict: bool) -> Self {
        self.options.strict_ssl = strict;
        self
    }

    /// Trust the CA certificates in `pem` instead of the bundled roots
    #[must_use]
    pub fn ca(mut self, pem: impl Into<String>) -> Self {
        self.options.ca = Some(pem.into());
        self
    }

    /// Client certificate chain for mutual TLS
    #[must_use]
    pub fn cert(mut self, pem: impl Into<String>) -> Self {
        self.options.cert = Some(pem.into());
        self
    }

    /// Private key for the client certificate
    #[must_use]
    pub fn key(mut self, pem: impl Into<String>) -> Self {
        self.options.key = Some(pem.into());
        self
    }
}
