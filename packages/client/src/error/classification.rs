use super::types::{Error, Kind};

impl Error {
    /// Returns true if a request or proxy URI could not be used.
    #[must_use]
    pub fn is_invalid_url(&self) -> bool {
        matches!(self.inner.kind, Kind::InvalidUrl)
    }

    /// Returns true if the proxy scheme is not http, https or socks.
    #[must_use]
    pub fn is_unsupported_proxy_scheme(&self) -> bool {
        matches!(self.inner.kind, Kind::UnsupportedProxyScheme)
    }

    /// Returns true if the error came from CA, certificate or key material.
    #[must_use]
    pub fn is_tls(&self) -> bool {
        matches!(self.inner.kind, Kind::Tls)
    }

    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self.inner.kind, Kind::Transport)
    }

    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self.inner.kind, Kind::Config)
    }

    /// Returns true for failures caused by caller-supplied configuration
    /// rather than by a transport implementation.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        !self.is_transport()
    }
}
