use std::error::Error as StdError;
use std::fmt;

/// A Result alias where the Err case is `agentry_client::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors that can occur while selecting or building an agent.
pub struct Error {
    pub(crate) inner: Box<Inner>,
}

pub struct Inner {
    pub kind: Kind,
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub url: Option<url::Url>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Request or proxy URI could not be parsed or is not usable
    InvalidUrl,
    /// Proxy URI scheme is none of http, https or socks*
    UnsupportedProxyScheme,
    /// CA, certificate or private key material could not be used
    Tls,
    /// A transport factory refused to build an agent
    Transport,
    /// Selector configuration is invalid
    Config,
}

impl Error {
    pub fn new(kind: Kind) -> Error {
        Error {
            inner: Box::new(Inner { kind, source: None, url: None }),
        }
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub fn with<E: Into<Box<dyn StdError + Send + Sync>>>(mut self, source: E) -> Error {
        self.inner.source = Some(source.into());
        self
    }

    /// Attach the URL involved in the failure. Credentials are stripped.
    #[must_use]
    pub fn with_url(mut self, mut url: url::Url) -> Self {
        if url.password().is_some() {
            let _ = url.set_password(None);
        }
        self.inner.url = Some(url);
        self
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.inner.kind
    }

    /// Get the URL associated with this error, if any
    #[must_use]
    pub fn url(&self) -> Option<&url::Url> {
        self.inner.url.as_ref()
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("agentry_client::Error");

        f.field("kind", &self.inner.kind);

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        if let Some(ref url) = self.inner.url {
            f.field("url", &url.as_str());
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.kind {
            Kind::InvalidUrl => f.write_str("invalid url")?,
            Kind::UnsupportedProxyScheme => f.write_str("unsupported proxy scheme")?,
            Kind::Tls => f.write_str("invalid tls material")?,
            Kind::Transport => f.write_str("transport construction failed")?,
            Kind::Config => f.write_str("invalid selector configuration")?,
        }

        if let Some(ref url) = self.inner.url {
            write!(f, " ({url})")?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}
