use super::BoxError;
use super::helpers::{BadScheme, MissingHost, UnsupportedScheme};
use super::types::{Error, Kind};

/// Creates an `Error` for a URI that failed to parse.
pub fn invalid_url<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::InvalidUrl).with(e.into())
}

/// Creates an `Error` for a request URL whose scheme is neither http nor https.
pub fn url_bad_scheme(url: url::Url) -> Error {
    Error::new(Kind::InvalidUrl).with(BadScheme).with_url(url)
}

/// Creates an `Error` for a URL that has no host to connect to.
pub fn url_missing_host(url: url::Url) -> Error {
    Error::new(Kind::InvalidUrl).with(MissingHost).with_url(url)
}

/// Creates an `Error` for a proxy URL with an unrecognized scheme.
pub fn unsupported_proxy_scheme(url: url::Url) -> Error {
    let scheme = url.scheme().to_owned();
    Error::new(Kind::UnsupportedProxyScheme)
        .with(UnsupportedScheme { scheme })
        .with_url(url)
}

/// Creates an `Error` for unusable CA, certificate or key material.
pub fn tls<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Tls).with(e.into())
}

/// Creates an `Error` for a transport factory failure.
pub fn transport<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Transport).with(e.into())
}

/// Creates an `Error` for an invalid selector configuration.
pub fn configuration<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Config).with(e.into())
}
