use thiserror::Error;

/// A marker type to indicate that a URI scheme was bad.
#[derive(Debug, Error)]
#[error("bad scheme, expected http or https")]
pub struct BadScheme;

/// A marker type to indicate that a URI carried no host.
#[derive(Debug, Error)]
#[error("url has no host")]
pub struct MissingHost;

/// The proxy scheme is not one a transport exists for.
#[derive(Debug, Error)]
#[error("proxy scheme `{scheme}` is not supported")]
pub struct UnsupportedScheme {
    pub scheme: String,
}
