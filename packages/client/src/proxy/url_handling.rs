//! Proxy URI parsing

use url::Url;

use crate::error::{self, Result};

/// Parse a proxy URI taken from options or the environment.
///
/// A bare `host:port` without a scheme is read as an http proxy, the way
/// most tools interpret `http_proxy=proxy.local:3128`.
pub fn parse_proxy_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    let url = if raw.contains("://") {
        Url::parse(raw)
    } else {
        Url::parse(&format!("http://{raw}"))
    }
    .map_err(error::invalid_url)?;

    if !url.has_host() {
        return Err(error::url_missing_host(url));
    }

    Ok(url)
}
