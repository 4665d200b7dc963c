//! Proxy resolution
//!
//! Picks the proxy candidate for a request (explicit option first, then the
//! environment), applies no-proxy exemptions and classifies the result.

use url::Url;

use super::env::{EnvSource, lookup_env};
use super::no_proxy::is_exempt;
use super::types::{ProxyRoute, ProxySetting};
use super::url_handling::parse_proxy_url;
use crate::agent::ConnectionOptions;
use crate::error::Result;
use crate::http::RequestScheme;

/// Variables consulted for https requests.
pub const HTTPS_PROXY_VARS: &[&str] = &["https_proxy"];
/// Variables consulted for plain http requests, in priority order.
pub const HTTP_PROXY_VARS: &[&str] = &["https_proxy", "http_proxy", "proxy"];

/// Resolve how a request to `url` should be routed.
///
/// # Errors
///
/// Fails when the proxy candidate cannot be parsed or uses a scheme no
/// transport exists for.
pub fn resolve_proxy<E: EnvSource + ?Sized>(
    env: &E,
    url: &Url,
    options: &ConnectionOptions,
) -> Result<ProxyRoute> {
    let Some(candidate) = proxy_candidate(env, url, options)? else {
        return Ok(ProxyRoute::Direct);
    };

    let proxy_url = parse_proxy_url(&candidate)?;

    if is_exempt(env, url, options.no_proxy.as_ref()) {
        return Ok(ProxyRoute::Direct);
    }

    let route = ProxyRoute::classify(&proxy_url)?;
    tracing::debug!(
        target: "agentry::proxy",
        host = url.host_str().unwrap_or_default(),
        proxy = %route.target().map(|t| t.descriptor()).unwrap_or_default(),
        "routing through proxy"
    );
    Ok(route)
}

fn proxy_candidate<E: EnvSource + ?Sized>(
    env: &E,
    url: &Url,
    options: &ConnectionOptions,
) -> Result<Option<String>> {
    match &options.proxy {
        Some(ProxySetting::Disabled) => return Ok(None),
        Some(ProxySetting::Uri(uri)) if !uri.trim().is_empty() => return Ok(Some(uri.clone())),
        _ => {}
    }

    let vars = match RequestScheme::of(url)? {
        RequestScheme::Https => HTTPS_PROXY_VARS,
        RequestScheme::Http => HTTP_PROXY_VARS,
    };
    Ok(lookup_env(env, vars))
}
