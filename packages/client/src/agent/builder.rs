//! Agent parameter assembly
//!
//! Turns a resolved route and the request's options into the agent kind and
//! the parameters its transport is built with.

use super::options::ConnectionOptions;
use super::types::{AgentKind, AgentOptions};
use crate::http::RequestScheme;
use crate::proxy::ProxyRoute;

/// Decide which kind of agent serves a request and with what parameters.
pub fn plan_agent(
    scheme: RequestScheme,
    route: &ProxyRoute,
    options: &ConnectionOptions,
    default_max_sockets: usize,
) -> (AgentKind, AgentOptions) {
    let max_sockets = options.effective_max_sockets(default_max_sockets);

    let (kind, proxy) = match route {
        ProxyRoute::Direct => {
            return direct_agent(scheme, options, max_sockets);
        }
        ProxyRoute::Http(target) => (AgentKind::HttpProxy, target),
        ProxyRoute::Https(target) => (AgentKind::HttpsProxy, target),
        ProxyRoute::Socks(target) => (AgentKind::SocksProxy, target),
    };

    // Proxy agents always carry TLS material: they may tunnel to https
    // origins or speak TLS to the proxy itself.
    let params = AgentOptions {
        proxy: Some(proxy.clone()),
        max_sockets,
        local_address: options.local_address,
        tls: Some(options.tls_material()),
    };
    (kind, params)
}

fn direct_agent(
    scheme: RequestScheme,
    options: &ConnectionOptions,
    max_sockets: usize,
) -> (AgentKind, AgentOptions) {
    match scheme {
        RequestScheme::Https => (
            AgentKind::Https,
            AgentOptions {
                proxy: None,
                max_sockets,
                local_address: options.local_address,
                tls: Some(options.tls_material()),
            },
        ),
        RequestScheme::Http => (
            AgentKind::Http,
            AgentOptions {
                proxy: None,
                max_sockets,
                local_address: options.local_address,
                tls: None,
            },
        ),
    }
}
