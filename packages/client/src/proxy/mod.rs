//! Proxy configuration and resolution
//!
//! This module decides, per request, whether to connect directly or through an
//! HTTP, HTTPS or SOCKS proxy, honoring explicit options, the conventional
//! proxy environment variables and no-proxy exemptions.

pub mod env;
pub mod no_proxy;
pub mod resolver;
pub mod types;
pub mod url_handling;

pub use env::{EnvSource, ProcessEnv, get_process_env, lookup_env};
pub use no_proxy::NoProxy;
pub use resolver::resolve_proxy;
pub use types::{ProxyRoute, ProxySetting, ProxyTarget};
