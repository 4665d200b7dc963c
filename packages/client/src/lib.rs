//! # Agentry Client
//!
//! Connection agent selection for outbound HTTP(S) requests.
//!
//! Given a request and its connection options, the selector decides whether
//! the request goes direct or through an HTTP, HTTPS or SOCKS proxy, derives
//! a cache key from everything that makes two connection pools
//! incompatible, and returns a shared pooled agent for that key.
//!
//! ## Features
//!
//! - **Proxy resolution** from explicit options or `https_proxy`,
//!   `http_proxy` and `proxy` environment variables
//! - **`no_proxy` exemptions** with suffix matching on host labels
//! - **Bounded LRU agent cache** with hit/miss statistics
//! - **Rustls TLS** with custom CA, client certificates and non-strict mode
//! - **Lazy transport loading** through a per-kind registry
//!
//! ## Usage
//!
//! ```rust
//! use agentry_client::{AgentSelector, ConnectionOptions};
//!
//! let selector = AgentSelector::new();
//! let options = ConnectionOptions {
//!     proxy: Some("http://proxy.internal:3128".into()),
//!     ..ConnectionOptions::default()
//! };
//!
//! let handle = selector.select("http://example.com/", &options)?;
//! assert!(handle.agent().is_some_and(|agent| agent.proxy().is_some()));
//! # Ok::<(), agentry_client::Error>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod agent;
pub mod cache;
pub mod config;
pub mod error;
pub mod http;
pub mod proxy;
pub mod tls;

pub mod prelude;

pub use crate::prelude::*;

pub use url::Url;
