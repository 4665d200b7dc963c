//! Agent builder API modules
//!
//! Fluent construction of [`ConnectionOptions`](agentry_client::ConnectionOptions)
//! ending in agent selection.

pub mod core;
pub mod methods;
pub mod proxy;
pub mod tls;

pub use self::core::AgentBuilder;
