//! Agent construction and selection
//!
//! - [`types`]: agents, agent kinds and handles
//! - [`options`]: per-request connection options
//! - [`builder`]: route + options to agent kind and parameters
//! - [`transport`]: the factory seam and the default pooled transport
//! - [`registry`]: once-per-kind transport loading
//! - [`selector`]: the cached selection entry point

pub mod builder;
pub mod debug_impls;
pub mod options;
pub mod registry;
pub mod selector;
pub mod transport;
pub mod types;

pub use builder::plan_agent;
pub use options::ConnectionOptions;
pub use registry::{TransportLoader, TransportRegistry, default_loader};
pub use selector::AgentSelector;
pub use transport::{PooledTransport, TransportFactory};
pub use types::{Agent, AgentHandle, AgentKind, AgentOptions};
