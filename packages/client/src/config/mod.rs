//! Configuration
//!
//! Selector sizing and its validation.

pub mod selector;
pub mod validation;

pub use selector::{DEFAULT_CACHE_CAPACITY, DEFAULT_MAX_SOCKETS, SelectorConfig};
pub use validation::{ConfigResult, ConfigValidator, ConfigurationError, Validator};
