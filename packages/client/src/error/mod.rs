//! Error types for agent selection
//!
//! A single boxed [`Error`] carries a [`Kind`], an optional source error and,
//! where one is involved, the offending URL.

pub mod classification;
pub mod constructors;
pub mod helpers;
pub mod types;

pub use constructors::*;
pub use helpers::{BadScheme, MissingHost, UnsupportedScheme};
pub use types::{Error, Inner, Kind, Result};

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;
