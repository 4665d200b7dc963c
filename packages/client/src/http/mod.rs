//! Request descriptor handling
//!
//! Everything that can name the target of an outbound request converts into a
//! validated `Url` through [`IntoRequestUrl`].

pub mod into_url;

pub use into_url::{IntoRequestUrl, RequestScheme};
