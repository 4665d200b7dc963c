//! Environment variable lookup
//!
//! Proxy configuration traditionally lives in environment variables whose
//! case varies between tools (`https_proxy`, `HTTPS_PROXY`, ...). Lookups here
//! try every candidate name as given, upper-cased and lower-cased.

use std::collections::HashMap;
use std::env;

/// Source of configuration variables.
///
/// [`ProcessEnv`] reads the process environment; a `HashMap` works as a fixed
/// environment for embedding applications and tests.
pub trait EnvSource: Send + Sync {
    /// Value of exactly `name`, or `None` if it is unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        // Non-unicode values cannot name a proxy; treat them as unset.
        env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

impl<T: EnvSource + ?Sized> EnvSource for std::sync::Arc<T> {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// Look up the first defined value among `candidates`.
///
/// Each candidate is tried as given, then upper-cased, then lower-cased; the
/// next candidate is only consulted when all three forms are undefined. Empty
/// values count as undefined.
pub fn lookup_env<E: EnvSource + ?Sized>(source: &E, candidates: &[&str]) -> Option<String> {
    candidates.iter().find_map(|candidate| {
        let value = lookup_one(source, candidate);
        if let Some(ref value) = value {
            tracing::trace!(
                target: "agentry::env",
                candidate = %candidate,
                len = value.len(),
                "environment candidate resolved"
            );
        }
        value
    })
}

/// [`lookup_env`] against the process environment.
#[must_use]
pub fn get_process_env(candidates: &[&str]) -> Option<String> {
    lookup_env(&ProcessEnv, candidates)
}

fn lookup_one<E: EnvSource + ?Sized>(source: &E, name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }

    [name.to_owned(), name.to_uppercase(), name.to_lowercase()]
        .iter()
        .find_map(|form| source.var(form).filter(|value| !value.is_empty()))
}
