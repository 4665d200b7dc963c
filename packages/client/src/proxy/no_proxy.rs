//! No-proxy exemption rules
//!
//! Patterns are domain suffixes compared label by label from the top-level
//! domain downwards, so `example.com` exempts `example.com` and
//! `api.example.com` but not `notexample.com`.

use url::Url;

use super::env::{EnvSource, lookup_env};

/// Environment variable consulted when no explicit list is given.
pub const NO_PROXY_ENV: &str = "no_proxy";

/// A configuration for filtering out requests that shouldn't be proxied
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoProxy {
    patterns: Vec<Pattern>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Pattern {
    raw: String,
    // Labels in reverse order, empty labels removed.
    labels: Vec<String>,
}

impl Pattern {
    fn new(raw: &str) -> Self {
        let labels = raw
            .split('.')
            .filter(|label| !label.is_empty())
            .rev()
            .map(str::to_owned)
            .collect();
        Pattern { raw: raw.to_owned(), labels }
    }

    fn matches(&self, host: &[&str]) -> bool {
        if self.labels.is_empty() {
            return false;
        }

        self.labels.iter().enumerate().all(|(i, label)| {
            host.get(i)
                .is_some_and(|host_label| host_label.eq_ignore_ascii_case(label))
        })
    }
}

impl NoProxy {
    /// Parse a comma separated list such as `"localhost, .internal, example.com"`.
    ///
    /// Whitespace around entries is ignored. Returns `None` for a blank list
    /// so callers can fall back to the environment.
    #[must_use]
    pub fn from_string(no_proxy_list: &str) -> Option<Self> {
        if no_proxy_list.trim().is_empty() {
            return None;
        }

        Some(Self::from_list(no_proxy_list.split(',').map(str::trim)))
    }

    /// Build from already separated patterns; entries are taken as given.
    pub fn from_list<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        NoProxy {
            patterns: patterns
                .into_iter()
                .map(|pattern| Pattern::new(pattern.as_ref()))
                .collect(),
        }
    }

    /// Read the `no_proxy` variable (any case) from `source`.
    pub fn from_env<E: EnvSource + ?Sized>(source: &E) -> Option<Self> {
        lookup_env(source, &[NO_PROXY_ENV]).and_then(|raw| Self::from_string(&raw))
    }

    /// Check if a host should bypass the proxy.
    #[must_use]
    pub fn matches(&self, host: &str) -> bool {
        let host: Vec<&str> = host.split('.').rev().collect();
        self.patterns.iter().any(|pattern| pattern.matches(&host))
    }

    /// Check if the host of `url` should bypass the proxy.
    #[must_use]
    pub fn matches_url(&self, url: &Url) -> bool {
        url.host_str().is_some_and(|host| self.matches(host))
    }

    /// The patterns as they were supplied.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|pattern| pattern.raw.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl From<&str> for NoProxy {
    fn from(list: &str) -> Self {
        Self::from_string(list).unwrap_or_default()
    }
}

impl From<Vec<String>> for NoProxy {
    fn from(patterns: Vec<String>) -> Self {
        Self::from_list(patterns)
    }
}

impl From<Vec<&str>> for NoProxy {
    fn from(patterns: Vec<&str>) -> Self {
        Self::from_list(patterns)
    }
}

/// Decide whether `url` is exempt from proxying.
///
/// An explicit non-empty list wins over the environment's `no_proxy`.
pub fn is_exempt<E: EnvSource + ?Sized>(source: &E, url: &Url, explicit: Option<&NoProxy>) -> bool {
    let exempt = match explicit.filter(|list| !list.is_empty()) {
        Some(list) => list.matches_url(url),
        None => NoProxy::from_env(source).is_some_and(|list| list.matches_url(url)),
    };

    if exempt {
        tracing::debug!(
            target: "agentry::proxy",
            host = url.host_str().unwrap_or_default(),
            "host is exempt from proxying"
        );
    }

    exempt
}
