use url::Url;

use crate::error::{self, Result};

/// Scheme of the request a selected agent will carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestScheme {
    Http,
    Https,
}

impl RequestScheme {
    /// Derive the scheme from a request URL.
    ///
    /// Only `http` and `https` are accepted; anything else is an invalid URL.
    pub fn of(url: &Url) -> Result<Self> {
        match url.scheme() {
            "http" => Ok(RequestScheme::Http),
            "https" => Ok(RequestScheme::Https),
            _ => Err(error::url_bad_scheme(url.clone())),
        }
    }

    #[must_use]
    pub fn is_https(self) -> bool {
        matches!(self, RequestScheme::Https)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RequestScheme::Http => "http",
            RequestScheme::Https => "https",
        }
    }
}

/// A trait to try to convert a request descriptor into a `Url`.
///
/// Implemented for URI strings, parsed `Url`s, `http::Uri`s and
/// `http::Request`s (which carry their target URI).
pub trait IntoRequestUrl {
    /// Besides parsing as a valid `Url`, the `Url` must have a host and an
    /// http or https scheme, so it makes sense to pick an agent for it.
    ///
    /// # Errors
    ///
    /// Returns an error of kind `InvalidUrl` if the descriptor does not parse,
    /// has no host or uses another scheme.
    fn into_request_url(self) -> Result<Url>;
}

impl IntoRequestUrl for Url {
    fn into_request_url(self) -> Result<Url> {
        if !self.has_host() {
            return Err(error::url_missing_host(self));
        }
        RequestScheme::of(&self)?;
        Ok(self)
    }
}

impl IntoRequestUrl for &Url {
    fn into_request_url(self) -> Result<Url> {
        self.clone().into_request_url()
    }
}

impl IntoRequestUrl for &str {
    fn into_request_url(self) -> Result<Url> {
        Url::parse(self).map_err(error::invalid_url)?.into_request_url()
    }
}

impl IntoRequestUrl for &String {
    fn into_request_url(self) -> Result<Url> {
        self.as_str().into_request_url()
    }
}

impl IntoRequestUrl for String {
    fn into_request_url(self) -> Result<Url> {
        self.as_str().into_request_url()
    }
}

impl IntoRequestUrl for &::http::Uri {
    fn into_request_url(self) -> Result<Url> {
        self.to_string().into_request_url()
    }
}

impl IntoRequestUrl for ::http::Uri {
    fn into_request_url(self) -> Result<Url> {
        (&self).into_request_url()
    }
}

impl<B> IntoRequestUrl for &::http::Request<B> {
    fn into_request_url(self) -> Result<Url> {
        self.uri().into_request_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_strings_uris_and_requests() {
        let from_str = "https://example.com/a".into_request_url().expect("str parses");
        let from_uri = "https://example.com/a"
            .parse::<::http::Uri>()
            .expect("uri parses")
            .into_request_url()
            .expect("uri converts");
        let request = ::http::Request::get("https://example.com/a")
            .body(())
            .expect("request builds");
        let from_request = (&request).into_request_url().expect("request converts");

        assert_eq!(from_str, from_uri);
        assert_eq!(from_str, from_request);
    }

    #[test]
    fn rejects_relative_and_non_http_targets() {
        assert!("/just/a/path".into_request_url().unwrap_err().is_invalid_url());
        assert!("ftp://example.com".into_request_url().unwrap_err().is_invalid_url());
        assert!("not a url".into_request_url().unwrap_err().is_invalid_url());
    }

    #[test]
    fn scheme_detection() {
        let url = Url::parse("HTTPS://Example.COM").expect("url parses");
        assert_eq!(RequestScheme::of(&url).expect("https"), RequestScheme::Https);
        assert!(RequestScheme::Https.is_https());
        assert!(!RequestScheme::Http.is_https());
    }
}
