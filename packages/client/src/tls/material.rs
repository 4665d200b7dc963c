//! CA, client certificate and key material for TLS-bearing agents

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use rustls::crypto::CryptoProvider;
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::{ClientConfig, RootCertStore};

use super::errors::TlsError;
use super::verifier::AcceptAnyServerCert;

static PROVIDER: Lazy<Arc<CryptoProvider>> =
    Lazy::new(|| Arc::new(rustls::crypto::ring::default_provider()));

static BUNDLED_ROOTS: Lazy<Arc<RootCertStore>> = Lazy::new(|| {
    let mut roots = RootCertStore::empty();
    roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
    Arc::new(roots)
});

/// PEM material and verification policy an HTTPS or proxy agent is built with.
#[derive(Clone, PartialEq, Eq)]
pub struct TlsMaterial {
    /// Trusted CA certificates; when present they replace the bundled roots.
    pub ca: Option<String>,
    /// Client certificate chain for mutual TLS.
    pub cert: Option<String>,
    /// Private key matching `cert`.
    pub key: Option<String>,
    /// Verify the server certificate chain and name.
    pub reject_unauthorized: bool,
}

impl Default for TlsMaterial {
    fn default() -> Self {
        Self {
            ca: None,
            cert: None,
            key: None,
            reject_unauthorized: true,
        }
    }
}

impl TlsMaterial {
    #[must_use]
    pub fn has_client_auth(&self) -> bool {
        self.cert.is_some() && self.key.is_some()
    }

    /// Assemble a rustls client configuration from this material.
    ///
    /// # Errors
    ///
    /// Fails when PEM blocks cannot be decoded, contain nothing usable, or a
    /// certificate is supplied without its key (or the other way round).
    pub fn client_config(&self) -> Result<ClientConfig, TlsError> {
        let provider = Arc::clone(&PROVIDER);
        let roots = self.root_store()?;
        let client_auth = self.client_auth()?;

        let builder = ClientConfig::builder_with_provider(provider.clone())
            .with_safe_default_protocol_versions()?;

        let builder = if self.reject_unauthorized {
            builder.with_root_certificates(roots)
        } else {
            tracing::debug!(target: "agentry::tls", "server certificate verification disabled");
            builder
                .dangerous()
                .with_custom_certificate_verifier(Arc::new(AcceptAnyServerCert::new(&provider)))
        };

        let config = match client_auth {
            Some((chain, key)) => builder.with_client_auth_cert(chain, key)?,
            None => builder.with_no_client_auth(),
        };

        Ok(config)
    }

    fn root_store(&self) -> Result<Arc<RootCertStore>, TlsError> {
        let Some(ca) = self.ca.as_deref() else {
            return Ok(Arc::clone(&BUNDLED_ROOTS));
        };

        let mut roots = RootCertStore::empty();
        let (added, ignored) = roots.add_parsable_certificates(parse_certs(ca, "ca")?);
        if added == 0 {
            return Err(TlsError::NoCertificates("ca"));
        }
        if ignored > 0 {
            tracing::warn!(target: "agentry::tls", ignored, "skipped unparsable CA certificates");
        }

        Ok(Arc::new(roots))
    }

    fn client_auth(
        &self,
    ) -> Result<Option<(Vec<CertificateDer<'static>>, PrivateKeyDer<'static>)>, TlsError> {
        match (self.cert.as_deref(), self.key.as_deref()) {
            (None, None) => Ok(None),
            (Some(cert), Some(key)) => {
                let chain = parse_certs(cert, "cert")?;
                let key = rustls_pemfile::private_key(&mut key.as_bytes())?
                    .ok_or(TlsError::MissingPrivateKey)?;
                Ok(Some((chain, key)))
            }
            _ => Err(TlsError::IncompleteClientAuth),
        }
    }
}

fn parse_certs(pem: &str, what: &'static str) -> Result<Vec<CertificateDer<'static>>, TlsError> {
    let certs = rustls_pemfile::certs(&mut pem.as_bytes()).collect::<Result<Vec<_>, _>>()?;
    if certs.is_empty() {
        return Err(TlsError::NoCertificates(what));
    }
    Ok(certs)
}

impl fmt::Debug for TlsMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TlsMaterial")
            .field("ca", &self.ca.is_some())
            .field("cert", &self.cert.is_some())
            .field("key", &self.key.as_ref().map(|_| "[redacted]"))
            .field("reject_unauthorized", &self.reject_unauthorized)
            .finish()
    }
}
