//! TLS-specific error types for detailed error handling

/// Why CA, certificate or key material could not be used
#[derive(Debug, thiserror::Error)]
pub enum TlsError {
    #[error("{0} PEM contains no certificates")]
    NoCertificates(&'static str),
    #[error("key PEM contains no private key")]
    MissingPrivateKey,
    #[error("client certificate and private key must be supplied together")]
    IncompleteClientAuth,
    #[error("PEM decoding failed: {0}")]
    Pem(#[from] std::io::Error),
    #[error("rustls rejected the configuration: {0}")]
    Rustls(#[from] rustls::Error),
}
