//! TLS material handling
//!
//! Agents that speak TLS (direct HTTPS and the proxy variants) carry a
//! prepared rustls client configuration built from the caller's CA,
//! certificate and key PEM strings. Handshakes themselves happen in the
//! transport that uses the agent.

pub mod errors;
pub mod material;
pub mod verifier;

pub use errors::TlsError;
pub use material::TlsMaterial;
pub use verifier::AcceptAnyServerCert;

/// Hex SHA-256 of PEM material, used to tell material apart in cache keys
/// without embedding it.
#[must_use]
pub fn fingerprint(pem: &str) -> String {
    hex::encode(ring::digest::digest(&ring::digest::SHA256, pem.as_bytes()))
}
