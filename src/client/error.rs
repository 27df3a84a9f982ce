//! Client error taxonomy.

use thiserror::Error;

use crate::core::lock::LockError;
use crate::core::manifest::ManifestError;

/// Error from a lock service operation.
///
/// Every failure is surfaced to the caller as exactly one of these kinds;
/// there is no local recovery and no automatic retry.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Host configuration forbids remote calls.
    #[error("the lock service is disabled by configuration")]
    ServiceDisabled,

    /// No lock server URL is configured.
    #[error("no lock server configured")]
    UnknownServer,

    /// Local precondition failure on the manifest.
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Local precondition failure on the lock file.
    #[error(transparent)]
    Lockfile(#[from] LockError),

    /// Connection, DNS, TLS, or timeout failure during the exchange.
    #[error("request to {url} failed: {message}")]
    TransportFailure { url: String, message: String },

    /// A response arrived, but not HTTP 200.
    #[error("lock server returned HTTP {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: u16,
        body: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("could not decode response from {url}: {source}")]
    InvalidResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
