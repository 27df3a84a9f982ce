//! The lock service client.
//!
//! Translates a high-level operation into exactly one HTTP POST against
//! the configured lock server and interprets the result. Local
//! preconditions are validated before any network traffic; every failure
//! maps to one kind in [`ClientError`].

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use url::Url;

pub mod config;
pub mod dialect;
pub mod error;
pub mod host;
pub mod transport;

pub use config::{ClientConfig, DEFAULT_LOCK_SERVER_URL};
pub use dialect::{Dialect, Operation, WireRequest};
pub use error::ClientError;
pub use host::{Host, LogDetail, LogRecord, NoopHost};
pub use transport::{HttpTransport, Transport, TransportError, WireResponse};

use crate::core::lock::{self, LockDocument};
use crate::core::manifest::Manifest;

/// Either an available version or "no update available".
///
/// On the wire the server answers with a version string or literal
/// `false` per package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionAdvice {
    Available(String),
    UpToDate,
}

impl VersionAdvice {
    /// The available version, if any.
    pub fn version(&self) -> Option<&str> {
        match self {
            VersionAdvice::Available(version) => Some(version),
            VersionAdvice::UpToDate => None,
        }
    }
}

impl<'de> serde::Deserialize<'de> for VersionAdvice {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(version) => Ok(VersionAdvice::Available(version)),
            Value::Bool(false) => Ok(VersionAdvice::UpToDate),
            other => Err(serde::de::Error::custom(format!(
                "expected a version string or false, got {other}"
            ))),
        }
    }
}

/// Client for the remote lock server.
///
/// One client holds one immutable [`ClientConfig`]; each operation
/// issues at most one request and owns its connection for the duration.
pub struct LockServiceClient {
    config: ClientConfig,
    host: Box<dyn Host>,
    transport: Box<dyn Transport>,
}

impl LockServiceClient {
    /// Create a client with the default host and HTTP transport.
    pub fn new(config: ClientConfig) -> Self {
        let transport = HttpTransport::new(config.connect_timeout, config.total_timeout);
        LockServiceClient {
            config,
            host: Box::new(NoopHost),
            transport: Box::new(transport),
        }
    }

    /// Inject a host integration.
    pub fn with_host(mut self, host: Box<dyn Host>) -> Self {
        self.host = host;
        self
    }

    /// Substitute the transport. Test seam.
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// The client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Generate the lock document for the current manifest.
    pub fn install(&self) -> Result<LockDocument, ClientError> {
        let base = self.preflight()?;
        let manifest = self.load_manifest()?;

        let op = Operation::Install {
            manifest_json: manifest.raw().to_string(),
            requires_json: manifest.requires().to_json(),
        };

        let (_, body) = self.execute(&base, &op)?;
        Ok(LockDocument::new(body))
    }

    /// Resolve a lock document that includes `package` at `version`.
    ///
    /// The manifest is read as-is; callers wanting the new requirement
    /// persisted locally mutate the manifest first.
    pub fn require(
        &self,
        package: &str,
        version: Option<&str>,
    ) -> Result<LockDocument, ClientError> {
        self.require_inner(package, version, false)
    }

    /// Same wire call as [`require`](Self::require) against the dry-run
    /// endpoint; the result is not meant to be persisted.
    pub fn dry_require(
        &self,
        package: &str,
        version: Option<&str>,
    ) -> Result<LockDocument, ClientError> {
        self.require_inner(package, version, true)
    }

    fn require_inner(
        &self,
        package: &str,
        version: Option<&str>,
        dry: bool,
    ) -> Result<LockDocument, ClientError> {
        let base = self.preflight()?;
        let manifest = self.load_manifest()?;

        // The v2 shape carries the existing lock content, so the lock
        // file is a precondition under that dialect.
        let lock_content = match self.config.dialect {
            Dialect::V2 => Some(lock::read_lock_content(&self.config.lock_path())?),
            Dialect::Generate => None,
        };

        let op = Operation::Require {
            manifest_json: manifest.raw().to_string(),
            lock_content,
            requires_json: manifest.requires().to_json(),
            package: package.to_string(),
            version: version.map(str::to_string),
            dry,
        };

        let (_, body) = self.execute(&base, &op)?;
        Ok(LockDocument::new(body))
    }

    /// Regenerate the lock document; with a package, only that package
    /// is updated.
    pub fn update(&self, package: Option<&str>) -> Result<LockDocument, ClientError> {
        let base = self.preflight()?;
        let manifest = self.load_manifest()?;

        let op = Operation::Update {
            requires_json: manifest.requires().to_json(),
            package: package.map(str::to_string),
        };

        let (_, body) = self.execute(&base, &op)?;
        Ok(LockDocument::new(body))
    }

    /// Ask the server which locked packages are outdated.
    ///
    /// Reads both the manifest and the existing lock content. The
    /// per-package info is kept as raw JSON.
    pub fn outdated(&self) -> Result<Map<String, Value>, ClientError> {
        let base = self.preflight()?;
        let manifest = self.load_manifest()?;
        let lock_content = lock::read_lock_content(&self.config.lock_path())?;

        let op = Operation::Outdated {
            lock_content,
            requires_json: manifest.requires().to_json(),
            repositories_json: manifest.repositories_json(),
        };

        let (url, body) = self.execute(&base, &op)?;
        decode_json(url, &body)
    }

    /// Ask the server for the latest version of each package within the
    /// given constraints.
    ///
    /// Does not touch the local manifest; the constraints are supplied
    /// by the caller.
    pub fn latest_version_in_constraints(
        &self,
        constraints: &BTreeMap<String, Vec<String>>,
        only_stable: bool,
    ) -> Result<BTreeMap<String, VersionAdvice>, ClientError> {
        let base = self.preflight()?;

        let mut encoded = Map::new();
        for (package, list) in constraints {
            encoded.insert(
                package.clone(),
                Value::Array(list.iter().cloned().map(Value::String).collect()),
            );
        }

        let op = Operation::LatestInConstraints {
            constraints_json: Value::Object(encoded).to_string(),
            only_stable,
        };

        let (url, body) = self.execute(&base, &op)?;
        decode_json(url, &body)
    }

    /// Check the preconditions shared by every operation and resolve the
    /// effective base URL.
    fn preflight(&self) -> Result<String, ClientError> {
        if !self.config.enabled || !self.host.is_enabled() {
            return Err(ClientError::ServiceDisabled);
        }

        let base = self
            .host
            .base_url_override()
            .unwrap_or_else(|| self.config.base_url.clone());

        if base.trim().is_empty() {
            return Err(ClientError::UnknownServer);
        }

        Ok(base)
    }

    fn load_manifest(&self) -> Result<Manifest, ClientError> {
        Ok(Manifest::load(&self.config.manifest_path)?)
    }

    fn endpoint_url(&self, base: &str, path: &str) -> Result<Url, ClientError> {
        let joined = format!("{}{}", base.trim_end_matches('/'), path);
        Url::parse(&joined).map_err(|err| ClientError::TransportFailure {
            url: joined.clone(),
            message: err.to_string(),
        })
    }

    /// Perform the single POST for an operation and classify the outcome.
    ///
    /// Failures are recorded to the host sink before the error is
    /// returned; that side effect never changes the result.
    fn execute(&self, base: &str, op: &Operation) -> Result<(String, Vec<u8>), ClientError> {
        let request = self.config.dialect.build_request(op);
        let url = self.endpoint_url(base, request.path)?;

        tracing::debug!("POST {}", url);

        match self.transport.post_form(&url, &request.fields) {
            Err(err) => {
                let message = err.to_string();
                tracing::error!("lock server request failed: {} ({})", url, message);
                self.host.log(&LogRecord {
                    message: "lock server request failed",
                    url: url.as_str(),
                    detail: LogDetail::Error(&message),
                });
                Err(ClientError::TransportFailure {
                    url: url.to_string(),
                    message,
                })
            }
            Ok(response) if response.status != 200 => {
                tracing::error!(
                    "lock server returned HTTP {} for {}",
                    response.status,
                    url
                );
                self.host.log(&LogRecord {
                    message: "lock server returned an unexpected status",
                    url: url.as_str(),
                    detail: LogDetail::Status(response.status),
                });
                Err(ClientError::UnexpectedStatus {
                    url: url.to_string(),
                    status: response.status,
                    body: String::from_utf8_lossy(&response.body).into_owned(),
                })
            }
            Ok(response) => Ok((url.to_string(), response.body)),
        }
    }
}

fn decode_json<T: serde::de::DeserializeOwned>(
    url: String,
    body: &[u8],
) -> Result<T, ClientError> {
    serde_json::from_slice(body).map_err(|source| ClientError::InvalidResponse { url, source })
}
