//! Client configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::client::dialect::Dialect;
use crate::core::lock;

/// Default lock server URL, used when neither the host nor the
/// configuration provides one.
pub const DEFAULT_LOCK_SERVER_URL: &str = "https://lock.capstan.dev";

/// Default connect timeout for the HTTP exchange.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default total timeout for the HTTP exchange.
pub const DEFAULT_TOTAL_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a [`LockServiceClient`](crate::client::LockServiceClient).
///
/// Constructed once per client instance and immutable thereafter.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the lock server (a host override takes precedence).
    pub base_url: String,

    /// Path to the manifest file.
    pub manifest_path: PathBuf,

    /// Path to the existing lock file, for operations that POST its
    /// content. Defaults to `composer.lock` next to the manifest.
    pub lock_path: Option<PathBuf>,

    /// Whether remote calls are allowed at all.
    pub enabled: bool,

    /// Wire dialect spoken by the configured server.
    pub dialect: Dialect,

    /// Connect timeout for the HTTP exchange.
    pub connect_timeout: Duration,

    /// Total timeout for the HTTP exchange.
    pub total_timeout: Duration,
}

impl ClientConfig {
    /// Create a config for the given manifest path with defaults.
    pub fn new(manifest_path: impl Into<PathBuf>) -> Self {
        ClientConfig {
            base_url: DEFAULT_LOCK_SERVER_URL.to_string(),
            manifest_path: manifest_path.into(),
            lock_path: None,
            enabled: true,
            dialect: Dialect::default(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            total_timeout: DEFAULT_TOTAL_TIMEOUT,
        }
    }

    /// Override the lock server base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an explicit lock file path.
    pub fn with_lock_path(mut self, lock_path: impl Into<PathBuf>) -> Self {
        self.lock_path = Some(lock_path.into());
        self
    }

    /// Select the wire dialect.
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Allow or forbid remote calls.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Override both timeouts.
    pub fn with_timeouts(mut self, connect: Duration, total: Duration) -> Self {
        self.connect_timeout = connect;
        self.total_timeout = total;
        self
    }

    /// The effective lock file path.
    pub fn lock_path(&self) -> PathBuf {
        self.lock_path
            .clone()
            .unwrap_or_else(|| lock::lock_path_for(&self.manifest_path))
    }
}
