//! High-level operations gluing context, configuration, and the client.
//!
//! The client core never persists anything; writing the returned lock
//! document back to disk happens here.

pub mod capstan_install;
pub mod capstan_require;
pub mod capstan_update;
pub mod capstan_versions;
pub mod lockfile;

use std::path::Path;

use crate::client::config::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_TOTAL_TIMEOUT};
use crate::client::{ClientConfig, LockServiceClient};
use crate::util::context::GlobalContext;

/// Command-line overrides applied on top of the file configuration.
#[derive(Debug, Clone, Default)]
pub struct RemoteOptions {
    /// Lock server URL override
    pub url: Option<String>,
}

/// Build a client for the manifest from the merged file configuration
/// plus command-line overrides.
pub(crate) fn build_client(
    ctx: &GlobalContext,
    manifest_path: &Path,
    remote: &RemoteOptions,
) -> LockServiceClient {
    let mut service = ctx.load_config().service;

    let mut client_config = ClientConfig::new(manifest_path).with_timeouts(
        service.connect_timeout().unwrap_or(DEFAULT_CONNECT_TIMEOUT),
        service.total_timeout().unwrap_or(DEFAULT_TOTAL_TIMEOUT),
    );

    if let Some(dialect) = service.dialect {
        client_config = client_config.with_dialect(dialect);
    }

    // An explicit --url wins over the config file; drop the host override
    // so it cannot shadow the flag.
    if let Some(url) = &remote.url {
        client_config = client_config.with_base_url(url.clone());
        service.url = None;
    }

    LockServiceClient::new(client_config).with_host(Box::new(service))
}
