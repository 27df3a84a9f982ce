//! Capstan - delegated dependency-lock resolution
//!
//! This crate provides a client for a remote lock server: the local
//! manifest (and, for some operations, the existing lock file) is shipped
//! over HTTP and the resolved lock document comes back verbatim. No
//! dependency resolution happens locally.

pub mod client;
pub mod core;
pub mod ops;
pub mod util;

/// Test utilities and mocks for Capstan unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides a recording mock transport and manifest
/// fixtures.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{lock::LockDocument, manifest::Manifest, manifest::RequirementSet};

pub use crate::client::{ClientConfig, ClientError, Dialect, LockServiceClient};
pub use crate::util::context::GlobalContext;
