//! Wire dialects and endpoint routing.
//!
//! Two incompatible payload shapes exist across the lock server's history:
//! the v2 dialect POSTs the full manifest content (and lock content, for
//! require) and the generate/delta dialect POSTs only the `requires`
//! mapping plus a `package` discriminator for partial updates. The dialect
//! is selected by configuration, never auto-negotiated.

use serde::{Deserialize, Serialize};

/// Wire-payload dialect spoken by the configured lock server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// POST full manifest (and lock) content to the `/v2/*` endpoints.
    #[default]
    V2,
    /// POST only the `requires` mapping to the generate/delta endpoints.
    Generate,
}

/// One remote operation with its fully prepared payload data.
///
/// Payload fields are pre-encoded strings so that request building is a
/// pure mapping from operation to path and form fields.
#[derive(Debug, Clone)]
pub enum Operation {
    Install {
        manifest_json: String,
        requires_json: String,
    },
    Require {
        manifest_json: String,
        lock_content: Option<String>,
        requires_json: String,
        package: String,
        version: Option<String>,
        dry: bool,
    },
    Update {
        requires_json: String,
        package: Option<String>,
    },
    Outdated {
        lock_content: String,
        requires_json: String,
        repositories_json: String,
    },
    LatestInConstraints {
        constraints_json: String,
        only_stable: bool,
    },
}

/// A built request: endpoint path plus form-encoded fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireRequest {
    pub path: &'static str,
    pub fields: Vec<(String, String)>,
}

impl Dialect {
    /// Map an operation to its endpoint path and payload fields.
    pub fn build_request(&self, op: &Operation) -> WireRequest {
        match op {
            Operation::Install {
                manifest_json,
                requires_json,
            } => match self {
                Dialect::V2 => WireRequest {
                    path: "/v2/install",
                    fields: vec![("composerJson".to_string(), manifest_json.clone())],
                },
                Dialect::Generate => WireRequest {
                    path: "/generate",
                    fields: vec![("requires".to_string(), requires_json.clone())],
                },
            },

            Operation::Require {
                manifest_json,
                lock_content,
                requires_json,
                package,
                version,
                dry,
            } => {
                let path = match (self, dry) {
                    (_, true) => "/v2/require/dry",
                    (Dialect::V2, false) => "/v2/require",
                    (Dialect::Generate, false) => "/generate",
                };

                let mut fields = match self {
                    Dialect::V2 => vec![
                        ("composerJson".to_string(), manifest_json.clone()),
                        (
                            "composerLock".to_string(),
                            lock_content.clone().unwrap_or_default(),
                        ),
                    ],
                    Dialect::Generate => {
                        vec![("requires".to_string(), requires_json.clone())]
                    }
                };

                fields.push(("package".to_string(), package.clone()));
                fields.push((
                    "version".to_string(),
                    version.clone().unwrap_or_default(),
                ));

                WireRequest { path, fields }
            }

            // The delta endpoints predate v2 and are shared by both dialects.
            Operation::Update {
                requires_json,
                package,
            } => {
                let mut fields = vec![("requires".to_string(), requires_json.clone())];
                let path = match package {
                    Some(package) => {
                        fields.push(("package".to_string(), package.clone()));
                        "/updatePackage"
                    }
                    None => "/generate",
                };
                WireRequest { path, fields }
            }

            Operation::Outdated {
                lock_content,
                requires_json,
                repositories_json,
            } => WireRequest {
                path: "/versions/outdated",
                fields: vec![
                    ("lock_content".to_string(), lock_content.clone()),
                    ("requires".to_string(), requires_json.clone()),
                    ("repositories".to_string(), repositories_json.clone()),
                ],
            },

            Operation::LatestInConstraints {
                constraints_json,
                only_stable,
            } => WireRequest {
                path: "/versions/latest",
                fields: vec![
                    ("constraints".to_string(), constraints_json.clone()),
                    // Form encoding has no boolean type; 1/0 matches what
                    // the server's historical clients sent.
                    (
                        "stable".to_string(),
                        if *only_stable { "1" } else { "0" }.to_string(),
                    ),
                ],
            },
        }
    }
}
