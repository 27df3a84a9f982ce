//! composer.json manifest reading and mutation.
//!
//! The manifest is the local declaration of required packages. Capstan
//! never resolves it; it only extracts the `require` mapping (and the
//! `repositories` list) for the wire payload, and can insert a single
//! requirement entry before an operation.

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

/// Canonical manifest file name.
pub const MANIFEST_FILE: &str = "composer.json";

/// Error reading or writing the manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read manifest {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("manifest {path} is not valid JSON: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write manifest {path}: {source}")]
    Unwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The `require` mapping of a manifest at a point in time.
///
/// Package names are unique keys; insertion order follows the document.
/// Constraint values are kept as raw JSON so that a manifest with an
/// unconventional entry still round-trips untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequirementSet {
    entries: Map<String, Value>,
}

impl RequirementSet {
    /// Extract the requirement set from a parsed manifest document.
    ///
    /// A missing or non-object `require` field yields an empty set.
    fn from_document(document: &Map<String, Value>) -> Self {
        let entries = match document.get("require") {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        };
        RequirementSet { entries }
    }

    /// Look up the constraint string for a package.
    pub fn get(&self, package: &str) -> Option<&str> {
        self.entries.get(package).and_then(Value::as_str)
    }

    /// Check whether a package is required.
    pub fn contains(&self, package: &str) -> bool {
        self.entries.contains_key(package)
    }

    /// Number of required packages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(package, constraint)` pairs in document order.
    ///
    /// Entries whose constraint is not a JSON string are skipped.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(name, value)| value.as_str().map(|v| (name.as_str(), v)))
    }

    /// JSON-encode the mapping for a wire payload.
    pub fn to_json(&self) -> String {
        Value::Object(self.entries.clone()).to_string()
    }
}

impl fmt::Display for RequirementSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

/// A loaded composer.json manifest.
///
/// Owns all manifest file I/O; nothing else in the crate touches the file.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Path the manifest was loaded from (writes go back here)
    path: PathBuf,

    /// Raw file content as read (or as last written)
    raw: String,

    /// Parsed document, key order preserved
    document: Map<String, Value>,

    /// Extracted `require` mapping
    requires: RequirementSet,
}

impl Manifest {
    /// Load a manifest from a file path.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        if !path.exists() {
            return Err(ManifestError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ManifestError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(raw, path)
    }

    /// Parse manifest content.
    pub fn parse(raw: String, path: &Path) -> Result<Self, ManifestError> {
        // The top level must be a JSON object.
        let document: Map<String, Value> =
            serde_json::from_str(&raw).map_err(|source| ManifestError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;

        let requires = RequirementSet::from_document(&document);

        Ok(Manifest {
            path: path.to_path_buf(),
            raw,
            document,
            requires,
        })
    }

    /// Path this manifest was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw manifest content, byte-for-byte as on disk.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The `require` mapping.
    pub fn requires(&self) -> &RequirementSet {
        &self.requires
    }

    /// JSON-encode the `repositories` list for a wire payload.
    ///
    /// A manifest without repositories encodes as an empty list.
    pub fn repositories_json(&self) -> String {
        match self.document.get("repositories") {
            Some(value) => value.to_string(),
            None => "[]".to_string(),
        }
    }

    /// Insert or overwrite a requirement entry and persist the manifest.
    ///
    /// The whole document is written back pretty-printed to the same path.
    /// The write is at-most-once with no backup; a crash mid-write can
    /// corrupt the file.
    pub fn add_requirement(
        &mut self,
        package: &str,
        constraint: &str,
    ) -> Result<&RequirementSet, ManifestError> {
        let require = self
            .document
            .entry("require".to_string())
            .or_insert_with(|| Value::Object(Map::new()));

        // A scalar `require` field is replaced wholesale; the manifest was
        // malformed in a way the parser tolerates.
        if !require.is_object() {
            *require = Value::Object(Map::new());
        }

        if let Value::Object(map) = require {
            map.insert(package.to_string(), Value::String(constraint.to_string()));
        }

        let pretty = match serde_json::to_string_pretty(&Value::Object(self.document.clone())) {
            Ok(s) => s,
            Err(source) => {
                return Err(ManifestError::Malformed {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        std::fs::write(&self.path, &pretty).map_err(|source| ManifestError::Unwritable {
            path: self.path.clone(),
            source,
        })?;

        self.raw = pretty;
        self.requires = RequirementSet::from_document(&self.document);

        tracing::debug!(
            "added requirement {} {} to {}",
            package,
            constraint,
            self.path.display()
        );

        Ok(&self.requires)
    }
}
