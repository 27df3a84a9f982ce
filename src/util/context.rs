//! Global context for Capstan operations.
//!
//! Provides centralized access to configuration paths and manifest
//! discovery.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::manifest::{ManifestError, MANIFEST_FILE};
use crate::util::config::{self, Config};

/// Global context containing paths and environment.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Home directory for global Capstan data (~/.capstan/)
    home: PathBuf,
}

impl GlobalContext {
    /// Create a new GlobalContext with defaults.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Ok(Self::from_cwd(cwd))
    }

    /// Create a GlobalContext with a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Self {
        Self::from_cwd(cwd)
    }

    fn from_cwd(cwd: PathBuf) -> Self {
        let home = directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(".capstan"))
            .unwrap_or_else(|| PathBuf::from(".capstan"));

        GlobalContext { cwd, home }
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the Capstan home directory (~/.capstan/).
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Get the global configuration file path.
    pub fn global_config_path(&self) -> PathBuf {
        self.home.join("config.toml")
    }

    /// Get the project configuration file path (.capstan/config.toml).
    pub fn project_config_path(&self) -> PathBuf {
        self.cwd.join(".capstan").join("config.toml")
    }

    /// Load the merged configuration for this context.
    pub fn load_config(&self) -> Config {
        config::load_merged_config(&self.global_config_path(), &self.project_config_path())
    }

    /// Find the manifest (composer.json) starting from cwd and searching
    /// upward.
    pub fn find_manifest(&self) -> Result<PathBuf, ManifestError> {
        let mut current = self.cwd.clone();
        loop {
            let candidate = current.join(MANIFEST_FILE);
            if candidate.is_file() {
                return Ok(candidate);
            }
            if !current.pop() {
                return Err(ManifestError::NotFound {
                    path: self.cwd.join(MANIFEST_FILE),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_context_paths() {
        let ctx = GlobalContext::with_cwd(PathBuf::from("/project"));
        assert_eq!(ctx.cwd(), Path::new("/project"));
        assert!(ctx.global_config_path().ends_with("config.toml"));
        assert_eq!(
            ctx.project_config_path(),
            Path::new("/project/.capstan/config.toml")
        );
    }

    #[test]
    fn test_find_manifest_in_cwd() {
        let tmp = TempDir::new().unwrap();
        let manifest = tmp.path().join(MANIFEST_FILE);
        std::fs::write(&manifest, "{}").unwrap();

        let ctx = GlobalContext::with_cwd(tmp.path().to_path_buf());
        assert_eq!(ctx.find_manifest().unwrap(), manifest);
    }

    #[test]
    fn test_find_manifest_searches_upward() {
        let tmp = TempDir::new().unwrap();
        let manifest = tmp.path().join(MANIFEST_FILE);
        std::fs::write(&manifest, "{}").unwrap();

        let nested = tmp.path().join("src/deeply/nested");
        std::fs::create_dir_all(&nested).unwrap();

        let ctx = GlobalContext::with_cwd(nested);
        assert_eq!(ctx.find_manifest().unwrap(), manifest);
    }

    #[test]
    fn test_find_manifest_missing() {
        let tmp = TempDir::new().unwrap();
        let ctx = GlobalContext::with_cwd(tmp.path().to_path_buf());

        let result = ctx.find_manifest();
        assert!(matches!(result, Err(ManifestError::NotFound { .. })));
    }
}
