//! Configuration file support for Capstan.
//!
//! Capstan supports two configuration file locations:
//! - Global: `~/.capstan/config.toml` - User-wide defaults
//! - Project: `.capstan/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config.
//!
//! ## Example config.toml
//!
//! ```toml
//! [service]
//! enabled = true
//! url = "https://lock.example.com"
//! dialect = "v2"
//! connect-timeout = 10
//! timeout = 30
//! ```

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::client::host::{Host, LogDetail, LogRecord};
use crate::client::Dialect;

/// Capstan configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Lock service settings
    pub service: ServiceConfig,
}

/// Lock-service settings from the `[service]` section.
///
/// All fields are optional so that a global and a project file can each
/// set only what they care about; unset fields fall back to the client
/// defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ServiceConfig {
    /// Whether the remote service may be called (default: true)
    pub enabled: Option<bool>,

    /// Base URL of the lock server
    pub url: Option<String>,

    /// Wire dialect ("v2" or "generate")
    pub dialect: Option<Dialect>,

    /// Connect timeout in seconds
    pub connect_timeout: Option<u64>,

    /// Total request timeout in seconds
    pub timeout: Option<u64>,
}

impl ServiceConfig {
    /// Effective enabled flag.
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// Configured connect timeout, if any.
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout.map(Duration::from_secs)
    }

    /// Configured total timeout, if any.
    pub fn total_timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    /// Merge another service config into this one (other takes precedence).
    pub fn merge(&mut self, other: ServiceConfig) {
        if other.enabled.is_some() {
            self.enabled = other.enabled;
        }
        if other.url.is_some() {
            self.url = other.url;
        }
        if other.dialect.is_some() {
            self.dialect = other.dialect;
        }
        if other.connect_timeout.is_some() {
            self.connect_timeout = other.connect_timeout;
        }
        if other.timeout.is_some() {
            self.timeout = other.timeout;
        }
    }
}

/// The configuration file is the host integration for the CLI: it gates
/// remote calls, supplies the server URL, and routes diagnostic records
/// into the log.
impl Host for ServiceConfig {
    fn is_enabled(&self) -> bool {
        ServiceConfig::is_enabled(self)
    }

    fn base_url_override(&self) -> Option<String> {
        self.url.clone()
    }

    fn log(&self, record: &LogRecord<'_>) {
        match record.detail {
            LogDetail::Error(text) => {
                tracing::error!(url = record.url, error = text, "{}", record.message)
            }
            LogDetail::Status(code) => {
                tracing::error!(url = record.url, status = code, "{}", record.message)
            }
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        self.service.merge(other.service);
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.capstan/config.toml)
/// 2. Global config (~/.capstan/config.toml)
/// 3. Defaults
pub fn load_merged_config(global_path: &Path, project_path: &Path) -> Config {
    let mut config = Config::default();

    if global_path.exists() {
        config.merge(Config::load_or_default(global_path));
    }

    if project_path.exists() {
        config.merge(Config::load_or_default(project_path));
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let content = r#"
[service]
enabled = false
url = "https://lock.example.com"
dialect = "generate"
connect-timeout = 5
timeout = 15
"#;
        let config: Config = toml::from_str(content).unwrap();
        assert!(!config.service.is_enabled());
        assert_eq!(
            config.service.url.as_deref(),
            Some("https://lock.example.com")
        );
        assert_eq!(config.service.dialect, Some(Dialect::Generate));
        assert_eq!(
            config.service.connect_timeout(),
            Some(Duration::from_secs(5))
        );
        assert_eq!(config.service.total_timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_empty_config_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.service.is_enabled());
        assert!(config.service.url.is_none());
        assert!(config.service.dialect.is_none());
    }

    #[test]
    fn test_project_overrides_global() {
        let tmp = TempDir::new().unwrap();
        let global = tmp.path().join("global.toml");
        let project = tmp.path().join("project.toml");

        std::fs::write(
            &global,
            "[service]\nurl = \"https://global.example.com\"\nenabled = false\n",
        )
        .unwrap();
        std::fs::write(&project, "[service]\nurl = \"https://project.example.com\"\n").unwrap();

        let config = load_merged_config(&global, &project);
        assert_eq!(
            config.service.url.as_deref(),
            Some("https://project.example.com")
        );
        // The project file is silent on enabled, so the global flag holds.
        assert!(!config.service.is_enabled());
    }

    #[test]
    fn test_missing_files_yield_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_merged_config(
            &tmp.path().join("nope.toml"),
            &tmp.path().join("also-nope.toml"),
        );
        assert!(config.service.is_enabled());
        assert!(config.service.url.is_none());
    }

    #[test]
    fn test_service_config_as_host() {
        let service = ServiceConfig {
            enabled: Some(false),
            url: Some("https://lock.example.com".to_string()),
            ..Default::default()
        };

        assert!(!Host::is_enabled(&service));
        assert_eq!(
            service.base_url_override().as_deref(),
            Some("https://lock.example.com")
        );
    }
}
